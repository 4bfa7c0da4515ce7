use thiserror::Error;

use crate::model::ids::{PartId, QuestionId};
use crate::model::letter::{LetterError, MAX_OPTIONS, OptionLetter};
use crate::model::media::{MediaRef, MediaValidationError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question {id}: text cannot be empty")]
    EmptyText { id: QuestionId },

    #[error("question {id}: at least one option is required")]
    NoOptions { id: QuestionId },

    #[error("question {id}: {count} options exceed the A-Z letter range")]
    TooManyOptions { id: QuestionId, count: usize },

    #[error("question {id}: answer {answer} does not match any of {count} options")]
    AnswerOutOfRange {
        id: QuestionId,
        answer: OptionLetter,
        count: usize,
    },

    #[error("question {id}: invalid answer letter: {source}")]
    InvalidAnswer {
        id: QuestionId,
        #[source]
        source: LetterError,
    },

    #[error("question {id}: invalid audio reference: {source}")]
    Audio {
        id: QuestionId,
        #[source]
        source: MediaValidationError,
    },

    #[error("question {id}: invalid image reference: {source}")]
    Image {
        id: QuestionId,
        #[source]
        source: MediaValidationError,
    },
}

//
// ─── DRAFT (unvalidated input) ─────────────────────────────────────────────────
//

/// Question as it arrives from a bank document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub part: PartId,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub audio: String,
    pub image: Option<String>,
    pub transcript: Option<String>,
    pub remark: Option<String>,
}

impl QuestionDraft {
    /// Checks text, options, answer letter and media references.
    ///
    /// Blank optional fields are dropped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` describing the first problem found.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let id = self.id;
        let text = self.question.trim();
        if text.is_empty() {
            return Err(QuestionError::EmptyText { id });
        }

        let count = self.options.len();
        if count == 0 {
            return Err(QuestionError::NoOptions { id });
        }
        if count > MAX_OPTIONS {
            return Err(QuestionError::TooManyOptions { id, count });
        }

        let answer: OptionLetter = self
            .answer
            .parse()
            .map_err(|source| QuestionError::InvalidAnswer { id, source })?;
        if answer.index() >= count {
            return Err(QuestionError::AnswerOutOfRange { id, answer, count });
        }

        let audio = MediaRef::audio(&self.audio)
            .map_err(|source| QuestionError::Audio { id, source })?;
        let image = non_blank(self.image)
            .map(MediaRef::image)
            .transpose()
            .map_err(|source| QuestionError::Image { id, source })?;

        Ok(Question {
            id,
            part: self.part,
            text: text.to_string(),
            options: self.options,
            answer,
            audio,
            image,
            transcript: non_blank(self.transcript),
            remark: non_blank(self.remark),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

//
// ─── VALIDATED QUESTION ────────────────────────────────────────────────────────
//

/// A single-choice listening question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    part: PartId,
    text: String,
    options: Vec<String>,
    answer: OptionLetter,
    audio: MediaRef,
    image: Option<MediaRef>,
    transcript: Option<String>,
    remark: Option<String>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn part(&self) -> PartId {
        self.part
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Options paired with their letter codes, in display order.
    pub fn lettered_options(&self) -> impl Iterator<Item = (OptionLetter, &str)> {
        self.options
            .iter()
            .enumerate()
            .filter_map(|(idx, text)| {
                OptionLetter::from_index(idx)
                    .ok()
                    .map(|letter| (letter, text.as_str()))
            })
    }

    #[must_use]
    pub fn answer(&self) -> OptionLetter {
        self.answer
    }

    /// True if `letter` names one of this question's options.
    #[must_use]
    pub fn has_option(&self, letter: OptionLetter) -> bool {
        letter.index() < self.options.len()
    }

    #[must_use]
    pub fn is_correct(&self, letter: OptionLetter) -> bool {
        self.answer == letter
    }

    #[must_use]
    pub fn audio(&self) -> &MediaRef {
        &self.audio
    }

    #[must_use]
    pub fn image(&self) -> Option<&MediaRef> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn transcript(&self) -> Option<&str> {
        self.transcript.as_deref()
    }

    #[must_use]
    pub fn remark(&self) -> Option<&str> {
        self.remark.as_deref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new(1),
            part: PartId::new(1),
            question: "What is the man doing?".into(),
            options: vec!["Reading".into(), "Cooking".into(), "Sleeping".into()],
            answer: "B".into(),
            audio: "audio/1.mp3".into(),
            image: None,
            transcript: Some("He is cooking dinner.".into()),
            remark: Some("  ".into()),
        }
    }

    #[test]
    fn validates_and_letters_options() {
        let question = draft().validate().unwrap();
        let letters: Vec<String> = question
            .lettered_options()
            .map(|(letter, text)| format!("{letter}:{text}"))
            .collect();
        assert_eq!(letters, vec!["A:Reading", "B:Cooking", "C:Sleeping"]);
        assert_eq!(question.answer().as_char(), 'B');
        assert!(question.remark().is_none(), "blank remark is dropped");
        assert_eq!(question.transcript(), Some("He is cooking dinner."));
    }

    #[test]
    fn answer_must_name_an_option() {
        let mut d = draft();
        d.answer = "D".into();
        let err = d.validate().unwrap_err();
        assert!(matches!(err, QuestionError::AnswerOutOfRange { count: 3, .. }));
    }

    #[test]
    fn empty_text_is_rejected() {
        let mut d = draft();
        d.question = "   ".into();
        assert!(matches!(
            d.validate().unwrap_err(),
            QuestionError::EmptyText { .. }
        ));
    }

    #[test]
    fn options_are_required() {
        let mut d = draft();
        d.options.clear();
        assert!(matches!(
            d.validate().unwrap_err(),
            QuestionError::NoOptions { .. }
        ));
    }

    #[test]
    fn audio_is_required() {
        let mut d = draft();
        d.audio = String::new();
        assert!(matches!(
            d.validate().unwrap_err(),
            QuestionError::Audio { .. }
        ));
    }

    #[test]
    fn has_option_checks_range() {
        let question = draft().validate().unwrap();
        assert!(question.has_option(OptionLetter::from_index(2).unwrap()));
        assert!(!question.has_option(OptionLetter::from_index(3).unwrap()));
    }
}
