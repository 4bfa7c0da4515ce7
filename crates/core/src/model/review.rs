use crate::model::letter::OptionLetter;
use crate::model::question::Question;

/// Which submitted questions the review list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReviewFilter {
    #[default]
    All,
    Correct,
    Wrong,
    Unanswered,
}

impl ReviewFilter {
    pub const ALL: [ReviewFilter; 4] = [
        ReviewFilter::All,
        ReviewFilter::Correct,
        ReviewFilter::Wrong,
        ReviewFilter::Unanswered,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ReviewFilter::All => "All",
            ReviewFilter::Correct => "Correct",
            ReviewFilter::Wrong => "Wrong",
            ReviewFilter::Unanswered => "Unanswered",
        }
    }

    #[must_use]
    pub fn accepts(self, status: ReviewStatus) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::Correct => status == ReviewStatus::Correct,
            ReviewFilter::Wrong => status == ReviewStatus::Incorrect,
            ReviewFilter::Unanswered => status == ReviewStatus::Unanswered,
        }
    }
}

/// Outcome of one question after submission.
///
/// Unanswered questions score as incorrect but are reported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewStatus {
    Correct,
    Incorrect,
    Unanswered,
}

impl ReviewStatus {
    #[must_use]
    pub fn of(question: &Question, selected: Option<OptionLetter>) -> Self {
        match selected {
            None => ReviewStatus::Unanswered,
            Some(letter) if question.is_correct(letter) => ReviewStatus::Correct,
            Some(_) => ReviewStatus::Incorrect,
        }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        self == ReviewStatus::Correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::{PartId, QuestionId};
    use crate::model::question::QuestionDraft;

    fn question() -> Question {
        QuestionDraft {
            id: QuestionId::new(1),
            part: PartId::new(1),
            question: "Q".into(),
            options: vec!["a".into(), "b".into()],
            answer: "B".into(),
            audio: "a.mp3".into(),
            image: None,
            transcript: None,
            remark: None,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn status_distinguishes_unanswered_from_wrong() {
        let q = question();
        let a = OptionLetter::from_index(0).unwrap();
        let b = OptionLetter::from_index(1).unwrap();
        assert_eq!(ReviewStatus::of(&q, Some(b)), ReviewStatus::Correct);
        assert_eq!(ReviewStatus::of(&q, Some(a)), ReviewStatus::Incorrect);
        assert_eq!(ReviewStatus::of(&q, None), ReviewStatus::Unanswered);
    }

    #[test]
    fn wrong_filter_excludes_unanswered() {
        assert!(ReviewFilter::Wrong.accepts(ReviewStatus::Incorrect));
        assert!(!ReviewFilter::Wrong.accepts(ReviewStatus::Unanswered));
        assert!(ReviewFilter::All.accepts(ReviewStatus::Unanswered));
    }
}
