use listening_core::model::{OptionLetter, PartId, QuestionId, ReviewFilter};
use services::{ConfirmPrompt, Confirmation, QuizSession};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    TogglePart(PartId),
    Start,
    Answer(QuestionId, OptionLetter),
    ToggleTranscript(QuestionId),
    NextPart,
    Submit,
    SetFilter(ReviewFilter),
    Retake,
}

/// What the view should do after an intent was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Updated,
    /// Ask the learner before going on; answer through [`resolve_prompt`].
    Confirm(ConfirmPrompt),
    /// The practice area changed part and should be scrolled into view.
    ScrollToQuiz,
}

/// Apply `intent` to the session.
///
/// Submitting and retaking only open a prompt here; nothing changes until the
/// prompt is resolved.
///
/// # Errors
///
/// Returns `ViewError::EmptySelection` when the selection is empty and
/// `ViewError::Unknown` for every other rejected action.
pub fn apply_intent(session: &mut QuizSession, intent: QuizIntent) -> Result<QuizOutcome, ViewError> {
    let outcome = match intent {
        QuizIntent::TogglePart(part) => session.toggle_part(part).map(|_| QuizOutcome::Updated),
        QuizIntent::Start => session
            .start_practicing()
            .map(|()| QuizOutcome::ScrollToQuiz),
        QuizIntent::Answer(question, letter) => session
            .answer(question, letter)
            .map(|()| QuizOutcome::Updated),
        QuizIntent::ToggleTranscript(question) => session
            .toggle_transcript(question)
            .map(|_| QuizOutcome::Updated),
        QuizIntent::NextPart => session.next_part().map(|_| QuizOutcome::ScrollToQuiz),
        QuizIntent::Submit => session
            .ensure_can_submit()
            .map(|()| QuizOutcome::Confirm(ConfirmPrompt::Submit)),
        QuizIntent::SetFilter(filter) => session.set_filter(filter).map(|()| QuizOutcome::Updated),
        QuizIntent::Retake => Ok(QuizOutcome::Confirm(ConfirmPrompt::Retake)),
    };
    outcome.map_err(|err| ViewError::from(&err))
}

/// Finish a transition that was waiting on the learner's answer.
///
/// # Errors
///
/// Returns `ViewError` if the session no longer accepts the transition.
pub fn resolve_prompt(
    session: &mut QuizSession,
    prompt: ConfirmPrompt,
    answer: Confirmation,
) -> Result<(), ViewError> {
    match prompt {
        ConfirmPrompt::Submit => session
            .submit(&answer)
            .map(|_| ())
            .map_err(|err| ViewError::from(&err)),
        ConfirmPrompt::Retake => {
            session.retake(&answer);
            Ok(())
        }
    }
}

//
// ─── PART SELECTION ────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartChoiceVm {
    pub part: PartId,
    pub label: String,
    pub checked: bool,
}

#[must_use]
pub fn map_part_choices(session: &QuizSession) -> Vec<PartChoiceVm> {
    session
        .available_parts()
        .into_iter()
        .map(|part| PartChoiceVm {
            part,
            label: session.bank().part_label(part),
            checked: session.is_selected(part),
        })
        .collect()
}

//
// ─── PRACTICE AREA ─────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub letter: OptionLetter,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub heading: String,
    pub image_src: Option<String>,
    pub audio_src: String,
    pub options: Vec<OptionVm>,
    pub transcript: Option<String>,
    pub transcript_shown: bool,
}

impl QuestionVm {
    #[must_use]
    pub fn transcript_button_label(&self) -> &'static str {
        if self.transcript_shown {
            "Hide Transcript"
        } else {
            "Show Transcript"
        }
    }

    #[must_use]
    pub fn image_alt(&self) -> String {
        format!("Question {}", self.id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeVm {
    pub part_label: String,
    pub questions: Vec<QuestionVm>,
    pub is_last_part: bool,
}

/// Practice area for the current part; `None` outside practice.
#[must_use]
pub fn map_practice(session: &QuizSession) -> Option<PracticeVm> {
    let part = session.current_part()?;
    let questions = session
        .current_part_questions()
        .into_iter()
        .map(|question| {
            let selected = session.selected_answer(question.id());
            QuestionVm {
                id: question.id(),
                heading: format!("{}. {}", question.id(), question.text()),
                image_src: question.image().map(|image| image.src()),
                audio_src: question.audio().src(),
                options: question
                    .lettered_options()
                    .map(|(letter, text)| OptionVm {
                        letter,
                        text: text.to_string(),
                        selected: selected == Some(letter),
                    })
                    .collect(),
                transcript: question.transcript().map(str::to_string),
                transcript_shown: session.is_transcript_shown(question.id()),
            }
        })
        .collect();

    Some(PracticeVm {
        part_label: session.bank().part_label(part),
        questions,
        is_last_part: session.is_last_part(),
    })
}
