//! Shared error types for the services crate.

use thiserror::Error;

use listening_core::model::{OptionLetter, PartId, QuestionId, ReportError};
use storage::repository::StorageError;

use crate::quiz::QuizPhase;

/// Shown when an attempt is submitted without any selected question.
pub const EMPTY_SELECTION_WARNING: &str = "Please choose the part(s) that you want to practice!";

/// Errors emitted by `QuizSession` for illegal transitions and rejected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot {action} while {phase}")]
    WrongPhase {
        action: &'static str,
        phase: QuizPhase,
    },
    #[error("{warning}", warning = EMPTY_SELECTION_WARNING)]
    EmptySelection,
    #[error("part {0} is not in the question bank")]
    UnknownPart(PartId),
    #[error("question {0} is not part of the current selection")]
    QuestionNotSelected(QuestionId),
    #[error("question {question} has no option {letter}")]
    OptionOutOfRange {
        question: QuestionId,
        letter: OptionLetter,
    },
    #[error("already on the last selected part")]
    LastPart,
    #[error("answers can only be submitted from the last selected part")]
    NotLastPart,
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("question bank has no questions")]
    EmptyBank,
}
