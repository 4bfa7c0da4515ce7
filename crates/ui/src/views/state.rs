use services::{EMPTY_SELECTION_WARNING, QuizError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptySelection,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::EmptySelection => EMPTY_SELECTION_WARNING,
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&QuizError> for ViewError {
    fn from(err: &QuizError) -> Self {
        match err {
            QuizError::EmptySelection => ViewError::EmptySelection,
            _ => ViewError::Unknown,
        }
    }
}
