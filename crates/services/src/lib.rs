#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz;

pub use listening_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, EMPTY_SELECTION_WARNING, QuizError};
pub use quiz::{
    ConfirmPrompt, Confirmation, ConfirmationGate, PartBreakdown, QuizLoopService, QuizPhase,
    QuizResultView, QuizSession, ReviewItem,
};
