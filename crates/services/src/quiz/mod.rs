mod confirm;
mod session;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use confirm::{ConfirmPrompt, Confirmation, ConfirmationGate};
pub use session::{QuizPhase, QuizSession};
pub use view::{PartBreakdown, QuizResultView, ReviewItem};
pub use workflow::QuizLoopService;
