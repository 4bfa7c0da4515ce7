mod bank;
mod ids;
mod letter;
mod media;
mod part;
mod question;
mod report;
mod review;

pub use bank::{BankError, DEFAULT_BANK_TITLE, QuestionBank};
pub use ids::{HandleId, ParseIdError, PartId, QuestionId};
pub use letter::{LetterError, MAX_OPTIONS, OptionLetter};
pub use media::{MediaKind, MediaRef, MediaUri, MediaValidationError};
pub use part::PartLabels;
pub use question::{Question, QuestionDraft, QuestionError};
pub use report::{PartPerformance, PerformanceBand, ReportError, SubmissionReport, percentage};
pub use review::{ReviewFilter, ReviewStatus};
