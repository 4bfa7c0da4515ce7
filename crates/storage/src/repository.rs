use async_trait::async_trait;
use listening_core::model::QuestionBank;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::json::JsonBankRepository;

/// Errors surfaced by question bank sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid question bank: {0}")]
    Invalid(String),
}

/// Read-only source of the question bank a quiz runs against.
#[async_trait]
pub trait QuestionBankRepository: Send + Sync {
    /// Load and validate the full bank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or holds an invalid bank.
    async fn load_bank(&self) -> Result<QuestionBank, StorageError>;
}

/// Bank already held in memory, for tests and for the bundled sample.
#[derive(Clone)]
pub struct InMemoryRepository {
    bank: Arc<QuestionBank>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
        }
    }
}

#[async_trait]
impl QuestionBankRepository for InMemoryRepository {
    async fn load_bank(&self) -> Result<QuestionBank, StorageError> {
        Ok(self.bank.as_ref().clone())
    }
}

/// Bank source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub bank: Arc<dyn QuestionBankRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(InMemoryRepository::new(bank)),
        }
    }

    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            bank: Arc::new(JsonBankRepository::from_path(path)),
        }
    }

    #[must_use]
    pub fn json_str(document: impl Into<String>) -> Self {
        Self {
            bank: Arc::new(JsonBankRepository::from_document(document)),
        }
    }
}
