use std::path::{Path, PathBuf};

use async_trait::async_trait;
use listening_core::model::QuestionBank;
use tracing::{debug, info};

use crate::repository::{QuestionBankRepository, StorageError};

mod mapping;

pub use mapping::{BankDocument, QuestionRecord};

#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    Document(String),
}

/// Question bank stored as a JSON document, read on every load.
#[derive(Debug, Clone)]
pub struct JsonBankRepository {
    source: Source,
}

impl JsonBankRepository {
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::File(path.into()),
        }
    }

    #[must_use]
    pub fn from_document(document: impl Into<String>) -> Self {
        Self {
            source: Source::Document(document.into()),
        }
    }

    async fn read(&self) -> Result<String, StorageError> {
        match &self.source {
            Source::Document(raw) => Ok(raw.clone()),
            Source::File(path) => {
                debug!(path = %path.display(), "reading question bank");
                tokio::fs::read_to_string(path).await.map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        StorageError::NotFound(path.display().to_string())
                    } else {
                        StorageError::Connection(format!("{}: {e}", path.display()))
                    }
                })
            }
        }
    }
}

/// Absolute directory of the bank file, against which relative media paths resolve.
fn media_root(path: &Path) -> PathBuf {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}

#[async_trait]
impl QuestionBankRepository for JsonBankRepository {
    async fn load_bank(&self) -> Result<QuestionBank, StorageError> {
        let raw = self.read().await?;
        let mut document = BankDocument::parse(&raw)?;
        if let Source::File(path) = &self.source {
            document = document.resolve_media(&media_root(path));
        }
        let bank = document.into_bank()?;
        info!(
            title = bank.title(),
            questions = bank.questions().len(),
            parts = bank.parts().len(),
            "question bank loaded"
        );
        Ok(bank)
    }
}
