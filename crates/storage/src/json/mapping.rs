use std::collections::BTreeMap;
use std::path::Path;

use listening_core::model::{
    MediaUri, PartId, PartLabels, QuestionBank, QuestionDraft, QuestionId,
};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

fn invalid<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Invalid(e.to_string())
}

/// One question as written in a bank document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    pub part: u32,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub audio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl QuestionRecord {
    #[must_use]
    pub fn into_draft(self) -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new(self.id),
            part: PartId::new(self.part),
            question: self.question,
            options: self.options,
            answer: self.answer,
            audio: self.audio,
            image: self.image,
            transcript: self.transcript,
            remark: self.remark,
        }
    }
}

/// Full bank document with header metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub part_labels: BTreeMap<String, String>,
    pub questions: Vec<QuestionRecord>,
}

impl BankDocument {
    /// Parse either accepted document shape: the full object or just the
    /// question array.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for malformed JSON.
    pub fn parse(raw: &str) -> Result<Self, StorageError> {
        let serialization = |e: serde_json::Error| StorageError::Serialization(e.to_string());
        if raw.trim_start().starts_with('[') {
            let questions: Vec<QuestionRecord> = serde_json::from_str(raw).map_err(serialization)?;
            return Ok(BankDocument {
                questions,
                ..BankDocument::default()
            });
        }
        serde_json::from_str(raw).map_err(serialization)
    }

    /// Anchor relative audio and image paths at `base`, the directory the
    /// document was read from.
    #[must_use]
    pub fn resolve_media(mut self, base: &Path) -> Self {
        for record in &mut self.questions {
            rebase(&mut record.audio, base);
            if let Some(image) = record.image.as_mut() {
                rebase(image, base);
            }
        }
        self
    }

    /// Validate every question and assemble the bank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Invalid` naming the first invalid question, label key
    /// or duplicate id.
    pub fn into_bank(self) -> Result<QuestionBank, StorageError> {
        let questions = self
            .questions
            .into_iter()
            .map(|record| record.into_draft().validate().map_err(invalid))
            .collect::<Result<Vec<_>, _>>()?;

        let labels = self
            .part_labels
            .into_iter()
            .map(|(key, label)| {
                key.parse::<PartId>()
                    .map(|part| (part, label))
                    .map_err(|e| StorageError::Invalid(format!("part label key {key:?}: {e}")))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(QuestionBank::new(self.title, questions)
            .map_err(invalid)?
            .with_subtitle(self.subtitle)
            .with_home_url(self.home_url)
            .with_labels(PartLabels::new(labels)))
    }
}

fn rebase(raw: &mut String, base: &Path) {
    // Invalid references are left for validation to report.
    if let Ok(uri) = MediaUri::parse(raw.as_str()) {
        *raw = uri.rebased_on(base).as_src();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_question_array_is_accepted() {
        let raw = r#"[
            {"id": 1, "part": 1, "question": "Q1", "options": ["a", "b"], "answer": "B", "audio": "1.mp3"}
        ]"#;
        let bank = BankDocument::parse(raw).unwrap().into_bank().unwrap();
        assert_eq!(bank.questions().len(), 1);
        assert_eq!(bank.title(), listening_core::model::DEFAULT_BANK_TITLE);
    }

    #[test]
    fn bad_label_key_is_invalid() {
        let raw = r#"{"title": "T", "part_labels": {"one": "x"}, "questions": []}"#;
        let err = BankDocument::parse(raw).unwrap().into_bank().unwrap_err();
        assert!(matches!(err, StorageError::Invalid(_)), "{err}");
    }

    #[test]
    fn answer_outside_options_is_invalid() {
        let raw = r#"{"questions": [
            {"id": 1, "part": 1, "question": "Q1", "options": ["a"], "answer": "C", "audio": "1.mp3"}
        ]}"#;
        let err = BankDocument::parse(raw).unwrap().into_bank().unwrap_err();
        assert!(err.to_string().contains("does not match"), "{err}");
    }

    #[test]
    fn object_errors_keep_field_and_line() {
        let raw = "{\n  \"title\": \"T\",\n  \"questions\": [{\"id\": 1}]\n}";
        let err = BankDocument::parse(raw).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("missing field"), "{message}");
        assert!(message.contains("line 3"), "{message}");
        assert!(!message.contains("did not match any variant"), "{message}");
    }

    #[test]
    fn resolve_media_keeps_urls() {
        let raw = r#"[
            {"id": 1, "part": 1, "question": "Q1", "options": ["a"], "answer": "A",
             "audio": "audio/1.mp3", "image": "https://cdn.example.org/1.png"}
        ]"#;
        let document = BankDocument::parse(raw)
            .unwrap()
            .resolve_media(Path::new("/banks/mock"));
        assert_eq!(document.questions[0].audio, "/banks/mock/audio/1.mp3");
        assert_eq!(
            document.questions[0].image.as_deref(),
            Some("https://cdn.example.org/1.png")
        );
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = BankDocument::parse("{ nope").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
