use std::collections::{BTreeSet, HashSet};

use thiserror::Error;

use crate::model::ids::{PartId, QuestionId};
use crate::model::part::PartLabels;
use crate::model::question::Question;

pub const DEFAULT_BANK_TITLE: &str = "Listening Practice";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("duplicate question id {0}")]
    DuplicateQuestion(QuestionId),
}

/// The fixed, ordered set of questions a quiz is drawn from.
///
/// Immutable once built; sessions share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    title: String,
    subtitle: Option<String>,
    home_url: Option<String>,
    labels: PartLabels,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank, keeping document order.
    ///
    /// # Errors
    ///
    /// Returns `BankError::DuplicateQuestion` if two questions share an id.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, BankError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(BankError::DuplicateQuestion(question.id()));
            }
        }

        let title = title.into();
        let title = if title.trim().is_empty() {
            DEFAULT_BANK_TITLE.to_string()
        } else {
            title.trim().to_string()
        };

        Ok(Self {
            title,
            subtitle: None,
            home_url: None,
            labels: PartLabels::default(),
            questions,
        })
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle.filter(|s| !s.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_home_url(mut self, home_url: Option<String>) -> Self {
        self.home_url = home_url.filter(|s| !s.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: PartLabels) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn home_url(&self) -> Option<&str> {
        self.home_url.as_deref()
    }

    #[must_use]
    pub fn part_label(&self, part: PartId) -> String {
        self.labels.label(part)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Distinct parts present in the bank, ascending.
    #[must_use]
    pub fn parts(&self) -> Vec<PartId> {
        self.questions
            .iter()
            .map(Question::part)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn contains_part(&self, part: PartId) -> bool {
        self.questions.iter().any(|q| q.part() == part)
    }

    /// Questions of one part in bank order.
    #[must_use]
    pub fn questions_in_part(&self, part: PartId) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.part() == part).collect()
    }

    /// Questions belonging to any of `parts`, in bank order.
    #[must_use]
    pub fn questions_in_parts(&self, parts: &BTreeSet<PartId>) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| parts.contains(&q.part()))
            .collect()
    }
}
