use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::{PartId, QuestionId};
use crate::model::letter::OptionLetter;
use crate::model::question::Question;
use crate::model::review::{ReviewFilter, ReviewStatus};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    #[error("too many questions for a single attempt: {len}")]
    TooManyQuestions { len: usize },
}

/// `round(100 * correct / total)` with halves rounded up; 0 when `total` is 0.
#[must_use]
pub fn percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let correct = u64::from(correct.min(total));
    let total = u64::from(total);
    let rounded = (200 * correct + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(100)
}

/// Colour band for a per-part accuracy bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    Strong,
    Fair,
    Weak,
}

impl PerformanceBand {
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 80 {
            PerformanceBand::Strong
        } else if percent >= 60 {
            PerformanceBand::Fair
        } else {
            PerformanceBand::Weak
        }
    }
}

/// Correct and total counts for one part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartPerformance {
    pub correct: u32,
    pub total: u32,
}

impl PartPerformance {
    #[must_use]
    pub fn percent(&self) -> u32 {
        percentage(self.correct, self.total)
    }

    #[must_use]
    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::from_percent(self.percent())
    }
}

/// Score of a submitted attempt, frozen together with the answers it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    answers: BTreeMap<QuestionId, OptionLetter>,
    score: u32,
    total: u32,
    parts: BTreeMap<PartId, PartPerformance>,
    submitted_at: DateTime<Utc>,
}

impl SubmissionReport {
    /// Scores `questions` against `answers`.
    ///
    /// Every part in `parts` gets an entry even if it has no questions, so the
    /// breakdown lists exactly the selected parts.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::TooManyQuestions` if the count cannot fit in `u32`.
    pub fn score(
        questions: &[&Question],
        parts: &[PartId],
        answers: &BTreeMap<QuestionId, OptionLetter>,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, ReportError> {
        let total = u32::try_from(questions.len()).map_err(|_| ReportError::TooManyQuestions {
            len: questions.len(),
        })?;

        let mut breakdown: BTreeMap<PartId, PartPerformance> = parts
            .iter()
            .map(|part| (*part, PartPerformance::default()))
            .collect();
        let mut score = 0_u32;

        for question in questions {
            let correct = answers
                .get(&question.id())
                .is_some_and(|letter| question.is_correct(*letter));
            let entry = breakdown.entry(question.part()).or_default();
            entry.total = entry.total.saturating_add(1);
            if correct {
                entry.correct = entry.correct.saturating_add(1);
                score = score.saturating_add(1);
            }
        }

        let answers = questions
            .iter()
            .filter_map(|q| answers.get(&q.id()).map(|letter| (q.id(), *letter)))
            .collect();

        Ok(Self {
            answers,
            score,
            total,
            parts: breakdown,
            submitted_at,
        })
    }

    #[must_use]
    pub fn score_count(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percent(&self) -> u32 {
        percentage(self.score, self.total)
    }

    #[must_use]
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<QuestionId, OptionLetter> {
        &self.answers
    }

    #[must_use]
    pub fn answer_for(&self, id: QuestionId) -> Option<OptionLetter> {
        self.answers.get(&id).copied()
    }

    #[must_use]
    pub fn part(&self, part: PartId) -> PartPerformance {
        self.parts.get(&part).copied().unwrap_or_default()
    }

    /// Per-part breakdown in ascending part order.
    pub fn parts(&self) -> impl Iterator<Item = (PartId, PartPerformance)> {
        self.parts.iter().map(|(part, perf)| (*part, *perf))
    }

    #[must_use]
    pub fn status(&self, question: &Question) -> ReviewStatus {
        ReviewStatus::of(question, self.answer_for(question.id()))
    }

    /// Applies `filter` to `questions`, keeping their order.
    #[must_use]
    pub fn filter<'q>(&self, questions: &[&'q Question], filter: ReviewFilter) -> Vec<&'q Question> {
        questions
            .iter()
            .copied()
            .filter(|q| filter.accepts(self.status(q)))
            .collect()
    }
}
