use chrono::{DateTime, Utc};

use listening_core::model::{
    OptionLetter, PartId, PerformanceBand, QuestionId, ReviewFilter, ReviewStatus,
};

use super::session::QuizSession;

/// Per-part row of the results breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartBreakdown {
    pub part: PartId,
    pub label: String,
    pub correct: u32,
    pub total: u32,
    pub percent: u32,
    pub band: PerformanceBand,
}

/// One reviewed question.
///
/// Presentation-agnostic: `selected` stays `None` for unanswered questions and
/// the UI decides how to word that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub id: QuestionId,
    pub text: String,
    pub status: ReviewStatus,
    pub selected: Option<OptionLetter>,
    pub correct: OptionLetter,
    pub remark: Option<String>,
}

/// Everything the results modal shows, read from a submitted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResultView {
    pub score: u32,
    pub total: u32,
    pub percent: u32,
    pub submitted_at: DateTime<Utc>,
    pub home_url: Option<String>,
    pub parts: Vec<PartBreakdown>,
    pub filter: ReviewFilter,
    pub items: Vec<ReviewItem>,
}

impl QuizResultView {
    /// Returns `None` until the session has been submitted.
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let report = session.report()?;
        let bank = session.bank();

        let parts = report
            .parts()
            .map(|(part, perf)| PartBreakdown {
                part,
                label: bank.part_label(part),
                correct: perf.correct,
                total: perf.total,
                percent: perf.percent(),
                band: perf.band(),
            })
            .collect();

        let items = session
            .filtered_questions()
            .into_iter()
            .map(|question| ReviewItem {
                id: question.id(),
                text: question.text().to_string(),
                status: report.status(question),
                selected: report.answer_for(question.id()),
                correct: question.answer(),
                remark: question.remark().map(str::to_string),
            })
            .collect();

        Some(Self {
            score: report.score_count(),
            total: report.total(),
            percent: report.percent(),
            submitted_at: report.submitted_at(),
            home_url: bank.home_url().map(str::to_string),
            parts,
            filter: session.filter(),
            items,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
