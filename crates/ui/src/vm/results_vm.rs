use listening_core::model::{PerformanceBand, QuestionId, ReviewFilter, ReviewStatus};
use services::QuizResultView;

use crate::vm::time_fmt::format_local_datetime;

pub const EMPTY_FILTER_MESSAGE: &str = "No questions found for this filter.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakdownVm {
    pub label: String,
    pub score_label: String,
    pub percent: u32,
    pub bar_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterVm {
    pub filter: ReviewFilter,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultItemVm {
    pub id: QuestionId,
    pub heading: String,
    pub status_class: &'static str,
    pub status_text: &'static str,
    /// Only filled for questions that were not answered correctly.
    pub your_answer: Option<String>,
    pub correct_answer: Option<String>,
    pub remark: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score: u32,
    pub total: u32,
    pub percent: u32,
    pub submitted_label: String,
    pub home_url: Option<String>,
    pub parts: Vec<BreakdownVm>,
    pub filters: Vec<FilterVm>,
    pub items: Vec<ResultItemVm>,
}

impl ResultsVm {
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        self.items.is_empty().then_some(EMPTY_FILTER_MESSAGE)
    }
}

fn bar_class(band: PerformanceBand) -> &'static str {
    match band {
        PerformanceBand::Strong => "bar bar--strong",
        PerformanceBand::Fair => "bar bar--fair",
        PerformanceBand::Weak => "bar bar--weak",
    }
}

fn status_parts(status: ReviewStatus) -> (&'static str, &'static str) {
    match status {
        ReviewStatus::Correct => ("correct", "✅ Correct"),
        ReviewStatus::Incorrect => ("incorrect", "❌ Incorrect"),
        ReviewStatus::Unanswered => ("unanswered", "⚠️ Unanswered"),
    }
}

#[must_use]
pub fn map_results(view: &QuizResultView) -> ResultsVm {
    let parts = view
        .parts
        .iter()
        .map(|row| BreakdownVm {
            label: row.label.clone(),
            score_label: format!("Score: {} / {}", row.correct, row.total),
            percent: row.percent,
            bar_class: bar_class(row.band),
        })
        .collect();

    let filters = ReviewFilter::ALL
        .iter()
        .map(|filter| FilterVm {
            filter: *filter,
            label: filter.label(),
            active: *filter == view.filter,
        })
        .collect();

    let items = view
        .items
        .iter()
        .map(|item| {
            let (status_class, status_text) = status_parts(item.status);
            let missed = !item.status.is_correct();
            ResultItemVm {
                id: item.id,
                heading: format!("{}. {}", item.id, item.text),
                status_class,
                status_text,
                your_answer: missed.then(|| {
                    item.selected
                        .map_or_else(|| "None".to_string(), |letter| letter.to_string())
                }),
                correct_answer: missed.then(|| item.correct.to_string()),
                remark: item.remark.clone(),
            }
        })
        .collect();

    ResultsVm {
        score: view.score,
        total: view.total,
        percent: view.percent,
        submitted_label: format_local_datetime(view.submitted_at),
        home_url: view.home_url.clone(),
        parts,
        filters,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listening_core::model::PartId;
    use listening_core::time::fixed_now;
    use services::{PartBreakdown, ReviewItem};

    fn view(filter: ReviewFilter, items: Vec<ReviewItem>) -> QuizResultView {
        QuizResultView {
            score: 1,
            total: 3,
            percent: 33,
            submitted_at: fixed_now(),
            home_url: None,
            parts: vec![
                PartBreakdown {
                    part: PartId::new(1),
                    label: "Part 1: Picture Description".into(),
                    correct: 1,
                    total: 2,
                    percent: 50,
                    band: PerformanceBand::Weak,
                },
                PartBreakdown {
                    part: PartId::new(2),
                    label: "Part 2: Question Response".into(),
                    correct: 4,
                    total: 5,
                    percent: 80,
                    band: PerformanceBand::Strong,
                },
            ],
            filter,
            items,
        }
    }

    fn item(id: u32, status: ReviewStatus, selected: Option<&str>) -> ReviewItem {
        ReviewItem {
            id: QuestionId::new(id),
            text: format!("Q{id}"),
            status,
            selected: selected.map(|raw| raw.parse().unwrap()),
            correct: "B".parse().unwrap(),
            remark: None,
        }
    }

    #[test]
    fn breakdown_rows_carry_score_and_band() {
        let vm = map_results(&view(ReviewFilter::All, Vec::new()));
        assert_eq!(vm.parts[0].score_label, "Score: 1 / 2");
        assert_eq!(vm.parts[0].bar_class, "bar bar--weak");
        assert_eq!(vm.parts[1].bar_class, "bar bar--strong");
    }

    #[test]
    fn only_the_active_filter_is_marked() {
        let vm = map_results(&view(ReviewFilter::Wrong, Vec::new()));
        let active: Vec<&str> = vm
            .filters
            .iter()
            .filter(|f| f.active)
            .map(|f| f.label)
            .collect();
        assert_eq!(active, vec!["Wrong"]);
        assert_eq!(vm.filters.len(), 4);
    }

    #[test]
    fn missed_items_show_both_answers() {
        let vm = map_results(&view(
            ReviewFilter::All,
            vec![
                item(1, ReviewStatus::Correct, Some("B")),
                item(2, ReviewStatus::Incorrect, Some("A")),
                item(3, ReviewStatus::Unanswered, None),
            ],
        ));
        assert_eq!(vm.items[0].your_answer, None);
        assert_eq!(vm.items[1].your_answer.as_deref(), Some("A"));
        assert_eq!(vm.items[1].correct_answer.as_deref(), Some("B"));
        assert_eq!(vm.items[2].your_answer.as_deref(), Some("None"));
        assert_eq!(vm.items[2].status_class, "unanswered");
        assert_eq!(vm.empty_message(), None);
    }

    #[test]
    fn empty_filter_result_has_a_message() {
        let vm = map_results(&view(ReviewFilter::Correct, Vec::new()));
        assert_eq!(vm.empty_message(), Some(EMPTY_FILTER_MESSAGE));
    }
}
