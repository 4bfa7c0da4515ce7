use dioxus::prelude::*;

use crate::vm::{QuizIntent, ResultItemVm, ResultsVm};

#[component]
pub(super) fn ResultsModal(
    results: ResultsVm,
    on_intent: EventHandler<QuizIntent>,
    on_home: EventHandler<String>,
) -> Element {
    let empty_message = results.empty_message();
    let ResultsVm {
        score,
        total,
        percent,
        submitted_label,
        home_url,
        parts,
        filters,
        items,
    } = results;

    rsx! {
        div { class: "modal",
            div { class: "modal-content results-container",
                h2 { "Results" }
                div { class: "score",
                    p { "Score: " span { id: "score", "{score}" } " / {total}" }
                    p { "Accuracy: " span { id: "percentage", "{percent}" } "%" }
                    p { class: "submitted-at", "Submitted: {submitted_label}" }
                }
                div { class: "result-actions",
                    button {
                        class: "restart-btn",
                        id: "results-retake",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Retake),
                        "Retake Test"
                    }
                    if let Some(url) = home_url {
                        button {
                            class: "home-btn",
                            id: "results-home",
                            r#type: "button",
                            onclick: move |_| on_home.call(url.clone()),
                            "Go to Home Page"
                        }
                    }
                }
                div { class: "part-breakdown",
                    for row in parts {
                        div { key: "{row.label}", class: "breakdown-item",
                            h4 { "{row.label}" }
                            div { class: "breakdown-score",
                                span { "{row.score_label}" }
                                span { "{row.percent}%" }
                            }
                            div { class: "bar-track",
                                div { class: row.bar_class, style: "width: {row.percent}%;" }
                            }
                        }
                    }
                }
                div { class: "filter-section",
                    for filter in filters {
                        button {
                            key: "{filter.label}",
                            class: if filter.active { "result-filter-btn active" } else { "result-filter-btn" },
                            r#type: "button",
                            onclick: move |_| on_intent.call(QuizIntent::SetFilter(filter.filter)),
                            "{filter.label}"
                        }
                    }
                }
                div { class: "results-details",
                    if let Some(message) = empty_message {
                        p { class: "results-empty", "{message}" }
                    }
                    for (id, item) in items.into_iter().map(|item| (item.id, item)) {
                        ResultItem { key: "{id}", item }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultItem(item: ResultItemVm) -> Element {
    let class = format!("result-item {}", item.status_class);

    rsx! {
        div { class: "{class}",
            div { class: "result-question", "{item.heading}" }
            div { class: "result-answer",
                p { class: "result-status", "{item.status_text}" }
                if let Some(answer) = item.your_answer.clone() {
                    p { "Your Answer: {answer}" }
                }
                if let Some(answer) = item.correct_answer.clone() {
                    p { "Correct Answer: {answer}" }
                }
                if let Some(remark) = item.remark.clone() {
                    p { class: "result-remark", "💡 {remark}" }
                }
            }
        }
    }
}
