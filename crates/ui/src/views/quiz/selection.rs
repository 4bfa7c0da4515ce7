use dioxus::prelude::*;

use crate::vm::{PartChoiceVm, QuizIntent};

#[component]
pub(super) fn PartSelection(
    choices: Vec<PartChoiceVm>,
    can_start: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        div { class: "part-selection",
            h2 { "Choose the part(s) that you want to practice：" }
            div { class: "part-checkboxes",
                for choice in choices {
                    label { key: "{choice.part}", class: "part-checkbox",
                        input {
                            r#type: "checkbox",
                            checked: choice.checked,
                            onchange: move |_| on_intent.call(QuizIntent::TogglePart(choice.part)),
                        }
                        span { class: "checkmark" }
                        span { "{choice.label}" }
                    }
                }
            }
            if can_start {
                button {
                    class: "start-btn",
                    id: "quiz-start",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Start),
                    "Start Practice"
                }
            }
        }
    }
}
