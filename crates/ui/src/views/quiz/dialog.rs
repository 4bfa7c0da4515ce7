use dioxus::prelude::*;

use services::{ConfirmPrompt, Confirmation};

/// Modal yes/no question standing in for a browser `confirm()`.
#[component]
pub(super) fn ConfirmDialog(prompt: ConfirmPrompt, on_answer: EventHandler<Confirmation>) -> Element {
    let message = prompt.message();

    rsx! {
        div { class: "modal confirm-modal",
            div {
                class: "modal-content confirm-content",
                role: "dialog",
                aria_modal: "true",
                p { class: "confirm-message", "{message}" }
                div { class: "modal-buttons",
                    button {
                        class: "confirm-cancel",
                        id: "confirm-cancel",
                        r#type: "button",
                        onclick: move |_| on_answer.call(Confirmation::Declined),
                        "Cancel"
                    }
                    button {
                        class: "confirm-ok",
                        id: "confirm-ok",
                        r#type: "button",
                        onclick: move |_| on_answer.call(Confirmation::Accepted),
                        "OK"
                    }
                }
            }
        }
    }
}
