use dioxus::prelude::*;

use crate::vm::{PracticeVm, QuestionVm, QuizIntent};

use super::audio::AudioPlayer;
use super::scripts::QUIZ_AREA_ID;

#[component]
pub(super) fn PracticeArea(practice: PracticeVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let PracticeVm {
        part_label,
        questions,
        is_last_part,
    } = practice;

    rsx! {
        div { id: QUIZ_AREA_ID, class: "quiz-container",
            h2 { class: "current-part-header", "{part_label}" }
            for (id, question) in questions.into_iter().map(|question| (question.id, question)) {
                QuestionCard { key: "{id}", question, on_intent }
            }
            div { class: "quiz-footer",
                if is_last_part {
                    button {
                        class: "submit-btn",
                        id: "quiz-submit",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Submit),
                        "Submit Answers"
                    }
                } else {
                    button {
                        class: "nav-btn next-part-btn",
                        id: "quiz-next-part",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::NextPart),
                        "Next Part"
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let id = question.id;
    let transcript_label = question.transcript_button_label();
    let image_alt = question.image_alt();
    let transcript = question
        .transcript
        .clone()
        .filter(|_| question.transcript_shown);

    rsx! {
        div { class: "question-item",
            div { class: "question-text", "{question.heading}" }
            if let Some(src) = question.image_src.clone() {
                div { class: "question-image",
                    img { src: "{src}", alt: "{image_alt}" }
                }
            }
            AudioPlayer { question: id, src: question.audio_src.clone() }
            div { class: "options",
                for option in question.options.clone() {
                    div {
                        key: "{option.letter}",
                        class: if option.selected { "option selected" } else { "option" },
                        onclick: move |_| on_intent.call(QuizIntent::Answer(id, option.letter)),
                        div { class: "option-text", "{option.text}" }
                    }
                }
            }
            div { class: "transcript-block",
                button {
                    class: "transcript-btn",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::ToggleTranscript(id)),
                    "{transcript_label}"
                }
                if let Some(text) = transcript {
                    div { class: "transcript-content", "{text}" }
                }
            }
        }
    }
}
