use dioxus::document::eval;
use dioxus::prelude::*;
use tracing::debug;

use services::{ConfirmPrompt, Confirmation, QuizResultView};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{
    QuizIntent, QuizOutcome, apply_intent, map_part_choices, map_practice, map_results,
    resolve_prompt,
};

use super::dialog::ConfirmDialog;
use super::practice::PracticeArea;
use super::results::ResultsModal;
use super::scripts::{QUIZ_AREA_ID, scroll_into_view_script};
use super::selection::PartSelection;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = {
        let ctx = ctx.clone();
        use_signal(move || ctx.start_session())
    };
    let error = use_signal(|| None::<ViewError>);
    let prompt = use_signal(|| None::<ConfirmPrompt>);

    let dispatch = {
        let mut session = session;
        let mut error = error;
        let mut prompt = prompt;
        use_callback(move |intent: QuizIntent| {
            let outcome = apply_intent(&mut session.write(), intent);
            match outcome {
                Ok(QuizOutcome::Updated) => error.set(None),
                Ok(QuizOutcome::Confirm(next)) => {
                    error.set(None);
                    prompt.set(Some(next));
                }
                Ok(QuizOutcome::ScrollToQuiz) => {
                    error.set(None);
                    let _ = eval(&scroll_into_view_script(QUIZ_AREA_ID));
                }
                Err(err) => {
                    debug!(?intent, error = ?err, "quiz intent rejected");
                    error.set(Some(err));
                }
            }
        })
    };

    let answer_prompt = {
        let mut session = session;
        let mut error = error;
        let mut prompt = prompt;
        use_callback(move |answer: Confirmation| {
            let Some(current) = prompt() else {
                return;
            };
            prompt.set(None);
            if let Err(err) = resolve_prompt(&mut session.write(), current, answer) {
                error.set(Some(err));
            }
        })
    };

    let open_home = {
        let ctx = ctx.clone();
        use_callback(move |url: String| ctx.open_url(&url))
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, answer_prompt, open_home);
            }
        }
    }

    let (started, can_start, choices, practice, results) = {
        let session = session.read();
        (
            session.is_started(),
            !session.selected_parts().is_empty(),
            map_part_choices(&session),
            map_practice(&session),
            QuizResultView::from_session(&session).map(|view| map_results(&view)),
        )
    };
    let pending = prompt();
    let warning = error().map(ViewError::message);

    rsx! {
        div { class: "quiz-page",
            if !started {
                PartSelection {
                    choices,
                    can_start,
                    on_intent: move |intent| dispatch.call(intent),
                }
            }
            if let Some(message) = warning {
                p { class: "quiz-warning", role: "alert", "{message}" }
            }
            if let Some(practice) = practice {
                PracticeArea { practice, on_intent: move |intent| dispatch.call(intent) }
            }
            if let Some(results) = results {
                ResultsModal {
                    results,
                    on_intent: move |intent| dispatch.call(intent),
                    on_home: move |url| open_home.call(url),
                }
            }
            if let Some(prompt) = pending {
                ConfirmDialog { prompt, on_answer: move |answer| answer_prompt.call(answer) }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    answer: Rc<RefCell<Option<Callback<Confirmation>>>>,
    home: Rc<RefCell<Option<Callback<String>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        answer: Callback<Confirmation>,
        home: Callback<String>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.answer.borrow_mut() = Some(answer);
        *self.home.borrow_mut() = Some(home);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn answer(&self) -> Callback<Confirmation> {
        (*self.answer.borrow()).expect("quiz prompt answer registered")
    }

    pub(crate) fn home(&self) -> Callback<String> {
        (*self.home.borrow()).expect("quiz home link registered")
    }
}
