use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use listening_core::playback::PlaybackController;
use listening_core::time::fixed_clock;
use services::{Confirmation, QuizLoopService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

pub const SAMPLE_BANK: &str = r#"{
    "title": "Listening Mock Test",
    "subtitle": "Practice round",
    "home_url": "https://example.com/home",
    "part_labels": { "2": "Part 2 - Short Talks" },
    "questions": [
        {
            "id": 1,
            "part": 1,
            "question": "Where will they meet?",
            "options": ["At the station", "At the library", "In the park"],
            "answer": "B",
            "audio": "audio/1.mp3",
            "image": "images/1.png",
            "transcript": "Let us meet at the library.",
            "remark": "Listen for the place name."
        },
        {
            "id": 2,
            "part": 1,
            "question": "What time does the class start?",
            "options": ["Six", "Seven"],
            "answer": "A",
            "audio": "audio/2.mp3"
        },
        {
            "id": 3,
            "part": 2,
            "question": "How will he travel?",
            "options": ["By bus", "By train"],
            "answer": "B",
            "audio": "audio/3.mp3"
        }
    ]
}"#;

#[derive(Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl UiLinkOpener for RecordingOpener {
    fn open_url(&self, url: &str) {
        if let Ok(mut urls) = self.opened.lock() {
            urls.push(url.to_string());
        }
    }
}

struct TestApp {
    quiz: Arc<QuizLoopService>,
    opener: Arc<RecordingOpener>,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        self.opener.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub opener: Arc<RecordingOpener>,
    handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn open_home(&mut self, url: &str) {
        let callback = self.handles.home();
        self.dom.in_runtime(|| callback.call(url.to_string()));
        drive_dom(&mut self.dom);
    }

    pub fn answer_prompt(&mut self, answer: Confirmation) {
        let callback = self.handles.answer();
        self.dom.in_runtime(|| callback.call(answer));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(document: &str) -> ViewHarness {
    let storage = Storage::json_str(document);
    let quiz = QuizLoopService::load(fixed_clock(), storage.bank.as_ref(), PlaybackController::new())
        .await
        .expect("load bank");
    let opener = Arc::new(RecordingOpener::default());
    let app = Arc::new(TestApp {
        quiz: Arc::new(quiz),
        opener: Arc::clone(&opener),
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness {
        dom,
        opener,
        handles,
    };
    harness.rebuild();
    harness
}
