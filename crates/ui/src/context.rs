use std::sync::Arc;

use listening_core::model::QuestionBank;
use listening_core::playback::PlaybackController;
use services::{QuizLoopService, QuizSession};

use crate::platform::LinkOpenerRef;

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizLoopService>;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizLoopService>,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz(),
            link_opener: app.link_opener(),
        }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        self.quiz.bank()
    }

    /// The one controller every audio player on screen reports to.
    #[must_use]
    pub fn controller(&self) -> PlaybackController {
        self.quiz.controller()
    }

    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        self.quiz.start_session()
    }

    pub fn open_url(&self, url: &str) {
        self.link_opener.open_url(url);
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
