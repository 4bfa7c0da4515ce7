use std::path::PathBuf;
use std::sync::Arc;

use listening_core::model::QuestionBank;
use listening_core::playback::PlaybackController;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::quiz::QuizLoopService;

/// Assembles app-facing services around one loaded question bank.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizLoopService>,
}

impl AppServices {
    /// Build services from any bank source.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bank cannot be loaded or is empty.
    pub async fn from_storage(
        storage: &Storage,
        clock: Clock,
        home_url: Option<String>,
    ) -> Result<Self, AppServicesError> {
        let quiz = QuizLoopService::load(clock, storage.bank.as_ref(), PlaybackController::new())
            .await?
            .with_home_url(home_url);
        Ok(Self {
            quiz: Arc::new(quiz),
        })
    }

    /// Build services backed by a JSON bank file.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the file cannot be read or holds an invalid bank.
    pub async fn new_json_file(
        path: impl Into<PathBuf>,
        clock: Clock,
        home_url: Option<String>,
    ) -> Result<Self, AppServicesError> {
        Self::from_storage(&Storage::json_file(path), clock, home_url).await
    }

    /// Build services backed by a JSON bank document held in memory.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the document holds an invalid bank.
    pub async fn new_json_str(
        document: impl Into<String>,
        clock: Clock,
        home_url: Option<String>,
    ) -> Result<Self, AppServicesError> {
        Self::from_storage(&Storage::json_str(document), clock, home_url).await
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        self.quiz.bank()
    }

    #[must_use]
    pub fn controller(&self) -> PlaybackController {
        self.quiz.controller()
    }
}
