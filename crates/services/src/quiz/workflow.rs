use std::sync::Arc;

use listening_core::model::QuestionBank;
use listening_core::playback::PlaybackController;
use storage::repository::QuestionBankRepository;
use tracing::info;

use super::session::QuizSession;
use crate::Clock;
use crate::error::AppServicesError;

/// Hands out quiz sessions over one loaded bank and one shared playback controller.
#[derive(Debug, Clone)]
pub struct QuizLoopService {
    clock: Clock,
    bank: Arc<QuestionBank>,
    controller: PlaybackController,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<QuestionBank>, controller: PlaybackController) -> Self {
        Self {
            clock,
            bank,
            controller,
        }
    }

    /// Load the bank from `repository` and wrap it in a service.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the bank cannot be loaded and
    /// `AppServicesError::EmptyBank` if it has no questions.
    pub async fn load(
        clock: Clock,
        repository: &dyn QuestionBankRepository,
        controller: PlaybackController,
    ) -> Result<Self, AppServicesError> {
        let bank = repository.load_bank().await?;
        if bank.is_empty() {
            return Err(AppServicesError::EmptyBank);
        }
        Ok(Self::new(clock, Arc::new(bank), controller))
    }

    /// Point the results page's home link somewhere else.
    #[must_use]
    pub fn with_home_url(mut self, home_url: Option<String>) -> Self {
        if let Some(url) = home_url.filter(|url| !url.trim().is_empty()) {
            let bank = QuestionBank::clone(&self.bank).with_home_url(Some(url));
            self.bank = Arc::new(bank);
        }
        self
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn controller(&self) -> PlaybackController {
        self.controller.clone()
    }

    /// Start a new attempt with nothing selected.
    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        info!(
            title = self.bank.title(),
            parts = self.bank.parts().len(),
            "quiz session started"
        );
        QuizSession::new(Arc::clone(&self.bank), self.controller.clone(), self.clock)
    }
}
