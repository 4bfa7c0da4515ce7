use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::model::HandleId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("media element {0} is not available")]
    Unavailable(HandleId),

    #[error("media command failed: {0}")]
    Command(String),
}

//
// ─── EVENTS ────────────────────────────────────────────────────────────────────
//

/// Notifications a media element pushes to whoever subscribed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    MetadataLoaded { duration: f64 },
    PositionChanged { position: f64 },
    Started,
    Stopped,
    Ended,
}

pub type MediaListener = Arc<dyn Fn(MediaEvent) + Send + Sync>;

/// Keeps a listener registered until dropped.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct MediaSubscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl MediaSubscription {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for MediaSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for MediaSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

//
// ─── HANDLE CONTRACT ───────────────────────────────────────────────────────────
//

/// A native playback capability wrapped around one audio resource.
///
/// Commands are requests; the element reports what actually happened through
/// the events delivered to subscribers.
pub trait MediaHandle: Send + Sync {
    fn id(&self) -> HandleId;

    /// Start playing from the current position.
    ///
    /// # Errors
    ///
    /// Returns `MediaError` if the element cannot accept the command.
    fn play(&self) -> Result<(), MediaError>;

    /// Pause in place.
    ///
    /// # Errors
    ///
    /// Returns `MediaError` if the element cannot accept the command.
    fn pause(&self) -> Result<(), MediaError>;

    /// Move the playback position, in seconds.
    ///
    /// # Errors
    ///
    /// Returns `MediaError` if the element cannot accept the command.
    fn seek(&self, position: f64) -> Result<(), MediaError>;

    /// Register `listener` for this element's events.
    fn subscribe(&self, listener: MediaListener) -> MediaSubscription;
}
