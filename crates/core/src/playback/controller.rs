use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::model::HandleId;
use crate::playback::handle::MediaHandle;

type ActiveSlot = Option<Arc<dyn MediaHandle>>;

/// Guarantees at most one audio element is playing across the whole app.
///
/// Cloning shares the same active-handle record, so one controller can be
/// handed to every playback unit.
#[derive(Clone, Default)]
pub struct PlaybackController {
    active: Arc<Mutex<ActiveSlot>>,
}

impl PlaybackController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `handle` as the sounding element, pausing and rewinding the
    /// previous one if it was a different element.
    ///
    /// Failures on the previous element are ignored; the new playback always
    /// goes ahead.
    pub fn notify_play_started(&self, handle: &Arc<dyn MediaHandle>) {
        // The lock is released before touching any handle: pausing may emit
        // events that call back into the controller.
        let previous = self.slot().replace(Arc::clone(handle));
        if let Some(previous) = previous {
            if previous.id() != handle.id() {
                halt(previous.as_ref());
            }
        }
    }

    /// A paused element stays recorded as the last active one; only the next
    /// distinct play preempts it.
    pub fn notify_stopped(&self, handle: HandleId) {
        debug!(handle = %handle, "playback stopped");
    }

    /// Pause and rewind whatever element was last active.
    pub fn stop_active(&self) {
        let active = self.slot().clone();
        if let Some(active) = active {
            halt(active.as_ref());
        }
    }

    #[must_use]
    pub fn active_id(&self) -> Option<HandleId> {
        self.slot().as_ref().map(|handle| handle.id())
    }

    fn slot(&self) -> MutexGuard<'_, ActiveSlot> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("active", &self.active_id())
            .finish()
    }
}

fn halt(handle: &dyn MediaHandle) {
    if let Err(err) = handle.pause() {
        debug!(handle = %handle.id(), error = %err, "could not pause previous audio");
    }
    if let Err(err) = handle.seek(0.0) {
        debug!(handle = %handle.id(), error = %err, "could not rewind previous audio");
    }
}
