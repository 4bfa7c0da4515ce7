use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::playback::controller::PlaybackController;
use crate::playback::handle::{MediaEvent, MediaHandle, MediaListener, MediaSubscription};

/// Step used by the rewind / fast-forward buttons.
pub const SEEK_STEP_SECS: f64 = 5.0;

/// Mirror of what the media element last reported.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackState {
    pub position: f64,
    /// Zero until metadata has loaded.
    pub duration: f64,
    pub playing: bool,
}

impl PlaybackState {
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 {
            (self.position / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// Whole elapsed and total seconds, e.g. `"12 / 30 s"`.
    #[must_use]
    pub fn time_label(&self) -> String {
        format!(
            "{} / {} s",
            whole_seconds(self.position),
            whole_seconds(self.duration)
        )
    }

    fn apply(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::MetadataLoaded { duration } => {
                self.duration = sanitize(duration);
            }
            MediaEvent::PositionChanged { position } => {
                self.position = sanitize(position);
            }
            MediaEvent::Started => self.playing = true,
            MediaEvent::Stopped | MediaEvent::Ended => self.playing = false,
        }
    }
}

fn sanitize(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_seconds(seconds: f64) -> u64 {
    sanitize(seconds).floor() as u64
}

pub type StateObserver = Arc<dyn Fn(PlaybackState) + Send + Sync>;

/// Playback for one question's clip.
///
/// Holds a subscription to its media element for as long as it lives; the
/// subscription is released on drop or when the source is replaced.
pub struct AudioPlaybackUnit {
    handle: Arc<dyn MediaHandle>,
    controller: PlaybackController,
    state: Arc<Mutex<PlaybackState>>,
    observer: Option<StateObserver>,
    subscription: Option<MediaSubscription>,
}

impl AudioPlaybackUnit {
    #[must_use]
    pub fn attach(handle: Arc<dyn MediaHandle>, controller: PlaybackController) -> Self {
        Self::with_observer(handle, controller, None)
    }

    /// Like [`attach`](Self::attach), calling `observer` after every mirrored change.
    #[must_use]
    pub fn with_observer(
        handle: Arc<dyn MediaHandle>,
        controller: PlaybackController,
        observer: Option<StateObserver>,
    ) -> Self {
        let mut unit = Self {
            handle,
            controller,
            state: Arc::new(Mutex::new(PlaybackState::default())),
            observer,
            subscription: None,
        };
        unit.subscribe();
        unit
    }

    /// Point the unit at a different element, dropping the old subscription.
    pub fn replace_source(&mut self, handle: Arc<dyn MediaHandle>) {
        self.subscription = None;
        self.handle = handle;
        let snapshot = {
            let mut state = self.lock();
            *state = PlaybackState::default();
            *state
        };
        self.publish(snapshot);
        self.subscribe();
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        *self.lock()
    }

    /// Move by `delta` seconds, clamped into `[0, duration]`.
    pub fn seek_relative(&self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        let state = self.state();
        let target = (state.position + delta).clamp(0.0, state.duration.max(0.0));
        self.seek_to(target);
    }

    /// Jump to `fraction` of the clip; ignored until the duration is known.
    pub fn seek_to_fraction(&self, fraction: f64) {
        let state = self.state();
        if state.duration <= 0.0 || !fraction.is_finite() {
            return;
        }
        self.seek_to(fraction.clamp(0.0, 1.0) * state.duration);
    }

    /// Pause in place, or claim exclusivity and resume.
    ///
    /// The requested state is recorded as soon as the command is accepted, so a
    /// second toggle before the element reports back reverses the first.
    pub fn toggle_play_pause(&self) {
        if self.state().playing {
            match self.handle.pause() {
                Ok(()) => self.set_playing(false),
                Err(err) => debug!(handle = %self.handle.id(), error = %err, "pause ignored"),
            }
            return;
        }

        self.controller.notify_play_started(&self.handle);
        match self.handle.play() {
            Ok(()) => self.set_playing(true),
            Err(err) => debug!(handle = %self.handle.id(), error = %err, "play ignored"),
        }
    }

    fn set_playing(&self, playing: bool) {
        let snapshot = {
            let mut state = self.lock();
            if state.playing == playing {
                return;
            }
            state.playing = playing;
            *state
        };
        self.publish(snapshot);
    }

    fn seek_to(&self, target: f64) {
        match self.handle.seek(target) {
            Ok(()) => {
                let snapshot = {
                    let mut state = self.lock();
                    state.position = target;
                    *state
                };
                self.publish(snapshot);
            }
            Err(err) => {
                debug!(handle = %self.handle.id(), error = %err, "seek ignored");
            }
        }
    }

    fn subscribe(&mut self) {
        let state = Arc::clone(&self.state);
        let controller = self.controller.clone();
        let handle = Arc::clone(&self.handle);
        let observer = self.observer.clone();

        let listener: MediaListener = Arc::new(move |event: MediaEvent| {
            let snapshot = {
                let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
                state.apply(event);
                *state
            };
            match event {
                MediaEvent::Started => controller.notify_play_started(&handle),
                MediaEvent::Stopped | MediaEvent::Ended => controller.notify_stopped(handle.id()),
                MediaEvent::MetadataLoaded { .. } | MediaEvent::PositionChanged { .. } => {}
            }
            if let Some(observer) = observer.as_ref() {
                observer(snapshot);
            }
        });

        self.subscription = Some(self.handle.subscribe(listener));
    }

    fn publish(&self, snapshot: PlaybackState) {
        if let Some(observer) = self.observer.as_ref() {
            observer(snapshot);
        }
    }

    fn lock(&self) -> MutexGuard<'_, PlaybackState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for AudioPlaybackUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioPlaybackUnit")
            .field("handle", &self.handle.id())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
