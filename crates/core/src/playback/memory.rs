use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::model::HandleId;
use crate::playback::handle::{
    MediaError, MediaEvent, MediaHandle, MediaListener, MediaSubscription,
};

/// A command received by an [`InMemoryMediaHandle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCommand {
    Play,
    Pause,
    Seek(f64),
}

#[derive(Default)]
struct Inner {
    available: bool,
    position: f64,
    duration: f64,
    playing: bool,
    next_listener: u64,
    listeners: Vec<(u64, MediaListener)>,
    commands: Vec<MediaCommand>,
}

/// Headless media element that behaves like a loaded `<audio>` tag.
///
/// Events are delivered synchronously, which makes it useful for tests and for
/// driving sessions without a webview.
pub struct InMemoryMediaHandle {
    id: HandleId,
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryMediaHandle {
    #[must_use]
    pub fn new(id: HandleId) -> Arc<Self> {
        Arc::new(Self {
            id,
            inner: Arc::new(Mutex::new(Inner {
                available: true,
                ..Inner::default()
            })),
        })
    }

    /// Simulate metadata arriving with the clip length.
    pub fn load(&self, duration: f64) {
        self.lock().duration = duration;
        self.emit(MediaEvent::MetadataLoaded { duration });
    }

    /// Simulate the playhead advancing.
    pub fn tick(&self, position: f64) {
        self.lock().position = position;
        self.emit(MediaEvent::PositionChanged { position });
    }

    /// Simulate the clip reaching its end.
    pub fn finish(&self) {
        let position = {
            let mut inner = self.lock();
            inner.playing = false;
            inner.position = inner.duration;
            inner.position
        };
        self.emit(MediaEvent::PositionChanged { position });
        self.emit(MediaEvent::Ended);
    }

    /// An unavailable element rejects every command, like a released resource.
    pub fn set_available(&self, available: bool) {
        self.lock().available = available;
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.lock().position
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.lock().playing
    }

    #[must_use]
    pub fn commands(&self) -> Vec<MediaCommand> {
        self.lock().commands.clone()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn command(&self, command: MediaCommand) -> Result<(), MediaError> {
        let mut inner = self.lock();
        if !inner.available {
            return Err(MediaError::Unavailable(self.id));
        }
        inner.commands.push(command);
        Ok(())
    }

    fn emit(&self, event: MediaEvent) {
        let listeners: Vec<MediaListener> = self
            .lock()
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }
}

impl MediaHandle for InMemoryMediaHandle {
    fn id(&self) -> HandleId {
        self.id
    }

    fn play(&self) -> Result<(), MediaError> {
        self.command(MediaCommand::Play)?;
        let was_playing = std::mem::replace(&mut self.lock().playing, true);
        if !was_playing {
            self.emit(MediaEvent::Started);
        }
        Ok(())
    }

    fn pause(&self) -> Result<(), MediaError> {
        self.command(MediaCommand::Pause)?;
        let was_playing = std::mem::replace(&mut self.lock().playing, false);
        if was_playing {
            self.emit(MediaEvent::Stopped);
        }
        Ok(())
    }

    fn seek(&self, position: f64) -> Result<(), MediaError> {
        self.command(MediaCommand::Seek(position))?;
        let position = {
            let mut inner = self.lock();
            inner.position = position.clamp(0.0, inner.duration.max(0.0));
            inner.position
        };
        self.emit(MediaEvent::PositionChanged { position });
        Ok(())
    }

    fn subscribe(&self, listener: MediaListener) -> MediaSubscription {
        let key = {
            let mut inner = self.lock();
            let key = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.push((key, listener));
            key
        };
        let weak: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        MediaSubscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
                inner.listeners.retain(|(k, _)| *k != key);
            }
        })
    }
}
