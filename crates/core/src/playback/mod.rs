//! Audio playback engine: per-question playback units and the controller that
//! keeps at most one of them sounding at a time.

mod controller;
mod handle;
mod memory;
mod unit;

pub use controller::PlaybackController;
pub use handle::{MediaError, MediaEvent, MediaHandle, MediaListener, MediaSubscription};
pub use memory::{InMemoryMediaHandle, MediaCommand};
pub use unit::{AudioPlaybackUnit, PlaybackState, SEEK_STEP_SECS, StateObserver};
