use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dioxus::document::eval;
use dioxus::prelude::*;
use serde::Deserialize;
use tracing::debug;

use listening_core::model::{HandleId, QuestionId};
use listening_core::playback::{
    AudioPlaybackUnit, MediaError, MediaEvent, MediaHandle, MediaListener, MediaSubscription,
    PlaybackState, SEEK_STEP_SECS, StateObserver,
};

use super::scripts::{listen_script, pause_script, play_script, seek_script};
use crate::context::AppContext;

//
// ─── WEBVIEW MEDIA ELEMENT ─────────────────────────────────────────────────────
//

/// Event payload posted by [`listen_script`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum MediaMessage {
    Metadata {
        #[serde(default)]
        duration: f64,
    },
    Position {
        #[serde(default)]
        position: f64,
    },
    Started,
    Stopped,
    Ended,
}

impl From<MediaMessage> for MediaEvent {
    fn from(message: MediaMessage) -> Self {
        match message {
            MediaMessage::Metadata { duration } => MediaEvent::MetadataLoaded { duration },
            MediaMessage::Position { position } => MediaEvent::PositionChanged { position },
            MediaMessage::Started => MediaEvent::Started,
            MediaMessage::Stopped => MediaEvent::Stopped,
            MediaMessage::Ended => MediaEvent::Ended,
        }
    }
}

pub(super) fn audio_element_id(question: QuestionId) -> String {
    format!("quiz-audio-{question}")
}

/// An `<audio>` element in the webview, driven by script evaluation.
///
/// Commands are fire-and-forget: the element reports back through events.
struct WebAudioHandle {
    id: HandleId,
    element_id: String,
}

impl WebAudioHandle {
    fn for_question(question: QuestionId) -> Self {
        Self {
            id: HandleId::from(question),
            element_id: audio_element_id(question),
        }
    }
}

impl MediaHandle for WebAudioHandle {
    fn id(&self) -> HandleId {
        self.id
    }

    fn play(&self) -> Result<(), MediaError> {
        let _ = eval(&play_script(&self.element_id));
        Ok(())
    }

    fn pause(&self) -> Result<(), MediaError> {
        let _ = eval(&pause_script(&self.element_id));
        Ok(())
    }

    fn seek(&self, position: f64) -> Result<(), MediaError> {
        let _ = eval(&seek_script(&self.element_id, position));
        Ok(())
    }

    fn subscribe(&self, listener: MediaListener) -> MediaSubscription {
        let open = Arc::new(AtomicBool::new(true));
        let task_open = Arc::clone(&open);
        let element_id = self.element_id.clone();
        let mut channel = eval(&listen_script(&self.element_id));

        spawn(async move {
            loop {
                match channel.recv::<MediaMessage>().await {
                    Ok(message) => {
                        if !task_open.load(Ordering::Acquire) {
                            break;
                        }
                        listener(message.into());
                    }
                    Err(err) => {
                        debug!(element = %element_id, error = ?err, "media event channel closed");
                        break;
                    }
                }
            }
        });

        MediaSubscription::new(move || open.store(false, Ordering::Release))
    }
}

//
// ─── PLAYER ────────────────────────────────────────────────────────────────────
//

fn play_label(state: PlaybackState) -> &'static str {
    if state.playing { "⏸ Pause" } else { "▶ Play" }
}

#[component]
pub(super) fn AudioPlayer(question: QuestionId, src: String) -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_signal_sync(PlaybackState::default);
    let mut bar = use_signal(|| None::<Rc<MountedData>>);

    let unit = use_hook(move || {
        let observer: StateObserver = Arc::new(move |next: PlaybackState| {
            let mut state = state;
            state.set(next);
        });
        let handle: Arc<dyn MediaHandle> = Arc::new(WebAudioHandle::for_question(question));
        Rc::new(AudioPlaybackUnit::with_observer(
            handle,
            ctx.controller(),
            Some(observer),
        ))
    });

    let snapshot = state();
    let element_id = audio_element_id(question);
    let fill_width = format!("width: {:.2}%;", snapshot.progress_percent());
    let time_label = snapshot.time_label();
    let play_text = play_label(snapshot);

    let unit_for_bar = Rc::clone(&unit);
    let unit_for_back = Rc::clone(&unit);
    let unit_for_toggle = Rc::clone(&unit);
    let unit_for_forward = Rc::clone(&unit);

    rsx! {
        div { class: "audio-wrapper",
            audio { id: "{element_id}", src: "{src}", preload: "metadata" }
            div {
                class: "audio-progress-container",
                title: "Click to seek",
                onmounted: move |evt| bar.set(Some(evt.data())),
                onclick: move |evt| {
                    let x = evt.data.element_coordinates().x;
                    let unit = Rc::clone(&unit_for_bar);
                    async move {
                        let Some(mounted) = bar() else {
                            return;
                        };
                        if let Ok(rect) = mounted.get_client_rect().await {
                            unit.seek_to_fraction(x / rect.width());
                        }
                    }
                },
                div { class: "audio-progress-fill", style: "{fill_width}" }
            }
            div { class: "audio-controls",
                button {
                    class: "audio-btn",
                    r#type: "button",
                    onclick: move |_| unit_for_back.seek_relative(-SEEK_STEP_SECS),
                    "⏪ -5s"
                }
                button {
                    class: "audio-btn",
                    r#type: "button",
                    onclick: move |_| unit_for_toggle.toggle_play_pause(),
                    "{play_text}"
                }
                button {
                    class: "audio-btn",
                    r#type: "button",
                    onclick: move |_| unit_for_forward.seek_relative(SEEK_STEP_SECS),
                    "+5s ⏩"
                }
                span { class: "audio-time", "{time_label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> MediaEvent {
        MediaEvent::from(serde_json::from_str::<MediaMessage>(raw).unwrap())
    }

    #[test]
    fn webview_messages_map_to_media_events() {
        assert_eq!(
            decode(r#"{"kind":"metadata","duration":31.5}"#),
            MediaEvent::MetadataLoaded { duration: 31.5 }
        );
        assert_eq!(
            decode(r#"{"kind":"position","position":4.25}"#),
            MediaEvent::PositionChanged { position: 4.25 }
        );
        assert_eq!(decode(r#"{"kind":"started"}"#), MediaEvent::Started);
        assert_eq!(decode(r#"{"kind":"ended"}"#), MediaEvent::Ended);
    }

    #[test]
    fn missing_numbers_default_to_zero() {
        assert_eq!(
            decode(r#"{"kind":"metadata"}"#),
            MediaEvent::MetadataLoaded { duration: 0.0 }
        );
    }

    #[test]
    fn handle_identity_follows_question() {
        let handle = WebAudioHandle::for_question(QuestionId::new(12));
        assert_eq!(handle.id(), HandleId::new(12));
        assert_eq!(handle.element_id, "quiz-audio-12");
    }

    #[test]
    fn play_label_tracks_state() {
        let mut state = PlaybackState::default();
        assert_eq!(play_label(state), "▶ Play");
        state.playing = true;
        assert_eq!(play_label(state), "⏸ Pause");
    }
}
