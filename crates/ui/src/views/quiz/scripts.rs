pub(super) const QUIZ_AREA_ID: &str = "quiz-area";

pub(super) fn scroll_into_view_script(element_id: &str) -> String {
    format!(
        r#"(function() {{
                setTimeout(() => {{
                    const el = document.getElementById({element_id:?});
                    if (el) el.scrollIntoView({{ behavior: "auto", block: "start" }});
                }}, 0);
            }})();"#,
    )
}

pub(super) fn play_script(element_id: &str) -> String {
    format!(
        r#"(function() {{
                const el = document.getElementById({element_id:?});
                if (!el) return;
                const pending = el.play();
                if (pending && pending.catch) pending.catch(() => {{}});
            }})();"#,
    )
}

pub(super) fn pause_script(element_id: &str) -> String {
    format!(
        r#"(function() {{
                const el = document.getElementById({element_id:?});
                if (el) el.pause();
            }})();"#,
    )
}

pub(super) fn seek_script(element_id: &str, position: f64) -> String {
    let position = if position.is_finite() { position.max(0.0) } else { 0.0 };
    format!(
        r#"(function() {{
                const el = document.getElementById({element_id:?});
                if (!el) return;
                const duration = Number.isFinite(el.duration) ? el.duration : 0;
                el.currentTime = Math.max(0, Math.min({position}, duration));
            }})();"#,
    )
}

/// Forwards media events of an `<audio>` element through `dioxus.send`.
///
/// The element may not be mounted yet when this runs, so attaching is retried
/// for a short while.
pub(super) fn listen_script(element_id: &str) -> String {
    format!(
        r#"const id = {element_id:?};
            const finite = (value) => (Number.isFinite(value) ? value : 0);
            const attach = (tries) => {{
                const el = document.getElementById(id);
                if (!el) {{
                    if (tries < 100) setTimeout(() => attach(tries + 1), 20);
                    return;
                }}
                if (el.__quizListeners) {{
                    for (const [name, fn] of el.__quizListeners) el.removeEventListener(name, fn);
                }}
                const listeners = [
                    ["loadedmetadata", () => dioxus.send({{ kind: "metadata", duration: finite(el.duration) }})],
                    ["timeupdate", () => dioxus.send({{ kind: "position", position: finite(el.currentTime) }})],
                    ["seeked", () => dioxus.send({{ kind: "position", position: finite(el.currentTime) }})],
                    ["play", () => dioxus.send({{ kind: "started" }})],
                    ["pause", () => dioxus.send({{ kind: "stopped" }})],
                    ["ended", () => dioxus.send({{ kind: "ended" }})],
                ];
                for (const [name, fn] of listeners) el.addEventListener(name, fn);
                el.__quizListeners = listeners;
                if (el.readyState >= 1) dioxus.send({{ kind: "metadata", duration: finite(el.duration) }});
            }};
            attach(0);
            await new Promise(() => {{}});"#,
    )
}
