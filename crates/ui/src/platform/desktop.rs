use std::process::Command;

use tracing::debug;

use super::UiLinkOpener;

/// Opens links in the system browser.
pub struct DesktopLinkOpener;

impl UiLinkOpener for DesktopLinkOpener {
    fn open_url(&self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        if let Err(err) = launcher(std::env::consts::OS, url).spawn() {
            debug!(url, error = %err, "could not open link");
        }
    }
}

/// The URL is always passed as a single argument; no shell sees it.
fn launcher(os: &str, url: &str) -> Command {
    let mut command = match os {
        "macos" => Command::new("open"),
        "windows" => {
            let mut command = Command::new("rundll32");
            command.arg("url.dll,FileProtocolHandler");
            command
        }
        _ => Command::new("xdg-open"),
    };
    command.arg(url);
    command
}
