//! Opening links in the user's browser.
//!
//! The page never fetches anything itself. Resume and project links are
//! handed to the platform opener, and a failure comes back to the event loop
//! as `AppEvent::UrlOpenFailed`.

use crate::app::event::AppEvent;
use anyhow::{bail, Context, Result};
use tokio::process::Command;
use tokio::sync::mpsc;

/// Program and leading arguments that open a URL on this platform.
pub fn opener_command() -> (&'static str, Vec<&'static str>) {
    if cfg!(target_os = "macos") {
        ("open", vec![])
    } else if cfg!(target_os = "windows") {
        // The empty string is the window title `start` expects first
        ("cmd", vec!["/C", "start", ""])
    } else {
        ("xdg-open", vec![])
    }
}

/// Only web links are handed to the opener.
pub fn is_openable(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Spawn the opener in the background
pub fn spawn_open(url: String, event_tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        if let Err(e) = open_url(&url).await {
            let _ = event_tx.send(AppEvent::UrlOpenFailed {
                url,
                error: e.to_string(),
            });
        }
    });
}

pub async fn open_url(url: &str) -> Result<()> {
    if !is_openable(url) {
        bail!("Refusing to open non-web link: {}", url);
    }

    let (program, args) = opener_command();
    let status = Command::new(program)
        .args(&args)
        .arg(url)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .await
        .with_context(|| format!("Failed to launch {}", program))?;

    if !status.success() {
        bail!("{} exited with {}", program, status);
    }
    tracing::info!(url, "opened link");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_web_links_are_openable() {
        assert!(is_openable("https://example.com/resume.pdf"));
        assert!(is_openable("HTTP://example.com"));
        assert!(!is_openable("#"));
        assert!(!is_openable("file:///etc/passwd"));
        assert!(!is_openable("javascript:alert(1)"));
    }

    #[test]
    fn test_opener_command_for_platform() {
        let (program, _) = opener_command();
        if cfg!(target_os = "macos") {
            assert_eq!(program, "open");
        } else if cfg!(target_os = "windows") {
            assert_eq!(program, "cmd");
        } else {
            assert_eq!(program, "xdg-open");
        }
    }

    #[tokio::test]
    async fn test_rejected_link_reports_failure() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_open("#".to_string(), tx);
        match rx.recv().await {
            Some(AppEvent::UrlOpenFailed { url, error }) => {
                assert_eq!(url, "#");
                assert!(error.contains("non-web"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
