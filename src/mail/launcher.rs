use anyhow::{Context, Result};
use tracing::info;

/// Opens a compose URL somewhere the user can finish and send the mail.
///
/// Abstracted so tests can capture the URL instead of spawning a browser.
pub trait Launcher {
    fn launch(&mut self, url: &str) -> Result<()>;
}

/// Hands the URL to the platform's default handler (usually the web browser)
#[derive(Debug, Default)]
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    fn launch(&mut self, url: &str) -> Result<()> {
        open::that_detached(url).context("Failed to open the mail compose page")?;
        info!(bytes = url.len(), "opened mail compose page");
        Ok(())
    }
}

/// Remembers every launched URL without opening anything
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub launched: Vec<String>,
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, url: &str) -> Result<()> {
        self.launched.push(url.to_string());
        Ok(())
    }
}
