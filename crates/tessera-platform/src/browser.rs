//! Hand-off of outbound links to the system's default browser.

use tessera_common::PlatformError;

/// Something that can show a URL outside the app.
pub trait ExternalBrowser: Send + Sync {
    fn open(&self, url: &str) -> Result<(), PlatformError>;
}

/// Opens URLs with the OS default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl ExternalBrowser for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), PlatformError> {
        tracing::info!(url, "opening in external browser");
        open::that(url).map_err(|e| PlatformError::BrowserError(format!("{url}: {e}")))
    }
}
