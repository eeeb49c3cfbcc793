use anyhow::{Context, Result};

#[cfg(target_os = "linux")]
use super::linux::X11Clipboard as PlatformClipboard;
#[cfg(target_os = "macos")]
use super::macos::PasteboardClipboard as PlatformClipboard;
#[cfg(target_os = "windows")]
use super::windows::WinClipboard as PlatformClipboard;

/// Text transfer with the operating system clipboard.
///
/// `write` is best effort: the caller never learns whether the text
/// landed. `read` reports failure so the caller can decide what degraded
/// output looks like.
pub trait Clipboard {
    fn write(&mut self, text: String);
    fn read(&mut self) -> Result<String>;
}

/// The production clipboard. The platform backend connects on first use
/// and stays alive for the rest of the invocation, so a write followed
/// by a read observes the text that was just stored.
pub struct SystemClipboard {
    backend: Option<PlatformClipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { backend: None }
    }

    fn backend(&mut self) -> Result<&mut PlatformClipboard> {
        if self.backend.is_none() {
            self.backend = Some(PlatformClipboard::new()?);
        }
        self.backend.as_mut().context("clipboard backend")
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: String) {
        match self.backend() {
            Ok(backend) => {
                if let Err(e) = backend.write_text(text) {
                    log::debug!("clipboard write failed: {:?}", e);
                }
            }
            Err(e) => log::debug!("clipboard unavailable for write: {:?}", e),
        }
    }

    fn read(&mut self) -> Result<String> {
        self.backend()?.read_text()
    }
}
