use std::time::Duration;

use anyhow::Result;
use x11_clipboard::Clipboard;

/// How long a CLIPBOARD selection transfer may take before the owner is
/// considered unresponsive.
const LOAD_TIMEOUT: Duration = Duration::from_secs(3);

pub struct X11Clipboard {
    clipboard: Clipboard,
}

impl X11Clipboard {
    pub fn new() -> Result<Self> {
        let clipboard = Clipboard::new()?;
        log::debug!("atoms: {:?}", clipboard.getter.atoms);
        Ok(Self { clipboard })
    }

    /// Stores `text` as the CLIPBOARD selection. Selection ownership
    /// lapses when this process exits; a running clipboard manager is
    /// what keeps the text available afterwards.
    pub fn write_text(&mut self, text: String) -> Result<()> {
        let atoms = &self.clipboard.getter.atoms;
        self.clipboard
            .store(atoms.clipboard, atoms.utf8_string, text)?;
        Ok(())
    }

    pub fn read_text(&mut self) -> Result<String> {
        let atoms = &self.clipboard.getter.atoms;
        let raw = self.clipboard.load(
            atoms.clipboard,
            atoms.utf8_string,
            atoms.property,
            LOAD_TIMEOUT,
        )?;
        Ok(String::from_utf8(raw)?)
    }
}
