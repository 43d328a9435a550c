use anyhow::{bail, Context, Result};

use crate::infra::contracts::MessageClipboard;

/// System clipboard backed by arboard. A fresh handle is opened per
/// copy; the handle must not outlive the operation on some platforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl MessageClipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            bail!("nothing to copy");
        }

        let mut clipboard = arboard::Clipboard::new().context("clipboard is unavailable")?;
        clipboard
            .set_text(text)
            .context("failed to write clipboard contents")?;
        Ok(())
    }
}
