//! Test doubles for the platform adapter contracts.

#[cfg(test)]
use anyhow::{bail, Result};

#[cfg(test)]
use crate::infra::contracts::{MessageClipboard, ShareTarget, SpeechSynthesizer};

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub copied: Vec<String>,
    pub fail: bool,
}

#[cfg(test)]
impl MessageClipboard for RecordingClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.fail {
            bail!("clipboard stubbed to fail");
        }
        self.copied.push(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingShare {
    pub shared: Vec<String>,
    pub fail: bool,
}

#[cfg(test)]
impl ShareTarget for RecordingShare {
    fn share(&mut self, text: &str) -> Result<()> {
        if self.fail {
            bail!("share stubbed to fail");
        }
        self.shared.push(text.to_owned());
        Ok(())
    }
}

/// Speech double with a scriptable activity flag, so tick-driven
/// completion tracking can be exercised without spawning processes.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedSpeech {
    pub started: Vec<(String, String)>,
    pub cancelled: usize,
    pub active: bool,
    pub fail_start: bool,
}

#[cfg(test)]
impl SpeechSynthesizer for ScriptedSpeech {
    fn start(&mut self, text: &str, language: &str) -> Result<()> {
        if self.fail_start {
            bail!("speech stubbed to fail");
        }
        self.started.push((text.to_owned(), language.to_owned()));
        self.active = true;
        Ok(())
    }

    fn cancel(&mut self) {
        self.cancelled += 1;
        self.active = false;
    }

    fn is_active(&mut self) -> bool {
        self.active
    }
}
