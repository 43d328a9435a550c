use std::process::{Child, Command, Stdio};

use anyhow::{bail, Context, Result};

use crate::infra::contracts::SpeechSynthesizer;

/// Text-to-speech via an external platform command (`espeak-ng` by
/// default, configurable). The language code is passed with `-v`, the
/// text as the final argument, which matches espeak/espeak-ng and is
/// close enough to `say -v` on macOS with a voice name configured.
#[derive(Debug)]
pub struct CommandSpeech {
    command: String,
    child: Option<Child>,
}

impl CommandSpeech {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            child: None,
        }
    }
}

impl SpeechSynthesizer for CommandSpeech {
    fn start(&mut self, text: &str, language: &str) -> Result<()> {
        self.cancel();

        if self.command.trim().is_empty() {
            bail!("speech command is not configured");
        }

        let child = Command::new(&self.command)
            .arg("-v")
            .arg(language)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to launch speech command {:?}", self.command))?;

        self.child = Some(child);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    fn is_active(&mut self) -> bool {
        let Some(child) = self.child.as_mut() else {
            return false;
        };

        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(_)) | Err(_) => {
                self.child = None;
                false
            }
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_refuses_to_start() {
        let mut speech = CommandSpeech::new("");

        let result = speech.start("hello", "en");

        assert!(result.is_err());
        assert!(!speech.is_active());
    }

    #[test]
    fn missing_binary_reports_launch_failure() {
        let mut speech = CommandSpeech::new("adgenie-test-no-such-tts-binary");

        let result = speech.start("hello", "en");

        assert!(result.is_err());
        assert!(!speech.is_active());
    }

    #[test]
    fn cancel_without_an_utterance_is_a_noop() {
        let mut speech = CommandSpeech::new("espeak-ng");

        speech.cancel();

        assert!(!speech.is_active());
    }
}
