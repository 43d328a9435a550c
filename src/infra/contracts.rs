//! Adapter contracts for platform collaborators. All of these are
//! fire-and-forget from the shell's point of view: failures surface as
//! status notices, never as structured errors inside the formatter or
//! the transcript.

use anyhow::Result;

pub trait MessageClipboard {
    /// Places `text` on the system clipboard.
    fn copy(&mut self, text: &str) -> Result<()>;
}

pub trait ShareTarget {
    /// Hands `text` to an external share mechanism.
    fn share(&mut self, text: &str) -> Result<()>;
}

/// Platform text-to-speech. At most one utterance is active at a time;
/// starting a new one implicitly cancels any prior one.
pub trait SpeechSynthesizer {
    /// Begins reading `text` aloud in `language` (a code from the
    /// static voice list).
    fn start(&mut self, text: &str, language: &str) -> Result<()>;

    /// Stops the current utterance, if any.
    fn cancel(&mut self);

    /// True while an utterance is still playing. Polled on ticks so the
    /// shell can clear the speaking-message marker when audio ends.
    fn is_active(&mut self) -> bool;
}
