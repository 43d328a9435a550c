use super::{
    compose_state::ComposeState,
    language::{SpeechLanguage, SPEECH_LANGUAGES},
    transcript::TranscriptState,
};

/// Which panel owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Transcript,
    Compose,
}

/// Aggregate UI state for the chat shell.
///
/// The currently-speaking message index lives here as an explicit
/// value and is passed into rendering; nothing else in the crate holds
/// speech-tracking state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    active_pane: ActivePane,
    transcript: TranscriptState,
    compose: ComposeState,
    awaiting_reply: bool,
    speech_language: SpeechLanguage,
    speaking_message: Option<usize>,
    notice: Option<String>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            active_pane: ActivePane::Transcript,
            transcript: TranscriptState::default(),
            compose: ComposeState::default(),
            awaiting_reply: false,
            speech_language: SPEECH_LANGUAGES[0],
            speaking_message: None,
            notice: None,
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn focus_compose(&mut self) {
        self.active_pane = ActivePane::Compose;
    }

    pub fn focus_transcript(&mut self) {
        self.active_pane = ActivePane::Transcript;
    }

    pub fn transcript(&self) -> &TranscriptState {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut TranscriptState {
        &mut self.transcript
    }

    pub fn compose(&self) -> &ComposeState {
        &self.compose
    }

    pub fn compose_mut(&mut self) -> &mut ComposeState {
        &mut self.compose
    }

    /// True while a backend request is in flight; submissions are
    /// refused until the pending reply (or its fallback) lands.
    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    pub fn set_awaiting_reply(&mut self, awaiting: bool) {
        self.awaiting_reply = awaiting;
    }

    pub fn speech_language(&self) -> SpeechLanguage {
        self.speech_language
    }

    pub fn set_speech_language(&mut self, language: SpeechLanguage) {
        self.speech_language = language;
    }

    /// Transcript index of the message being read aloud, if any.
    pub fn speaking_message(&self) -> Option<usize> {
        self.speaking_message
    }

    pub fn set_speaking_message(&mut self, index: Option<usize>) {
        self.speaking_message = index;
    }

    /// Transient one-line feedback shown in the status bar.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::language_by_code;

    #[test]
    fn default_state_runs_with_transcript_focus() {
        let state = ShellState::default();

        assert!(state.is_running());
        assert_eq!(state.active_pane(), ActivePane::Transcript);
        assert!(!state.awaiting_reply());
        assert_eq!(state.speaking_message(), None);
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn stop_clears_the_running_flag() {
        let mut state = ShellState::default();

        state.stop();

        assert!(!state.is_running());
    }

    #[test]
    fn pane_focus_toggles() {
        let mut state = ShellState::default();

        state.focus_compose();
        assert_eq!(state.active_pane(), ActivePane::Compose);

        state.focus_transcript();
        assert_eq!(state.active_pane(), ActivePane::Transcript);
    }

    #[test]
    fn default_language_is_the_first_list_entry() {
        let state = ShellState::default();

        assert_eq!(state.speech_language().code, "es");
    }

    #[test]
    fn language_can_be_replaced() {
        let mut state = ShellState::default();

        let english = language_by_code("en").expect("en is in the list");
        state.set_speech_language(english);

        assert_eq!(state.speech_language().code, "en");
    }

    #[test]
    fn notice_replaces_the_previous_one() {
        let mut state = ShellState::default();

        state.set_notice("first");
        state.set_notice("second");

        assert_eq!(state.notice(), Some("second"));
    }
}
