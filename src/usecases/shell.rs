//! Shell orchestration: owns the UI state and applies events to it.

use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, KeyInput, ReplyOutcome},
        language::{language_by_code, next_language},
        message::Message,
        shell_state::{ActivePane, ShellState},
    },
    infra::contracts::{MessageClipboard, ShareTarget, SpeechSynthesizer},
    usecases::send_message::{submit_prompt, PromptDispatcher, SubmitError, FALLBACK_REPLY},
};

use super::contracts::ShellOrchestrator;

/// Fixed greeting seeded into the transcript at startup.
const GREETING: &str =
    "Hi! I'm AdGenie, your advertising campaign assistant. How can I help you today?";

pub struct DefaultShellOrchestrator<D, C, H, V>
where
    D: PromptDispatcher,
    C: MessageClipboard,
    H: ShareTarget,
    V: SpeechSynthesizer,
{
    state: ShellState,
    dispatcher: D,
    clipboard: C,
    share: H,
    speech: V,
    session_id: String,
}

impl<D, C, H, V> DefaultShellOrchestrator<D, C, H, V>
where
    D: PromptDispatcher,
    C: MessageClipboard,
    H: ShareTarget,
    V: SpeechSynthesizer,
{
    pub fn new(
        dispatcher: D,
        clipboard: C,
        share: H,
        speech: V,
        session_id: String,
        default_language: &str,
    ) -> Self {
        let mut state = ShellState::default();
        if let Some(language) = language_by_code(default_language) {
            state.set_speech_language(language);
        }
        state.transcript_mut().push(Message::bot(GREETING));

        Self {
            state,
            dispatcher,
            clipboard,
            share,
            speech,
            session_id,
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Result<()> {
        match self.state.active_pane() {
            ActivePane::Transcript => self.handle_transcript_key(key),
            ActivePane::Compose => self.handle_compose_key(key),
        }
    }

    fn handle_transcript_key(&mut self, key: KeyInput) -> Result<()> {
        if key.ctrl {
            return Ok(());
        }

        match key.key.as_str() {
            "q" => self.state.stop(),
            "j" => self.state.transcript_mut().select_next(),
            "k" => self.state.transcript_mut().select_previous(),
            "i" => self.state.focus_compose(),
            "y" => self.copy_selected_reply(),
            "s" => self.share_selected_reply(),
            "v" => self.toggle_speech_for_selected_reply(),
            "L" => self.cycle_speech_language(),
            "+" => self.record_feedback("like"),
            "-" => self.record_feedback("dislike"),
            _ => {}
        }

        Ok(())
    }

    fn handle_compose_key(&mut self, key: KeyInput) -> Result<()> {
        match key.key.as_str() {
            "enter" => self.submit_compose_text(),
            "esc" => self.state.focus_transcript(),
            "backspace" => self.state.compose_mut().delete_before_cursor(),
            "delete" => self.state.compose_mut().delete_at_cursor(),
            "left" => self.state.compose_mut().move_left(),
            "right" => self.state.compose_mut().move_right(),
            "home" => self.state.compose_mut().move_home(),
            "end" => self.state.compose_mut().move_end(),
            _ => {
                if !key.ctrl {
                    if let Some(ch) = single_char(&key.key) {
                        self.state.compose_mut().insert_char(ch);
                    }
                }
            }
        }

        Ok(())
    }

    fn submit_compose_text(&mut self) {
        let raw = self.state.compose().text().to_owned();
        let awaiting = self.state.awaiting_reply();

        match submit_prompt(&mut self.dispatcher, &self.session_id, awaiting, &raw) {
            Ok(prompt) => {
                self.state
                    .transcript_mut()
                    .push(Message::user(prompt.message));
                self.state.compose_mut().clear();
                self.state.set_awaiting_reply(true);
            }
            Err(SubmitError::EmptyMessage) => {}
            Err(SubmitError::RequestPending) => {
                self.state
                    .set_notice("Still waiting for the previous reply.");
            }
            Err(SubmitError::DispatchFailed) => {
                tracing::error!("reply worker is gone; substituting fallback reply");
                self.state.transcript_mut().push(Message::bot(FALLBACK_REPLY));
                self.state.compose_mut().clear();
            }
        }
    }

    fn apply_reply(&mut self, outcome: ReplyOutcome) {
        self.state.set_awaiting_reply(false);

        let message = match outcome {
            ReplyOutcome::Reply(text) => Message::bot(text),
            ReplyOutcome::Failed => Message::bot(FALLBACK_REPLY),
        };
        self.state.transcript_mut().push(message);
    }

    fn copy_selected_reply(&mut self) {
        let Some((_, text)) = self.selected_reply() else {
            return;
        };

        match self.clipboard.copy(&text) {
            Ok(()) => self.state.set_notice("Reply copied to clipboard."),
            Err(error) => {
                tracing::warn!(error = %error, "clipboard copy failed");
                self.state.set_notice("Clipboard is unavailable.");
            }
        }
    }

    fn share_selected_reply(&mut self) {
        let Some((_, text)) = self.selected_reply() else {
            return;
        };

        if self.share.share(&text).is_ok() {
            self.state.set_notice("Share target opened.");
            return;
        }

        // Mirror of the browser fallback: no share capability degrades
        // to a plain clipboard copy.
        match self.clipboard.copy(&text) {
            Ok(()) => self
                .state
                .set_notice("Sharing unavailable; reply copied instead."),
            Err(error) => {
                tracing::warn!(error = %error, "share and clipboard fallback both failed");
                self.state
                    .set_notice("Sharing and clipboard are unavailable.");
            }
        }
    }

    fn toggle_speech_for_selected_reply(&mut self) {
        let Some((index, text)) = self.selected_reply() else {
            return;
        };

        if self.state.speaking_message() == Some(index) {
            self.speech.cancel();
            self.state.set_speaking_message(None);
            return;
        }

        let language = self.state.speech_language();
        match self.speech.start(&text, language.code) {
            Ok(()) => self.state.set_speaking_message(Some(index)),
            Err(error) => {
                tracing::warn!(error = %error, "speech synthesis failed to start");
                self.state.set_speaking_message(None);
                self.state.set_notice("Speech is unavailable on this system.");
            }
        }
    }

    fn cycle_speech_language(&mut self) {
        let language = next_language(self.state.speech_language().code);
        self.state.set_speech_language(language);
        self.state.set_notice(format!("Voice language: {}", language.name));
    }

    fn record_feedback(&mut self, feedback: &str) {
        let Some((index, _)) = self.selected_reply() else {
            return;
        };

        tracing::info!(message_index = index, feedback, "reply feedback recorded");
        self.state.set_notice("Thanks for the feedback.");
    }

    /// Selected message, but only when it is a bot reply; the action bar
    /// does not apply to the user's own bubbles.
    fn selected_reply(&self) -> Option<(usize, String)> {
        let (index, message) = self.state.transcript().selected_message()?;
        message.is_bot().then(|| (index, message.text.clone()))
    }

    fn poll_speech(&mut self) {
        if self.state.speaking_message().is_some() && !self.speech.is_active() {
            self.state.set_speaking_message(None);
        }
    }
}

impl<D, C, H, V> ShellOrchestrator for DefaultShellOrchestrator<D, C, H, V>
where
    D: PromptDispatcher,
    C: MessageClipboard,
    H: ShareTarget,
    V: SpeechSynthesizer,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => self.poll_speech(),
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key)?,
            AppEvent::ReplyArrived(outcome) => self.apply_reply(outcome),
        }

        Ok(())
    }
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}
