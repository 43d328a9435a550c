//! Use case for submitting user text to the AdGenie backend.
//!
//! Validation happens here; transport happens behind the
//! `PromptDispatcher` seam, normally a channel into the reply worker.

/// Reply text substituted whenever the backend request fails. There is
/// exactly one attempt per prompt; this string is the entire failure
/// story.
pub const FALLBACK_REPLY: &str =
    "Sorry, there was a connection problem reaching AdGenie. Please try again in a moment.";

/// One outbound chat request: the user text plus the session identity
/// that was resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingPrompt {
    pub message: String,
    pub session_id: String,
}

/// Errors at the transport seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The reply worker is gone; its channel is closed.
    WorkerGone,
}

/// Domain-level errors for the submit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Text is empty after trimming whitespace.
    EmptyMessage,
    /// A previous request is still in flight.
    RequestPending,
    /// The prompt could not be handed to the worker.
    DispatchFailed,
}

pub trait PromptDispatcher {
    /// Hands a prompt to the backend worker. Must not block.
    fn dispatch(&mut self, prompt: OutgoingPrompt) -> Result<(), DispatchError>;
}

/// Validates and dispatches one prompt.
///
/// Returns the dispatched prompt so the caller can append the user
/// bubble to the transcript with exactly the text that was sent.
pub fn submit_prompt(
    dispatcher: &mut dyn PromptDispatcher,
    session_id: &str,
    awaiting_reply: bool,
    raw_text: &str,
) -> Result<OutgoingPrompt, SubmitError> {
    let text = raw_text.trim();
    if text.is_empty() {
        return Err(SubmitError::EmptyMessage);
    }
    if awaiting_reply {
        return Err(SubmitError::RequestPending);
    }

    let prompt = OutgoingPrompt {
        message: text.to_owned(),
        session_id: session_id.to_owned(),
    };
    dispatcher
        .dispatch(prompt.clone())
        .map_err(map_dispatch_error)?;

    Ok(prompt)
}

fn map_dispatch_error(error: DispatchError) -> SubmitError {
    match error {
        DispatchError::WorkerGone => SubmitError::DispatchFailed,
    }
}

/// Dispatcher double shared by orchestrator and shell tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    pub dispatched: Vec<OutgoingPrompt>,
    pub fail: bool,
}

#[cfg(test)]
impl PromptDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, prompt: OutgoingPrompt) -> Result<(), DispatchError> {
        if self.fail {
            return Err(DispatchError::WorkerGone);
        }
        self.dispatched.push(prompt);
        Ok(())
    }
}
