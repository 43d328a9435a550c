/// Events consumed by the shell loop: terminal input, ticks, and
/// completions delivered by the backend reply worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    ReplyArrived(ReplyOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// Key name: a single character, or `enter`, `esc`, `backspace`,
    /// `delete`, `left`, `right`, `home`, `end`.
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }
}

/// Terminal result of one best-effort backend request. There is no
/// retry; a failure is final and the shell substitutes the fallback
/// reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    Reply(String),
    Failed,
}
