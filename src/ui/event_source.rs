use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Keyboard events from the terminal; emits `Tick` on poll timeout so
/// the shell can drive time-based polling (speech completion).
#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            if key.code == KeyCode::Char('c') && ctrl {
                return Ok(Some(AppEvent::QuitRequested));
            }

            let name = match key.code {
                KeyCode::Char(ch) => ch.to_string(),
                KeyCode::Enter => "enter".to_owned(),
                KeyCode::Esc => "esc".to_owned(),
                KeyCode::Backspace => "backspace".to_owned(),
                KeyCode::Delete => "delete".to_owned(),
                KeyCode::Left => "left".to_owned(),
                KeyCode::Right => "right".to_owned(),
                KeyCode::Home => "home".to_owned(),
                KeyCode::End => "end".to_owned(),
                _ => return Ok(None),
            };

            return Ok(Some(AppEvent::InputKey(KeyInput::new(name, ctrl))));
        }

        Ok(None)
    }
}

/// Merges worker-delivered events with terminal input: channel events
/// (completed backend replies) drain first, keyboard polling runs only
/// when the channel is idle.
pub struct CompositeEventSource {
    worker_events: Receiver<AppEvent>,
    terminal: CrosstermEventSource,
}

impl CompositeEventSource {
    pub fn new(worker_events: Receiver<AppEvent>) -> Self {
        Self {
            worker_events,
            terminal: CrosstermEventSource,
        }
    }
}

impl AppEventSource for CompositeEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        match self.worker_events.try_recv() {
            Ok(event) => return Ok(Some(event)),
            // A dead worker is not fatal here; submission surfaces it.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
        }

        self.terminal.next_event()
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::domain::events::ReplyOutcome;

    #[test]
    fn composite_source_drains_worker_events_first() {
        let (tx, rx) = mpsc::channel();
        let mut source = CompositeEventSource::new(rx);
        tx.send(AppEvent::ReplyArrived(ReplyOutcome::Failed))
            .expect("send must succeed");

        let event = source.next_event().expect("must read channel event");

        assert_eq!(event, Some(AppEvent::ReplyArrived(ReplyOutcome::Failed)));
    }

    #[test]
    fn mock_source_yields_queued_events_in_order() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick, AppEvent::QuitRequested]);

        assert_eq!(source.next_event().expect("event"), Some(AppEvent::Tick));
        assert_eq!(
            source.next_event().expect("event"),
            Some(AppEvent::QuitRequested)
        );
        assert_eq!(source.next_event().expect("event"), None);
    }
}
