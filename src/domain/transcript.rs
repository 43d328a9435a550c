//! Conversation transcript state.
//!
//! The transcript is the sole piece of conversation state: an ordered,
//! append-only message sequence. Messages are never removed or
//! reordered, so the index of a message is a stable identity for the
//! lifetime of the session.

use super::message::Message;

/// Number of rows kept visible above/below the cursor before scrolling.
const SCROLL_MARGIN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranscriptState {
    messages: Vec<Message>,
    selected_index: Option<usize>,
    scroll_offset: usize,
}

impl TranscriptState {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Appends a message and moves the selection to it, so the view
    /// follows the newest bubble like the conversation auto-scroll.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.selected_index = Some(self.messages.len() - 1);
    }

    /// Returns the selected message together with its transcript index.
    pub fn selected_message(&self) -> Option<(usize, &Message)> {
        let index = self.selected_index?;
        self.messages.get(index).map(|message| (index, message))
    }

    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(0),
            Some(index) if index + 1 < self.messages.len() => Some(index + 1),
            Some(index) => Some(index),
        };
    }

    pub fn select_previous(&mut self) {
        if self.messages.is_empty() {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(self.messages.len() - 1),
            Some(0) => Some(0),
            Some(index) => Some(index - 1),
        };
    }

    /// Keeps the cursor visible with `SCROLL_MARGIN` rows of breathing
    /// room inside a viewport of `viewport_height` rows.
    ///
    /// `item_index` is the visual row of the selection in the rendered
    /// list (one item per message here, so it equals the message index).
    pub fn update_scroll_offset(&mut self, item_index: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        let margin = SCROLL_MARGIN.min(viewport_height / 2);

        if item_index < self.scroll_offset + margin {
            self.scroll_offset = item_index.saturating_sub(margin);
        }

        let visible_bottom = self.scroll_offset + viewport_height;
        if item_index + margin >= visible_bottom {
            self.scroll_offset = (item_index + margin + 1).saturating_sub(viewport_height);
        }
    }
}
