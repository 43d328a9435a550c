//! Transcript rendering.
//!
//! User bubbles render verbatim; bot bubbles run through the reply
//! formatter and are laid out as intro/list/conclusion with the
//! emphasis accent applied per segment. The formatter keeps empty
//! segments for reconstruction fidelity; this renderer skips them.

use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};

use crate::domain::{
    content::{ContentNode, Segment, SegmentKind},
    formatter::classify_message,
    message::{Message, Sender},
};

use super::styles;

const CONTENT_INDENT: &str = "  ";
const SPEAKING_MARKER: &str = " [speaking]";
const PENDING_LABEL: &str = "AdGenie is typing...";

/// Builds one list item per message, plus a trailing pending row while
/// a request is in flight.
///
/// `speaking_message` is passed in by the caller; rendering holds no
/// speech state of its own.
pub fn build_transcript_items(
    messages: &[Message],
    speaking_message: Option<usize>,
    awaiting_reply: bool,
) -> Vec<ListItem<'static>> {
    let mut items: Vec<ListItem<'static>> = messages
        .iter()
        .enumerate()
        .map(|(index, message)| message_item(message, speaking_message == Some(index)))
        .collect();

    if awaiting_reply {
        items.push(ListItem::new(vec![pending_line()]));
    }

    items
}

fn message_item(message: &Message, is_speaking: bool) -> ListItem<'static> {
    let mut lines = vec![header_line(message, is_speaking)];

    if message.is_bot() {
        lines.extend(reply_lines(&message.text));
    } else {
        for text_line in message.text.lines() {
            lines.push(indented_line(vec![Span::styled(
                text_line.to_owned(),
                styles::message_text_style(),
            )]));
        }
    }

    // Blank spacer between bubbles.
    lines.push(Line::default());
    ListItem::new(lines)
}

fn header_line(message: &Message, is_speaking: bool) -> Line<'static> {
    let (tag, style) = match message.sender {
        Sender::User => ("You", styles::user_tag_style()),
        Sender::Bot => ("AdGenie", styles::bot_tag_style()),
    };

    let mut spans = vec![Span::styled(format!("{tag}:"), style)];
    if is_speaking {
        spans.push(Span::styled(
            SPEAKING_MARKER.to_owned(),
            styles::speaking_marker_style(),
        ));
    }

    Line::from(spans)
}

/// Renders a bot reply through the structure classifier.
fn reply_lines(text: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for node in classify_message(text) {
        match node {
            ContentNode::Paragraph(segments) => {
                for spans in segment_rows(&segments) {
                    lines.push(indented_line(spans));
                }
            }
            ContentNode::List(items) => {
                for (position, item) in items.iter().enumerate() {
                    lines.extend(list_item_lines(position + 1, item));
                }
            }
        }
    }

    if lines.is_empty() {
        lines.push(indented_line(vec![Span::styled(
            "[Empty reply]".to_owned(),
            styles::pending_style(),
        )]));
    }

    lines
}

fn list_item_lines(number: usize, segments: &[Segment]) -> Vec<Line<'static>> {
    let enumerator = format!("{number}. ");
    let rows = segment_rows(segments);

    if rows.is_empty() {
        return vec![indented_line(vec![Span::styled(
            enumerator,
            styles::enumerator_style(),
        )])];
    }

    let continuation_pad = " ".repeat(enumerator.chars().count());
    rows.into_iter()
        .enumerate()
        .map(|(row_index, spans)| {
            let lead = if row_index == 0 {
                Span::styled(enumerator.clone(), styles::enumerator_style())
            } else {
                Span::raw(continuation_pad.clone())
            };
            let mut line_spans = vec![Span::raw(CONTENT_INDENT.to_owned()), lead];
            line_spans.extend(spans);
            Line::from(line_spans)
        })
        .collect()
}

/// Converts a segment run into styled span rows, one row per rendered
/// line; embedded newlines split rows while keeping the segment style.
fn segment_rows(segments: &[Segment]) -> Vec<Vec<Span<'static>>> {
    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for segment in segments {
        if segment.is_empty() {
            continue;
        }

        let style = match segment.kind {
            SegmentKind::Plain => styles::message_text_style(),
            SegmentKind::Emphasized => styles::emphasis_style(),
        };

        let mut pieces = segment.text.split('\n');
        if let Some(first) = pieces.next() {
            if !first.is_empty() {
                current.push(Span::styled(first.to_owned(), style));
            }
            for piece in pieces {
                rows.push(std::mem::take(&mut current));
                if !piece.is_empty() {
                    current.push(Span::styled(piece.to_owned(), style));
                }
            }
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}

fn indented_line(spans: Vec<Span<'static>>) -> Line<'static> {
    let mut line_spans = vec![Span::raw(CONTENT_INDENT.to_owned())];
    line_spans.extend(spans);
    Line::from(line_spans)
}

fn pending_line() -> Line<'static> {
    Line::from(vec![Span::styled(
        PENDING_LABEL.to_owned(),
        styles::pending_style(),
    )])
}
