//! Compose field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{compose_state::ComposeState, shell_state::ActivePane};

use super::styles;

/// Placeholder shown when the field is unfocused and empty.
const PLACEHOLDER_TEXT: &str = "Press 'i' to write to AdGenie...";

/// Prompt symbol shown before the composed text.
const PROMPT_SYMBOL: &str = "> ";

pub fn render_compose_input(
    frame: &mut Frame<'_>,
    area: Rect,
    compose: &ComposeState,
    active_pane: ActivePane,
) {
    let is_focused = active_pane == ActivePane::Compose;

    let border_style = if is_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let line = build_input_line(compose, is_focused);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(paragraph, area);

    if is_focused {
        // Saturating arithmetic keeps very long inputs from overflowing.
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(compose.cursor().min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn build_input_line(compose: &ComposeState, is_focused: bool) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if !is_focused && compose.is_empty() {
        return Line::from(vec![
            prompt,
            Span::styled(
                PLACEHOLDER_TEXT.to_owned(),
                styles::input_placeholder_style(),
            ),
        ]);
    }

    Line::from(vec![
        prompt,
        Span::styled(compose.text().to_owned(), styles::input_text_style()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_to_string(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn shows_placeholder_when_empty_and_unfocused() {
        let compose = ComposeState::default();

        let line = build_input_line(&compose, false);

        let text = line_to_string(&line);
        assert!(text.starts_with(PROMPT_SYMBOL));
        assert!(text.contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn hides_placeholder_when_focused() {
        let compose = ComposeState::default();

        let line = build_input_line(&compose, true);

        assert!(!line_to_string(&line).contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn shows_typed_text_in_either_focus_state() {
        let mut compose = ComposeState::default();
        compose.insert_char('h');
        compose.insert_char('i');

        for focused in [true, false] {
            let text = line_to_string(&build_input_line(&compose, focused));
            assert!(text.contains("hi"), "focused: {focused}");
        }
    }
}
