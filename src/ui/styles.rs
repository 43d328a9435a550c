//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Transcript styles
// =============================================================================

/// Style for the user's sender tag.
pub fn user_tag_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Style for the assistant's sender tag.
pub fn bot_tag_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Style for regular message text.
pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for `**emphasized**` reply spans: the brand accent.
pub fn emphasis_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Style for list enumerators.
pub fn enumerator_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the speaking marker next to a reply being read aloud.
pub fn speaking_marker_style() -> Style {
    Style::default().fg(Color::Magenta)
}

/// Style for the pending "processing" row.
pub fn pending_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

// =============================================================================
// Panel and input styles
// =============================================================================

pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_style_is_bold_red() {
        let style = emphasis_style();
        assert_eq!(style.fg, Some(Color::Red));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn sender_tags_are_bold() {
        assert!(user_tag_style().add_modifier.contains(Modifier::BOLD));
        assert!(bot_tag_style().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn enumerator_style_is_dark_gray() {
        assert_eq!(enumerator_style().fg, Some(Color::DarkGray));
    }
}
