use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};

use crate::domain::shell_state::{ActivePane, ShellState};

use super::compose_input::render_compose_input;
use super::message_rendering::build_transcript_items;
use super::styles;

const TRANSCRIPT_TITLE: &str = "AdGenie — campaign assistant";

pub fn render(frame: &mut Frame<'_>, state: &mut ShellState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    // 3 rows for the input: border + text + border.
    let [transcript_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .areas(content_area);

    let active_pane = state.active_pane();
    render_transcript_panel(frame, transcript_area, state, active_pane);
    render_compose_input(frame, input_area, state.compose(), active_pane);

    let status = Paragraph::new(status_line(state));
    frame.render_widget(status, status_area);
}

fn render_transcript_panel(
    frame: &mut Frame<'_>,
    area: ratatui::layout::Rect,
    state: &mut ShellState,
    active_pane: ActivePane,
) {
    let border_style = if active_pane == ActivePane::Transcript {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let items = build_transcript_items(
        state.transcript().messages(),
        state.speaking_message(),
        state.awaiting_reply(),
    );

    // Keep the selection visible; one item per message, so the message
    // index is also the visual index.
    let viewport_height = area.height.saturating_sub(2) as usize;
    let selected = state.transcript().selected_index();
    if let Some(index) = selected {
        state
            .transcript_mut()
            .update_scroll_offset(index, viewport_height);
    }
    let scroll_offset = state.transcript().scroll_offset();

    let list = List::new(items)
        .block(
            Block::default()
                .title(TRANSCRIPT_TITLE)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD));

    let mut list_state = ListState::default();
    list_state.select(selected);
    *list_state.offset_mut() = scroll_offset;
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn status_line(state: &ShellState) -> String {
    let mode = if !state.is_running() {
        "stopping"
    } else if state.awaiting_reply() {
        "waiting for AdGenie"
    } else {
        "ready"
    };

    let voice = state.speech_language().name;

    let detail = match state.notice() {
        Some(notice) => notice.to_owned(),
        None => match state.active_pane() {
            ActivePane::Transcript => {
                "j/k: navigate | i: compose | y: copy | s: share | v: speak | L: voice | q: quit"
                    .to_owned()
            }
            ActivePane::Compose => "Enter: send | Esc: back to transcript".to_owned(),
        },
    };

    format!("mode: {mode} | voice: {voice} | {detail}")
}
