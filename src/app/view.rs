use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::state::AppState;
use crate::ui::widgets;

pub fn render(f: &mut Frame, state: &AppState, sidebar_width_percent: u16) {
    // Main layout: body + status bar
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    let body_area = vertical[0];
    let status_area = vertical[1];

    // Body: sidebar + detail panel
    let sidebar_width = sidebar_width_percent.clamp(20, 80);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(sidebar_width),
            Constraint::Percentage(100 - sidebar_width),
        ])
        .split(body_area);

    let history_height = if state.history.is_empty() {
        0
    } else {
        state.history.len() as u16 + 2
    };

    // Sidebar: input, recent searches, results
    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(history_height),
            Constraint::Min(3),
        ])
        .split(horizontal[0]);

    widgets::render_search_input(f, sidebar[0], state);
    if history_height > 0 {
        widgets::render_history(f, sidebar[1], state);
    }
    widgets::render_results(f, sidebar[2], state);
    widgets::render_detail_pane(f, horizontal[1], state);
    widgets::render_status_bar(f, status_area, state);
}
