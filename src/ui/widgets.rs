use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::state::{AppState, FetchLifecycle, FocusedPane};
use crate::github::models::UserDetail;
use crate::storage::history::HISTORY_MAX_ITEMS;
use crate::ui::theme;
use crate::util::format::{group_thousands, relative_age};

fn pane_block(title: String, state: &AppState, pane: FocusedPane) -> Block<'static> {
    let border_style = if state.focused_pane == pane {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_UNFOCUSED
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

pub fn render_search_input(f: &mut Frame, area: Rect, state: &AppState) {
    let block = pane_block(" Search GitHub users ".to_string(), state, FocusedPane::Input);

    let line = if state.input.is_empty() && state.focused_pane != FocusedPane::Input {
        Line::from(Span::styled("Enter GitHub username...", theme::DIM))
    } else {
        let cursor = if state.focused_pane == FocusedPane::Input {
            "_"
        } else {
            ""
        };
        Line::from(format!("{}{}", state.input, cursor))
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_history(f: &mut Frame, area: Rect, state: &AppState) {
    let block = pane_block(
        format!(" Recent Searches ({} max) ", HISTORY_MAX_ITEMS),
        state,
        FocusedPane::History,
    );

    let items: Vec<ListItem> = state
        .history
        .iter()
        .enumerate()
        .map(|(i, term)| {
            let style = if i == state.history_cursor && state.focused_pane == FocusedPane::History
            {
                theme::HIGHLIGHT
            } else {
                theme::HISTORY_TERM
            };
            ListItem::new(Line::from(Span::styled(format!("  {}", term), style)))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

pub fn render_results(f: &mut Frame, area: Rect, state: &AppState) {
    let search = &state.search;

    let title = match search.results() {
        Some(results) if !search.query().is_empty() => format!(
            " Search Results ({} total) ",
            group_thousands(results.total_count)
        ),
        _ => " Search Results ".to_string(),
    };
    let block = pane_block(title, state, FocusedPane::Results);

    let message = match search.lifecycle() {
        FetchLifecycle::Loading => Some(("Loading...".to_string(), theme::DIM)),
        FetchLifecycle::Failed(msg) => Some((format!("Error: {}", msg), theme::ERROR)),
        FetchLifecycle::Idle => Some(("Start searching for GitHub users!".to_string(), theme::DIM)),
        FetchLifecycle::Succeeded(results) if results.items.is_empty() => Some((
            format!("No users found for \"{}\".", search.query()),
            theme::ERROR,
        )),
        FetchLifecycle::Succeeded(_) => None,
    };

    if let Some((msg, style)) = message {
        let para = Paragraph::new(Span::styled(msg, style))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let selected = state.detail.selected();
    let mut lines: Vec<ListItem> = state
        .result_items()
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_selected = selected == Some(user.login.as_str());
            let style = if i == state.results_cursor && state.focused_pane == FocusedPane::Results
            {
                theme::HIGHLIGHT
            } else if is_selected {
                theme::SELECTED
            } else {
                Style::default()
            };
            let marker = if is_selected { "> " } else { "  " };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, user.login),
                style,
            )))
        })
        .collect();

    let max_page = search.max_page();
    if max_page > 1 {
        lines.push(ListItem::new(""));
        lines.push(ListItem::new(Line::from(Span::styled(
            format!("  Page {} of {}", search.page(), max_page),
            theme::DIM,
        ))));
    }

    f.render_widget(List::new(lines).block(block), area);
}

pub fn render_detail_pane(f: &mut Frame, area: Rect, state: &AppState) {
    let block = pane_block(" User Details ".to_string(), state, FocusedPane::Detail);

    let lines = match state.detail.lifecycle() {
        FetchLifecycle::Idle => vec![Line::from(Span::styled(
            "Select a user from the search results to view their full profile.",
            theme::DIM,
        ))],
        FetchLifecycle::Loading => vec![Line::from(Span::styled("Loading...", theme::DIM))],
        FetchLifecycle::Failed(msg) => {
            vec![Line::from(Span::styled(format!("Error: {}", msg), theme::ERROR))]
        }
        FetchLifecycle::Succeeded(detail) => detail_lines(detail),
    };

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(para, area);
}

fn detail_lines(detail: &UserDetail) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(detail.display_name(), theme::HEADER)),
        Line::from(Span::styled(format!("@{}", detail.login), theme::LOGIN)),
        Line::from(""),
    ];

    if let Some(bio) = detail.bio.as_deref().filter(|b| !b.is_empty()) {
        lines.push(Line::from(bio));
        lines.push(Line::from(""));
    }
    if let Some(location) = detail.location.as_deref().filter(|l| !l.is_empty()) {
        lines.push(Line::from(format!("Location: {}", location)));
    }
    if let Some(created_at) = detail.created_at {
        lines.push(Line::from(Span::styled(
            format!("Joined {}", relative_age(&created_at, &chrono::Utc::now())),
            theme::DIM,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(group_thousands(detail.public_repos), theme::STAT_VALUE),
        Span::raw(" Public Repos   "),
        Span::styled(group_thousands(detail.followers), theme::STAT_VALUE),
        Span::raw(" Followers   "),
        Span::styled(group_thousands(detail.following), theme::STAT_VALUE),
        Span::raw(" Following"),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(detail.html_url.as_str(), theme::LINK)));

    lines
}

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let key_hints = match state.focused_pane {
        FocusedPane::Input => "Enter: search | Tab: next pane | Ctrl-U: clear | Ctrl-C: quit",
        _ => "j/k: move | Enter: select | n/p: page | Tab: pane | /: search | o: open | q: quit",
    };

    let right_text = if state.search.query().is_empty() {
        String::new()
    } else {
        format!("\"{}\" page {} ", state.search.query(), state.search.page())
    };

    let total_width = area.width as usize;
    let padding = total_width.saturating_sub(key_hints.len() + right_text.len());

    let line = Line::from(vec![
        Span::styled(key_hints, theme::STATUS_BAR),
        Span::styled(" ".repeat(padding), theme::STATUS_BAR),
        Span::styled(right_text, theme::STATUS_BAR),
    ]);

    let bar = Paragraph::new(line).style(theme::STATUS_BAR);
    f.render_widget(bar, area);
}
