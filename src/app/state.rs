use crate::app::detail::DetailSession;
use crate::app::search::SearchSession;
use crate::github::models::UserSummary;

/// State of one asynchronous fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchLifecycle<T> {
    Idle,
    Loading,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for FetchLifecycle<T> {
    fn default() -> Self {
        FetchLifecycle::Idle
    }
}

impl<T> FetchLifecycle<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchLifecycle::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchLifecycle::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchLifecycle::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    History,
    Results,
    Detail,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::History,
            FocusedPane::History => FocusedPane::Results,
            FocusedPane::Results => FocusedPane::Detail,
            FocusedPane::Detail => FocusedPane::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Detail,
            FocusedPane::History => FocusedPane::Input,
            FocusedPane::Results => FocusedPane::History,
            FocusedPane::Detail => FocusedPane::Results,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub search: SearchSession,
    pub detail: DetailSession,
    pub history: Vec<String>,

    // Input box
    pub input: String,

    // Navigation
    pub focused_pane: FocusedPane,
    pub history_cursor: usize,
    pub results_cursor: usize,

    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl AppState {
    pub fn new(history: Vec<String>) -> Self {
        Self {
            search: SearchSession::new(),
            detail: DetailSession::new(),
            history,
            input: String::new(),
            focused_pane: FocusedPane::Input,
            history_cursor: 0,
            results_cursor: 0,
            should_quit: false,
        }
    }

    pub fn result_items(&self) -> &[UserSummary] {
        self.search
            .results()
            .map(|r| r.items.as_slice())
            .unwrap_or_default()
    }

    pub fn highlighted_user(&self) -> Option<&UserSummary> {
        self.result_items().get(self.results_cursor)
    }

    pub fn highlighted_history(&self) -> Option<&str> {
        self.history.get(self.history_cursor).map(|s| s.as_str())
    }

    pub fn can_go_next_page(&self) -> bool {
        !self.search.is_loading() && self.search.page() < self.search.max_page()
    }

    pub fn can_go_prev_page(&self) -> bool {
        !self.search.is_loading() && self.search.page() > 1
    }

    pub fn clamp_cursors(&mut self) {
        let results = self.result_items().len();
        if self.results_cursor >= results {
            self.results_cursor = results.saturating_sub(1);
        }
        if self.history_cursor >= self.history.len() {
            self.history_cursor = self.history.len().saturating_sub(1);
        }
    }
}
