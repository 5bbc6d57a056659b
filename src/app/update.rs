use crate::app::actions::{Action, DataPayload, FailedFetch, SideEffect};
use crate::app::state::{AppState, FocusedPane};

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::MoveUp => {
            match state.focused_pane {
                FocusedPane::History => {
                    state.history_cursor = state.history_cursor.saturating_sub(1);
                }
                FocusedPane::Results => {
                    state.results_cursor = state.results_cursor.saturating_sub(1);
                }
                FocusedPane::Input | FocusedPane::Detail => {}
            }
            vec![]
        }
        Action::MoveDown => {
            match state.focused_pane {
                FocusedPane::History => {
                    if state.history_cursor + 1 < state.history.len() {
                        state.history_cursor += 1;
                    }
                }
                FocusedPane::Results => {
                    if state.results_cursor + 1 < state.result_items().len() {
                        state.results_cursor += 1;
                    }
                }
                FocusedPane::Input | FocusedPane::Detail => {}
            }
            vec![]
        }
        Action::Select => match state.focused_pane {
            FocusedPane::Input => update(state, Action::SubmitSearch),
            FocusedPane::History => match state.highlighted_history().map(str::to_string) {
                Some(term) => trigger_search(state, &term),
                None => vec![],
            },
            FocusedPane::Results => {
                let Some(login) = state.highlighted_user().map(|u| u.login.clone()) else {
                    return vec![];
                };
                state
                    .detail
                    .select(Some(login))
                    .map(SideEffect::FetchUserDetails)
                    .into_iter()
                    .collect()
            }
            FocusedPane::Detail => vec![],
        },
        Action::Back => {
            match state.focused_pane {
                FocusedPane::Results | FocusedPane::Detail if state.detail.selected().is_some() => {
                    state.detail.select(None);
                }
                FocusedPane::Input => {}
                _ => state.focused_pane = FocusedPane::Input,
            }
            vec![]
        }
        Action::SwitchPane => {
            state.focused_pane = state.focused_pane.next();
            vec![]
        }
        Action::SwitchPaneBack => {
            state.focused_pane = state.focused_pane.prev();
            vec![]
        }
        Action::FocusInput => {
            state.focused_pane = FocusedPane::Input;
            vec![]
        }
        Action::NextPage => {
            if !state.can_go_next_page() {
                return vec![];
            }
            let page = state.search.page() + 1;
            change_page(state, page)
        }
        Action::PrevPage => {
            if !state.can_go_prev_page() {
                return vec![];
            }
            let page = state.search.page() - 1;
            change_page(state, page)
        }
        Action::OpenInBrowser => {
            let url = match state.focused_pane {
                FocusedPane::Results => state.highlighted_user().map(|u| u.html_url.clone()),
                FocusedPane::Detail => state.detail.detail().map(|d| d.html_url.clone()),
                FocusedPane::Input | FocusedPane::History => None,
            };
            url.map(SideEffect::OpenUrl).into_iter().collect()
        }
        Action::InputChar(ch) => {
            state.input.push(ch);
            vec![]
        }
        Action::InputBackspace => {
            state.input.pop();
            vec![]
        }
        Action::SubmitSearch => {
            let term = state.input.clone();
            trigger_search(state, &term)
        }
        Action::ClearSearch => {
            state.search.clear();
            state.input.clear();
            state.results_cursor = 0;
            vec![]
        }
        Action::DataLoaded(payload) => match payload {
            DataPayload::SearchResults { token, results } => {
                match state.search.apply_results(token, results) {
                    Some(query) => {
                        state.results_cursor = 0;
                        vec![SideEffect::RecordHistory(query)]
                    }
                    None => vec![],
                }
            }
            DataPayload::UserDetail {
                token,
                login,
                detail,
            } => {
                state.detail.apply_detail(token, &login, detail);
                vec![]
            }
        },
        Action::LoadError(failed) => {
            match failed {
                FailedFetch::Search { token, message } => {
                    if state.search.apply_error(token, message) {
                        state.results_cursor = 0;
                    }
                }
                FailedFetch::UserDetail {
                    token,
                    login,
                    message,
                } => {
                    state.detail.apply_error(token, &login, message);
                }
            }
            vec![]
        }
        Action::HistoryUpdated(history) => {
            state.history = history;
            state.clamp_cursors();
            vec![]
        }
    }
}

/// A new query also drops the current user selection; paging does not.
fn trigger_search(state: &mut AppState, term: &str) -> Vec<SideEffect> {
    let Some(request) = state.search.trigger_search(term) else {
        return vec![];
    };

    state.input = request.query.clone();
    state.results_cursor = 0;
    state.detail.select(None);
    vec![SideEffect::FetchSearch(request)]
}

fn change_page(state: &mut AppState, page: u32) -> Vec<SideEffect> {
    match state.search.change_page(page) {
        Some(request) => {
            state.results_cursor = 0;
            vec![SideEffect::FetchSearch(request)]
        }
        None => vec![],
    }
}
