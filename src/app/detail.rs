use tracing::debug;

use crate::app::state::FetchLifecycle;
use crate::github::models::UserDetail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub token: u64,
    pub login: String,
}

/// Selected login and the fetch lifecycle of its profile. Independent of
/// the search session.
#[derive(Debug, Default)]
pub struct DetailSession {
    selected: Option<String>,
    lifecycle: FetchLifecycle<UserDetail>,
    latest_token: u64,
}

impl DetailSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn lifecycle(&self) -> &FetchLifecycle<UserDetail> {
        &self.lifecycle
    }

    pub fn detail(&self) -> Option<&UserDetail> {
        self.lifecycle.value()
    }

    /// Change the selection. A new login issues a fetch; `None` clears the
    /// panel. Re-selecting the current login does nothing.
    pub fn select(&mut self, login: Option<String>) -> Option<DetailRequest> {
        if login == self.selected {
            return None;
        }

        self.latest_token += 1;
        self.selected = login;

        match &self.selected {
            None => {
                self.lifecycle = FetchLifecycle::Idle;
                None
            }
            Some(login) => {
                self.lifecycle = FetchLifecycle::Loading;
                Some(DetailRequest {
                    token: self.latest_token,
                    login: login.clone(),
                })
            }
        }
    }

    pub fn apply_detail(&mut self, token: u64, login: &str, detail: UserDetail) -> bool {
        if !self.is_current(token, login) {
            debug!(login = login, token = token, "Discarding stale user details");
            return false;
        }

        self.lifecycle = FetchLifecycle::Succeeded(detail);
        true
    }

    pub fn apply_error(&mut self, token: u64, login: &str, message: String) -> bool {
        if !self.is_current(token, login) {
            debug!(login = login, token = token, "Discarding stale user details error");
            return false;
        }

        self.lifecycle = FetchLifecycle::Failed(message);
        true
    }

    fn is_current(&self, token: u64, login: &str) -> bool {
        token == self.latest_token && self.selected.as_deref() == Some(login)
    }
}
