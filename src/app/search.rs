use tracing::debug;

use crate::app::state::FetchLifecycle;
use crate::github::models::{SearchResultSet, max_page};

static EMPTY_RESULTS: SearchResultSet = SearchResultSet::empty();

/// A search fetch issued by [`SearchSession`]. Its completion must be handed
/// back with the same `token`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub token: u64,
    pub query: String,
    pub page: u32,
}

/// Query, page and fetch lifecycle of the result list.
///
/// Every change of `(query, page)` issues exactly one request tagged with a
/// fresh token; only the completion carrying the latest token is applied.
#[derive(Debug)]
pub struct SearchSession {
    query: String,
    page: u32,
    lifecycle: FetchLifecycle<SearchResultSet>,
    latest_token: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
            lifecycle: FetchLifecycle::Idle,
            latest_token: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn lifecycle(&self) -> &FetchLifecycle<SearchResultSet> {
        &self.lifecycle
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.lifecycle.error()
    }

    /// The result set to show. `None` while there is no query or a fetch is
    /// pending; a failed fetch shows an empty set.
    pub fn results(&self) -> Option<&SearchResultSet> {
        match &self.lifecycle {
            FetchLifecycle::Succeeded(results) => Some(results),
            FetchLifecycle::Failed(_) => Some(&EMPTY_RESULTS),
            FetchLifecycle::Idle | FetchLifecycle::Loading => None,
        }
    }

    pub fn total_count(&self) -> u64 {
        self.results().map(|r| r.total_count).unwrap_or(0)
    }

    pub fn max_page(&self) -> u32 {
        max_page(self.total_count())
    }

    /// Make `term` the active query. Blank terms and the current query are
    /// ignored; otherwise the page resets to 1 and a fetch is issued.
    pub fn trigger_search(&mut self, term: &str) -> Option<SearchRequest> {
        let term = term.trim();
        if term.is_empty() || term == self.query {
            return None;
        }

        self.query = term.to_string();
        self.page = 1;
        Some(self.issue())
    }

    /// Move to `page` of the active query. The caller keeps `page` within
    /// `1..=max_page()`.
    pub fn change_page(&mut self, page: u32) -> Option<SearchRequest> {
        if self.query.is_empty() || page == 0 || page == self.page {
            return None;
        }

        self.page = page;
        Some(self.issue())
    }

    /// Drop the active query and any pending fetch.
    pub fn clear(&mut self) {
        self.query.clear();
        self.page = 1;
        self.lifecycle = FetchLifecycle::Idle;
        self.latest_token += 1;
    }

    /// Apply a successful completion. Returns the query to record in the
    /// search history, or `None` when the completion is stale.
    pub fn apply_results(&mut self, token: u64, results: SearchResultSet) -> Option<String> {
        if !self.is_current(token) {
            debug!(token = token, latest = self.latest_token, "Discarding stale search results");
            return None;
        }

        self.lifecycle = FetchLifecycle::Succeeded(results);
        Some(self.query.clone())
    }

    /// Apply a failed completion. Returns `false` when it was stale.
    pub fn apply_error(&mut self, token: u64, message: String) -> bool {
        if !self.is_current(token) {
            debug!(token = token, latest = self.latest_token, "Discarding stale search error");
            return false;
        }

        self.lifecycle = FetchLifecycle::Failed(message);
        true
    }

    fn is_current(&self, token: u64) -> bool {
        token == self.latest_token && self.lifecycle.is_loading()
    }

    fn issue(&mut self) -> SearchRequest {
        self.latest_token += 1;
        self.lifecycle = FetchLifecycle::Loading;
        SearchRequest {
            token: self.latest_token,
            query: self.query.clone(),
            page: self.page,
        }
    }
}
