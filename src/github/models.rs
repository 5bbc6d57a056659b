use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Results requested per search page.
pub const PER_PAGE: u32 = 10;

/// GitHub's search API never serves more than 1000 results.
pub const MAX_PAGES: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchResultSet {
    #[serde(default)]
    pub items: Vec<UserSummary>,
    #[serde(default)]
    pub total_count: u64,
}

impl SearchResultSet {
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }

    pub fn max_page(&self) -> u32 {
        max_page(self.total_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetail {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub html_url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserDetail {
    /// Display name, falling back to the login when the profile has none.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }
}

/// Number of reachable result pages for a search with `total_count` hits.
pub fn max_page(total_count: u64) -> u32 {
    let pages = total_count.div_ceil(u64::from(PER_PAGE));
    pages.min(u64::from(MAX_PAGES)) as u32
}
