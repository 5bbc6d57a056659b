use anyhow::{Context, Result, bail};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::GithubError;
use super::models::*;

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    base_url: Url,
}

impl GithubClient {
    pub fn new(api_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(api_url).with_context(|| format!("Invalid GitHub API URL: {api_url}"))?;
        if !matches!(base_url.scheme(), "https" | "http") || base_url.cannot_be_a_base() {
            bail!("GitHub API URL must be an http(s) URL: {}", api_url);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .user_agent("ghsearch")
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GithubError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GithubError::Request(format!("invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, GithubError> {
        let resp = self.client.get(url).query(query).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(error_from_response(resp).await);
        }

        let data = resp.json::<T>().await?;
        Ok(data)
    }

    /// Search users by login, `PER_PAGE` results at a time. An empty query
    /// yields an empty result set without touching the network.
    pub async fn search_users(&self, query: &str, page: u32) -> Result<SearchResultSet, GithubError> {
        if query.is_empty() {
            return Ok(SearchResultSet::empty());
        }

        let url = self.endpoint(&["search", "users"])?;
        let params = [
            ("q", query.to_string()),
            ("page", page.to_string()),
            ("per_page", PER_PAGE.to_string()),
        ];

        let results: SearchResultSet = self.get(url, &params).await?;
        debug!(
            query = query,
            page = page,
            count = results.items.len(),
            total = results.total_count,
            "Search users complete"
        );
        Ok(results)
    }

    pub async fn fetch_user_details(&self, login: &str) -> Result<UserDetail, GithubError> {
        let url = self.endpoint(&["users", login])?;
        let detail: UserDetail = self.get(url, &[]).await?;
        debug!(login = %detail.login, "Fetched user details");
        Ok(detail)
    }
}

async fn error_from_response(resp: Response) -> GithubError {
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap_or_default();
    let body: Option<Value> = serde_json::from_str(&text).ok();
    let message = body
        .as_ref()
        .and_then(|b| b.get("message"))
        .and_then(|m| m.as_str());

    debug!(status = status, message = ?message, "GitHub API error response");
    GithubError::from_status(status, message)
}
