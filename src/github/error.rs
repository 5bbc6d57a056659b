use thiserror::Error;

pub const RATE_LIMIT_MESSAGE: &str = "API Rate Limit Exceeded. Please try again later.";

/// Failure of a single GitHub API call. The `Display` form is the message
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GithubError {
    /// The request went out but no response came back.
    #[error("Network Error: No response received from server.")]
    Network,

    /// The server answered with a non-success status.
    #[error("{0}")]
    Api(String),

    /// Anything else: building the request, decoding the body.
    #[error("Request failed: {0}")]
    Request(String),
}

impl GithubError {
    /// Build the error for a non-2xx response from its status code and the
    /// `message` field of the body, if any.
    pub fn from_status(status: u16, body_message: Option<&str>) -> Self {
        let body_message = body_message.filter(|m| !m.is_empty());

        if status == 403 && body_message.is_some_and(|m| m.contains("rate limit")) {
            return GithubError::Api(RATE_LIMIT_MESSAGE.to_string());
        }

        match body_message {
            Some(message) => GithubError::Api(message.to_string()),
            None => GithubError::Api(format!("HTTP error! Status: {status}")),
        }
    }
}

impl From<reqwest::Error> for GithubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() || err.is_decode() || err.is_body() {
            GithubError::Request(err.to_string())
        } else {
            GithubError::Network
        }
    }
}
