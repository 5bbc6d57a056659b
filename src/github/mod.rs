pub mod client;
pub mod error;
pub mod models;

pub use client::GithubClient;
pub use error::GithubError;
pub use models::*;
