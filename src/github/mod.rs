// GitHub API module.
// HTTP client and wire types for the public GitHub REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use types::{RawRepo, ReadmeMeta, UserProfile};
