// GitHub API response types.
// Structs for deserializing GitHub REST API responses; field names follow the wire.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Repository as returned by the user-repos listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepo {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub updated_at: DateTime<Utc>,
    pub language: Option<String>,
    pub homepage: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

/// Account profile counters.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub public_repos: u64,
    pub followers: u64,
}

/// README metadata. `download_url` is null for symlinked READMEs.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadmeMeta {
    pub download_url: Option<String>,
}
