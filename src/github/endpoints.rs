// GitHub API endpoint functions.
// Typed methods for the three endpoint shapes the data layer consumes.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{RawRepo, ReadmeMeta, UserProfile};

impl GitHubClient {
    /// List up to 100 repositories owned by `username`.
    pub async fn list_user_repos(&self, username: &str) -> Result<Vec<RawRepo>> {
        let params = [("per_page", "100"), ("type", "owner")];
        let response = self
            .get_with_params(&format!("/users/{}/repos", username), &params)
            .await?;
        let repos: Vec<RawRepo> = response.json().await?;
        Ok(repos)
    }

    /// Get the profile counters for `username`.
    pub async fn get_user(&self, username: &str) -> Result<UserProfile> {
        let response = self.get(&format!("/users/{}", username)).await?;
        let profile: UserProfile = response.json().await?;
        Ok(profile)
    }

    /// Get README metadata for a repository's default branch.
    pub async fn get_readme(&self, owner: &str, repo: &str) -> Result<ReadmeMeta> {
        let response = self
            .get(&format!("/repos/{}/{}/readme", owner, repo))
            .await?;
        let meta: ReadmeMeta = response.json().await?;
        Ok(meta)
    }

    /// Fetch raw text from an absolute URL (the README raw-content location).
    pub async fn fetch_raw_text(&self, url: &str) -> Result<String> {
        let response = self.get_url(url).await?;
        let text = response.text().await?;
        Ok(text)
    }
}
