// README fetcher.
// Two-step fetch: README metadata, then the raw-content location it points at.

use tracing::debug;

use crate::error::Result;

use super::GitHubData;

impl GitHubData {
    /// Raw README text for `owner/repo`, or empty text when unavailable.
    ///
    /// Absence of a README is an expected state, not an exception: any
    /// failure along the way (non-success status, transport error, missing
    /// raw-content location) degrades to empty text. Only successful fetches
    /// are cached.
    pub async fn readme(&self, owner: &str, repo: &str) -> String {
        let key = format!("{}/{}", owner, repo);
        if let Some(text) = self.state().readmes.get_fresh(&key, self.ttl) {
            return text;
        }

        match self.fetch_readme(owner, repo).await {
            Ok(text) => {
                self.state().readmes.insert(key, text.clone());
                text
            }
            Err(err) => {
                debug!(owner, repo, %err, "readme unavailable, returning empty text");
                String::new()
            }
        }
    }

    async fn fetch_readme(&self, owner: &str, repo: &str) -> Result<String> {
        let meta = self.client.get_readme(owner, repo).await?;
        match meta.download_url {
            Some(url) => self.client.fetch_raw_text(&url).await,
            None => Ok(String::new()),
        }
    }
}
