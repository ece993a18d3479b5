// Repository cache & fetcher.
// Owns the only call to the listing endpoint; the other operations derive from it.

use std::sync::{Arc, PoisonError};

use futures::FutureExt;
use tracing::debug;

use crate::cache::SharedFetch;
use crate::error::Result;
use crate::github::types::RawRepo;
use crate::model::Repository;

use super::GitHubData;

impl GitHubData {
    /// Non-fork repositories owned by `username`, newest first.
    ///
    /// Serves a fresh cache entry when one exists; otherwise joins the
    /// in-flight fetch for the same username, or starts a new one. N
    /// concurrent callers cost exactly one listing request.
    pub async fn repos(&self, username: &str) -> Result<Vec<Repository>> {
        let fetch = {
            let mut state = self.state();
            if let Some(repos) = state.repos.get_fresh(username, self.ttl) {
                debug!(username, "repository cache hit");
                return Ok(repos);
            }
            match state.pending_repos.get(username) {
                Some(pending) => {
                    debug!(username, "joining in-flight repository fetch");
                    pending
                }
                None => {
                    let fetch = self.start_repo_fetch(username);
                    state.pending_repos.insert(username, fetch.clone());
                    fetch
                }
            }
        };

        fetch.await
    }

    /// Build the shared fetch future for `username`. On settle it clears its
    /// in-flight slot, and on success writes the cache; failures are never
    /// cached, so the next call retries the network.
    fn start_repo_fetch(&self, username: &str) -> SharedFetch<Vec<Repository>> {
        let client = self.client.clone();
        let state = Arc::clone(&self.state);
        let username = username.to_string();

        async move {
            let result = client.list_user_repos(&username).await.map(normalize);

            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            state.pending_repos.remove(&username);
            if let Ok(repos) = &result {
                state.repos.insert(username.as_str(), repos.clone());
            }
            result
        }
        .boxed()
        .shared()
    }
}

/// Discard forks, sort descending by last update, and normalize into the
/// record shape handed to callers.
fn normalize(raw: Vec<RawRepo>) -> Vec<Repository> {
    let mut repos: Vec<Repository> = raw
        .into_iter()
        .filter(|repo| !repo.fork)
        .map(into_record)
        .collect();
    repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    repos
}

fn into_record(raw: RawRepo) -> Repository {
    Repository {
        name: raw.name,
        description: raw.description,
        url: raw.html_url,
        topics: raw.topics,
        stars: raw.stargazers_count,
        forks: raw.forks_count,
        updated_at: raw.updated_at,
        language: raw.language,
        // GitHub serves "" rather than null for an unset homepage
        homepage: raw.homepage.filter(|homepage| !homepage.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn raw(name: &str, fork: bool, updated_day: u32) -> RawRepo {
        RawRepo {
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/octocat/{}", name),
            topics: Vec::new(),
            stargazers_count: 0,
            forks_count: 0,
            updated_at: Utc.with_ymd_and_hms(2026, 1, updated_day, 0, 0, 0).unwrap(),
            language: None,
            homepage: None,
            fork,
        }
    }

    #[test]
    fn test_forks_are_excluded() {
        let repos = normalize(vec![raw("kept", false, 1), raw("forked", true, 2)]);

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "kept");
    }

    #[test]
    fn test_sorted_descending_by_update() {
        let repos = normalize(vec![raw("old", false, 1), raw("new", false, 20), raw("mid", false, 10)]);

        let names: Vec<&str> = repos.iter().map(|repo| repo.name.as_str()).collect();
        assert_eq!(names, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_empty_homepage_becomes_none() {
        let mut with_empty = raw("a", false, 1);
        with_empty.homepage = Some(String::new());
        let mut with_value = raw("b", false, 2);
        with_value.homepage = Some("https://b.example".to_string());

        let repos = normalize(vec![with_empty, with_value]);

        assert_eq!(repos[0].homepage.as_deref(), Some("https://b.example"));
        assert!(repos[1].homepage.is_none());
    }

    #[test]
    fn test_record_carries_counts_and_topics() {
        let mut input = raw("a", false, 1);
        input.stargazers_count = 7;
        input.forks_count = 2;
        input.topics = vec!["rust".to_string()];

        let repos = normalize(vec![input]);

        assert_eq!(repos[0].stars, 7);
        assert_eq!(repos[0].forks, 2);
        assert_eq!(repos[0].topics, vec!["rust"]);
    }
}
