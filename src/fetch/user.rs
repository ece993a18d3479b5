// User aggregate fetcher.
// Profile counters plus total stars derived from the repository records.

use crate::error::Result;
use crate::model::{Repository, UserStats};

use super::GitHubData;

impl GitHubData {
    /// Aggregate counters for `username`.
    ///
    /// The profile request and the repository fetch run concurrently; the
    /// latter reuses the repository cache and in-flight dedup. No partial
    /// results: if either fails, the whole operation fails and nothing is
    /// cached.
    pub async fn user_stats(&self, username: &str) -> Result<UserStats> {
        if let Some(stats) = self.state().stats.get_fresh(username, self.ttl) {
            return Ok(stats);
        }

        let (profile, repos) =
            tokio::try_join!(self.client.get_user(username), self.repos(username))?;

        let stats = UserStats {
            public_repos: profile.public_repos,
            followers: profile.followers,
            total_stars: total_stars(&repos),
        };

        self.state().stats.insert(username, stats);
        Ok(stats)
    }
}

/// Sum of star counts across the current repository record set. Recomputed on
/// every aggregate fetch; never carried over from a prior repository list.
fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|repo| repo.stars).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn repo_with_stars(name: &str, stars: u64) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            url: format!("https://github.com/octocat/{}", name),
            topics: Vec::new(),
            stars,
            forks: 0,
            updated_at: Utc::now(),
            language: None,
            homepage: None,
        }
    }

    #[test]
    fn test_total_stars_sums_all_records() {
        let repos = vec![
            repo_with_stars("a", 3),
            repo_with_stars("b", 0),
            repo_with_stars("c", 7),
        ];

        assert_eq!(total_stars(&repos), 10);
    }

    #[test]
    fn test_total_stars_empty_set() {
        assert_eq!(total_stars(&[]), 0);
    }
}
