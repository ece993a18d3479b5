// Language distribution deriver.
// A histogram over primary languages, computed purely from cached repo metadata.

use std::collections::BTreeMap;

use tracing::warn;

use crate::model::{LanguageStat, Repository};

use super::GitHubData;

/// Entries kept after sorting descending by count.
const TOP_LANGUAGES: usize = 5;

impl GitHubData {
    /// Language distribution for `username`, at most five entries.
    ///
    /// Issues zero requests beyond what the repository fetch already needs.
    /// Never fails outward: a failed fetch or an account with no declared
    /// languages yields an empty list, and empty results are not cached.
    pub async fn language_stats(&self, username: &str) -> Vec<LanguageStat> {
        if let Some(stats) = self.state().languages.get_fresh(username, self.ttl) {
            return stats;
        }

        let repos = match self.repos(username).await {
            Ok(repos) => repos,
            Err(err) => {
                warn!(username, %err, "language stats degraded to empty list");
                return Vec::new();
            }
        };

        let stats = distribution(&repos);
        if !stats.is_empty() {
            self.state().languages.insert(username, stats.clone());
        }
        stats
    }
}

/// Tally repositories by primary language. Repositories without one are
/// excluded from both numerator and denominator; percentages are rounded
/// independently and need not sum to 100. Ties sort alphabetically.
fn distribution(repos: &[Repository]) -> Vec<LanguageStat> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for repo in repos {
        if let Some(language) = repo.language.as_deref() {
            *counts.entry(language).or_insert(0) += 1;
        }
    }

    let total: u64 = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut stats: Vec<LanguageStat> = counts
        .into_iter()
        .map(|(language, count)| LanguageStat {
            language: language.to_string(),
            count,
            percentage: ((count as f64 / total as f64) * 100.0).round() as u8,
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats.truncate(TOP_LANGUAGES);
    stats
}
