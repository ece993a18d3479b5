// Normalized records handed to the presentation layer.
// Wire-format types live in github::types; these are the shapes callers render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One non-fork repository owned by the tracked account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub topics: Vec<String>,
    pub stars: u64,
    pub forks: u64,
    pub updated_at: DateTime<Utc>,
    pub language: Option<String>,
    pub homepage: Option<String>,
}

impl Repository {
    /// Coarse relative age of the last update, e.g. "3 days ago".
    pub fn age_label(&self) -> String {
        relative_age(self.updated_at)
    }
}

/// Summary counters for one account.
///
/// `total_stars` is derived from the repository records, not the profile
/// endpoint, and is recomputed on every aggregate fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub public_repos: u64,
    pub followers: u64,
    pub total_stars: u64,
}

/// One language's share among an account's repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub language: String,
    /// Repositories using this as their primary language.
    pub count: u64,
    /// Rounded share of repositories that declare a language, 0-100.
    pub percentage: u8,
}

/// Human-readable relative age for a timestamp, in day-granularity buckets.
/// Months are 30 days, years are 12 months. Future timestamps read as "today".
pub fn relative_age(timestamp: DateTime<Utc>) -> String {
    relative_age_at(Utc::now(), timestamp)
}

fn relative_age_at(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let days = now.signed_duration_since(then).num_days().max(0);
    if days == 0 {
        return "today".to_string();
    }
    if days == 1 {
        return "1 day ago".to_string();
    }
    if days < 30 {
        return format!("{} days ago", days);
    }
    let months = days / 30;
    if months == 1 {
        return "1 month ago".to_string();
    }
    if months < 12 {
        return format!("{} months ago", months);
    }
    let years = months / 12;
    if years == 1 {
        "1 year ago".to_string()
    } else {
        format!("{} years ago", years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn label_after(days: i64) -> String {
        let now = Utc::now();
        relative_age_at(now, now - Duration::days(days))
    }

    #[test]
    fn test_same_day_is_today() {
        assert_eq!(label_after(0), "today");
    }

    #[test]
    fn test_singular_day() {
        assert_eq!(label_after(1), "1 day ago");
    }

    #[test]
    fn test_days_below_month_boundary() {
        assert_eq!(label_after(29), "29 days ago");
    }

    #[test]
    fn test_month_boundary() {
        assert_eq!(label_after(30), "1 month ago");
        assert_eq!(label_after(59), "1 month ago");
        assert_eq!(label_after(60), "2 months ago");
    }

    #[test]
    fn test_year_boundary() {
        assert_eq!(label_after(365), "1 year ago");
        assert_eq!(label_after(730), "2 years ago");
    }

    #[test]
    fn test_future_timestamp_clamps_to_today() {
        let now = Utc::now();
        assert_eq!(relative_age_at(now, now + Duration::days(3)), "today");
    }
}
