// gitfolio: cached GitHub data layer for a portfolio site.
// Fetches repositories, profile stats, language distribution, and README text.

pub mod cache;
pub mod error;
pub mod fetch;
pub mod github;
pub mod model;

pub use error::{GitfolioError, Result};
pub use fetch::GitHubData;
pub use github::GitHubClient;
pub use model::{LanguageStat, Repository, UserStats, relative_age};
