// Cached fetch layer over the GitHub REST API.
// One instance owns all cache state; callers share it by reference.

pub mod languages;
pub mod readme;
pub mod repos;
pub mod user;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::cache::{DEFAULT_TTL, Inflight, TtlCache};
use crate::error::Result;
use crate::github::GitHubClient;
use crate::model::{LanguageStat, Repository, UserStats};

/// All mutable state behind one lock. The lock is never held across an
/// await, so the cache check and in-flight registration stay atomic.
pub(crate) struct State {
    pub(crate) repos: TtlCache<Vec<Repository>>,
    pub(crate) stats: TtlCache<UserStats>,
    pub(crate) languages: TtlCache<Vec<LanguageStat>>,
    pub(crate) readmes: TtlCache<String>,
    pub(crate) pending_repos: Inflight<Vec<Repository>>,
}

impl State {
    fn new() -> Self {
        Self {
            repos: TtlCache::new(),
            stats: TtlCache::new(),
            languages: TtlCache::new(),
            readmes: TtlCache::new(),
            pending_repos: Inflight::new(),
        }
    }
}

/// Cached, deduplicating GitHub data source.
///
/// Construct one per process (or per request scope in a server) and share it;
/// every operation takes `&self`.
pub struct GitHubData {
    pub(crate) client: GitHubClient,
    pub(crate) ttl: Duration,
    pub(crate) state: Arc<Mutex<State>>,
}

impl GitHubData {
    /// Data source backed by the public GitHub API.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(GitHubClient::new()?))
    }

    /// Data source backed by a specific client.
    pub fn with_client(client: GitHubClient) -> Self {
        Self {
            client,
            ttl: DEFAULT_TTL,
            state: Arc::new(Mutex::new(State::new())),
        }
    }

    /// Override the cache TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
