// In-flight fetch registry for request deduplication.
// Concurrent requesters for the same key share one pending fetch future.

use std::collections::HashMap;

use futures::future::{BoxFuture, Shared};

use crate::error::Result;

/// A pending fetch that can be awaited by any number of callers.
/// The underlying future runs once; every awaiter observes its result.
pub type SharedFetch<T> = Shared<BoxFuture<'static, Result<T>>>;

/// Pending fetches keyed by request identity (here: username).
///
/// The entry must be registered in the same locked section as the cache
/// check, and removed when the fetch settles so a later call can retry.
pub struct Inflight<T> {
    pending: HashMap<String, SharedFetch<T>>,
}

impl<T: Clone> Inflight<T> {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    /// A clone of the pending fetch for `key`, if one is registered.
    pub fn get(&self, key: &str) -> Option<SharedFetch<T>> {
        self.pending.get(key).cloned()
    }

    pub fn insert(&mut self, key: impl Into<String>, fetch: SharedFetch<T>) {
        self.pending.insert(key.into(), fetch);
    }

    pub fn remove(&mut self, key: &str) {
        self.pending.remove(key);
    }
}

impl<T: Clone> Default for Inflight<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_shared_fetch_runs_once_for_all_awaiters() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&runs);

        let mut inflight: Inflight<u64> = Inflight::new();
        let fetch: SharedFetch<u64> = async move {
            counted.fetch_add(1, Ordering::SeqCst);
            Ok(42)
        }
        .boxed()
        .shared();
        inflight.insert("octocat", fetch.clone());

        let joined = inflight.get("octocat").expect("registered fetch");
        let (a, b) = tokio::join!(fetch, joined);

        assert_eq!(a, Ok(42));
        assert_eq!(b, Ok(42));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_removed_entry_is_gone() {
        let mut inflight: Inflight<u64> = Inflight::new();
        inflight.insert("octocat", async { Ok(1) }.boxed().shared());
        inflight.remove("octocat");

        assert!(inflight.get("octocat").is_none());
    }
}
