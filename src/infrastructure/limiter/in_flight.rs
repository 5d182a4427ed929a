use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::{mapref::entry::Entry, DashMap};

/// Profile keys with a submission currently running.
///
/// At most one submission per key runs at a time; a second one is turned
/// away instead of racing the first against the repository.
#[derive(Clone, Default)]
pub struct InFlightSubmissions {
    active: Arc<DashMap<String, Instant>>,
}

impl InFlightSubmissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `key`, or returns `None` if another submission holds it.
    pub fn try_acquire(&self, key: &str) -> Option<InFlightPermit> {
        match self.active.entry(key.to_string()) {
            Entry::Occupied(entry) => {
                tracing::warn!(
                    profile_key = key,
                    running_for = ?entry.get().elapsed(),
                    "Rejecting overlapping profile submission"
                );
                None
            }
            Entry::Vacant(entry) => {
                entry.insert(Instant::now());
                Some(InFlightPermit {
                    key: key.to_string(),
                    active: self.active.clone(),
                })
            }
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Releases its key when dropped.
pub struct InFlightPermit {
    key: String,
    active: Arc<DashMap<String, Instant>>,
}

impl InFlightPermit {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        if let Some((_, started)) = self.active.remove(&self.key) {
            let held: Duration = started.elapsed();
            tracing::debug!(profile_key = %self.key, ?held, "Released profile submission slot");
        }
    }
}
