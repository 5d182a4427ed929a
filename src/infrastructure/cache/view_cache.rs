use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;

use crate::{entities::profile::Profile, errors::AppError, repositories::view::ViewInvalidator};

/// A rendered profile view and when it was built.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedProfileView {
    pub profile: Profile,
    pub generation: u64,
    pub cached_at: DateTime<Utc>,
}

/// Profile views keyed by view path. Invalidation drops the entry so the
/// next read reloads it.
#[derive(Debug, Default)]
pub struct ProfileViewCache {
    views: DashMap<String, CachedProfileView>,
    generation: AtomicU64,
}

impl ProfileViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of invalidations seen so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn get(&self, view: &str) -> Option<CachedProfileView> {
        self.views.get(view).map(|entry| entry.value().clone())
    }

    /// Returns the cached view, or runs `load` and caches its result.
    pub async fn get_or_load<F, Fut>(&self, view: &str, load: F) -> Result<CachedProfileView, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Profile, AppError>>,
    {
        if let Some(cached) = self.get(view) {
            return Ok(cached);
        }

        let generation = self.generation();
        let profile = load().await?;
        let fresh = CachedProfileView {
            profile,
            generation,
            cached_at: Utc::now(),
        };

        // An invalidation that raced the load wins: serve the result but do not cache it.
        if self.generation() == generation {
            self.views.insert(view.to_string(), fresh.clone());
        }
        tracing::debug!(view, generation, "Profile view loaded");
        Ok(fresh)
    }
}

impl ViewInvalidator for ProfileViewCache {
    fn invalidate(&self, view: &str) -> Result<(), AppError> {
        self.generation.fetch_add(1, Ordering::AcqRel);
        let evicted = self.views.remove(view).is_some();
        tracing::debug!(view, evicted, "Profile view invalidated");
        Ok(())
    }
}
