//! Single-slot catalog cache with a fixed time-to-live.
//!
//! There is one slot and no background refresh. A read past the TTL, or after
//! [`CatalogCache::clear`], recomputes. The slot lock is only held to clone or
//! replace the `Arc`, never across a recompute, so concurrent readers of a
//! stale slot may each recompute and the last store wins.

use crate::merge::Catalog;
use std::future::Future;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default cache lifetime (1 hour)
pub const DEFAULT_TTL_SECS: u64 = 60 * 60;

#[derive(Debug, Clone)]
struct Slot {
    data: Arc<Catalog>,
    computed_at: Instant,
}

#[derive(Debug)]
pub struct CatalogCache {
    slot: RwLock<Option<Slot>>,
    ttl: Duration,
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TTL_SECS))
    }
}

impl CatalogCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn read_slot(&self) -> Option<Slot> {
        match self.slot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn write_slot(&self, value: Option<Slot>) {
        match self.slot.write() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }

    /// When the cached catalog was computed, if any
    pub fn computed_at(&self) -> Option<Instant> {
        self.read_slot().map(|s| s.computed_at)
    }

    /// The cached catalog if it is younger than the TTL
    pub fn get(&self) -> Option<Arc<Catalog>> {
        let slot = self.read_slot()?;
        if slot.computed_at.elapsed() < self.ttl {
            Some(slot.data)
        } else {
            debug!("Catalog cache expired");
            None
        }
    }

    /// Replace the slot with a freshly computed catalog
    pub fn store(&self, catalog: Catalog) -> Arc<Catalog> {
        let data = Arc::new(catalog);
        self.write_slot(Some(Slot {
            data: Arc::clone(&data),
            computed_at: Instant::now(),
        }));
        data
    }

    /// Drop the cached catalog; the next read recomputes
    pub fn clear(&self) {
        self.write_slot(None);
    }

    /// Return the fresh catalog or compute, store and return a new one
    pub async fn get_or_refresh<F, Fut>(&self, compute: F) -> Arc<Catalog>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Catalog>,
    {
        if let Some(data) = self.get() {
            return data;
        }
        let catalog = compute().await;
        self.store(catalog)
    }
}
