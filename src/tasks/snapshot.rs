//! Snapshot Task
//!
//! Background task that periodically logs a diagnostic dump of the cache.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::SharedCache;

/// Spawns a background task that periodically logs cache occupancy.
///
/// Each run takes the read lock only, so the task never mutates the cache.
/// Occupancy is logged at info level and the full slot dump at debug level.
///
/// # Arguments
/// * `cache` - shared reference to the lock-guarded cache
/// * `interval_secs` - Interval in seconds between snapshots
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let state = AppState::new(IndexedSlotCache::new(10));
/// let handle = spawn_snapshot_task(state.cache.clone(), 60);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_snapshot_task(cache: SharedCache, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting snapshot task with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let cache_guard = cache.read().await;
            info!(
                "Cache snapshot: {}/{} slots occupied",
                cache_guard.occupied_count(),
                cache_guard.capacity()
            );
            debug!("{}", *cache_guard);
        }
    })
}
