//! API Handlers
//!
//! HTTP request handlers for each slot cache endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::info;

use super::extract::SlotIndex;
use crate::cache::{CacheStats, IndexedSlotCache};
use crate::error::{CacheError, Result};
use crate::models::{
    AddRequest, AddResponse, ClearResponse, ContainsResponse, DeleteResponse, DumpResponse,
    HealthResponse, OccupancyResponse, SlotRemovedResponse, SlotResponse, StatsResponse,
};

/// Slot cache shared between handlers and background tasks.
pub type SharedCache = Arc<RwLock<IndexedSlotCache<String>>>;

/// Application state shared across all handlers.
///
/// The cache itself has no internal synchronization; every access goes
/// through the RwLock. Lock order is always cache first, then stats.
#[derive(Clone)]
pub struct AppState {
    /// Lock-guarded slot cache
    pub cache: SharedCache,
    /// Lookup statistics
    pub stats: Arc<RwLock<CacheStats>>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: IndexedSlotCache<String>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            stats: Arc::new(RwLock::new(CacheStats::new())),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(IndexedSlotCache::new(config.capacity))
    }
}

/// Handler for PUT /slots/:index
///
/// Stores a value at the given slot, overwriting any occupant.
pub async fn add_handler(
    State(state): State<AppState>,
    index: SlotIndex,
    payload: std::result::Result<Json<AddRequest>, JsonRejection>,
) -> Result<Json<AddResponse>> {
    let Json(req) =
        payload.map_err(|rejection| CacheError::InvalidRequest(rejection.body_text()))?;
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    let slot = index
        .slot()
        .ok_or_else(|| index.out_of_range(cache.capacity()))?;
    let replaced = cache.add(req.value, slot)?;

    Ok(Json(AddResponse::new(slot, replaced)))
}

/// Handler for GET /slots/:index
///
/// Returns the value at the slot and records the lookup in the stats.
pub async fn get_handler(
    State(state): State<AppState>,
    index: SlotIndex,
) -> Result<Json<SlotResponse>> {
    let cache = state.cache.read().await;
    let lookup = match index.slot() {
        Some(slot) => cache.get(slot).map(|value| (slot, value.cloned())),
        None => Err(index.out_of_range(cache.capacity())),
    };

    let mut stats = state.stats.write().await;
    match lookup {
        Ok((slot, Some(value))) => {
            stats.record_hit();
            Ok(Json(SlotResponse::new(slot, value)))
        }
        Ok((slot, None)) => {
            stats.record_miss();
            Err(CacheError::EmptySlot(slot))
        }
        Err(err) => {
            stats.record_out_of_range();
            Err(err)
        }
    }
}

/// Handler for GET /slots/:index/occupied
///
/// Out-of-range indices, negative ones included, report as not occupied.
pub async fn occupancy_handler(
    State(state): State<AppState>,
    index: SlotIndex,
) -> Json<OccupancyResponse> {
    let cache = state.cache.read().await;
    let occupied = index
        .slot()
        .is_some_and(|slot| cache.is_slot_occupied(slot));

    Json(OccupancyResponse {
        index: index.0,
        occupied,
    })
}

/// Handler for POST /slots/:index/shift-left
///
/// Empties the slot without moving any other slot.
pub async fn shift_left_handler(
    State(state): State<AppState>,
    index: SlotIndex,
) -> Json<SlotRemovedResponse> {
    let mut cache = state.cache.write().await;
    let removed = index
        .slot()
        .and_then(|slot| cache.shift_elements_left(slot));

    Json(SlotRemovedResponse::new("cleared", index.0, removed))
}

/// Handler for POST /slots/:index/compact
///
/// Removes the slot's value and moves every later slot one position left.
pub async fn compact_handler(
    State(state): State<AppState>,
    index: SlotIndex,
) -> Json<SlotRemovedResponse> {
    let mut cache = state.cache.write().await;
    let removed = index.slot().and_then(|slot| cache.compact_left(slot));

    Json(SlotRemovedResponse::new("compacted", index.0, removed))
}

/// Handler for GET /values/:value
pub async fn contains_handler(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Json<ContainsResponse> {
    let cache = state.cache.read().await;
    let index = cache.position_of(&value);

    Json(ContainsResponse::new(value, index))
}

/// Handler for DELETE /values/:value
///
/// Clears the lowest slot holding the value. A missing value is not an error.
pub async fn delete_value_handler(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Json<DeleteResponse> {
    let mut cache = state.cache.write().await;
    let index = cache.delete(&value);

    Json(DeleteResponse::new(value, index))
}

/// Handler for DELETE /slots
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    cache.clear();
    info!("Cache cleared, {} slots empty", cache.capacity());

    Json(ClearResponse::new(cache.capacity()))
}

/// Handler for GET /slots
pub async fn dump_handler(State(state): State<AppState>) -> Json<DumpResponse> {
    let cache = state.cache.read().await;

    Json(DumpResponse::from(&*cache))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = state.stats.read().await;

    Json(StatsResponse::new(&*stats, &*cache))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(IndexedSlotCache::new(10))
    }

    async fn try_add(state: &AppState, index: i64, value: &str) -> Result<Json<AddResponse>> {
        let req = AddRequest {
            value: value.to_string(),
        };
        add_handler(State(state.clone()), SlotIndex(index), Ok(Json(req))).await
    }

    async fn add(state: &AppState, index: i64, value: &str) {
        let response = try_add(state, index, value).await.unwrap();
        assert_eq!(response.index as i64, index);
    }

    #[tokio::test]
    async fn test_add_and_get_handler() {
        let state = test_state();

        let result = try_add(&state, 0, "test_value").await;
        assert!(result.is_ok());

        let response = get_handler(State(state.clone()), SlotIndex(0))
            .await
            .unwrap();
        assert_eq!(response.value, "test_value");
        assert_eq!(response.index, 0);
    }

    #[tokio::test]
    async fn test_add_out_of_range() {
        let state = test_state();

        let result = try_add(&state, 10, "value").await;
        assert!(matches!(
            result,
            Err(CacheError::IndexOutOfRange { index: 10, capacity: 10 })
        ));
    }

    #[tokio::test]
    async fn test_add_negative_index() {
        let state = test_state();

        let result = try_add(&state, -1, "value").await;
        assert!(matches!(
            result,
            Err(CacheError::IndexOutOfRange { index: -1, capacity: 10 })
        ));
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_invalid_request() {
        let state = test_state();

        let result = try_add(&state, 0, "").await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_records_stats() {
        let state = test_state();
        add(&state, 1, "v").await;

        let _ = get_handler(State(state.clone()), SlotIndex(1)).await;
        let empty = get_handler(State(state.clone()), SlotIndex(2)).await;
        let outside = get_handler(State(state.clone()), SlotIndex(11)).await;
        let negative = get_handler(State(state.clone()), SlotIndex(-1)).await;

        assert!(matches!(empty, Err(CacheError::EmptySlot(2))));
        assert!(matches!(outside, Err(CacheError::IndexOutOfRange { .. })));
        assert!(matches!(
            negative,
            Err(CacheError::IndexOutOfRange { index: -1, .. })
        ));

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.out_of_range, 2);
        assert_eq!(response.occupied_slots, 1);
        assert_eq!(response.capacity, 10);
    }

    #[tokio::test]
    async fn test_delete_value_handler() {
        let state = test_state();
        add(&state, 0, "1").await;
        add(&state, 1, "2").await;
        add(&state, 2, "3").await;

        let response = delete_value_handler(State(state.clone()), Path("3".to_string())).await;
        assert_eq!(response.index, Some(2));

        let response = get_handler(State(state.clone()), SlotIndex(1))
            .await
            .unwrap();
        assert_eq!(response.value, "2");

        let missing = delete_value_handler(State(state), Path("3".to_string())).await;
        assert_eq!(missing.index, None);
    }

    #[tokio::test]
    async fn test_shift_left_and_contains() {
        let state = test_state();
        add(&state, 0, "a").await;
        add(&state, 1, "b").await;
        add(&state, 2, "c").await;

        let response = shift_left_handler(State(state.clone()), SlotIndex(1)).await;
        assert_eq!(response.removed.as_deref(), Some("b"));

        let b = contains_handler(State(state.clone()), Path("b".to_string())).await;
        let c = contains_handler(State(state.clone()), Path("c".to_string())).await;
        assert!(!b.present);
        assert!(c.present);
        assert_eq!(c.index, Some(2));
    }

    #[tokio::test]
    async fn test_negative_index_is_noop_for_total_operations() {
        let state = test_state();
        add(&state, 0, "a").await;
        let before = state.cache.read().await.clone();

        let occupied = occupancy_handler(State(state.clone()), SlotIndex(-1)).await;
        assert!(!occupied.occupied);
        assert_eq!(occupied.index, -1);

        let shifted = shift_left_handler(State(state.clone()), SlotIndex(-1)).await;
        assert_eq!(shifted.removed, None);

        let compacted = compact_handler(State(state.clone()), SlotIndex(-1)).await;
        assert_eq!(compacted.removed, None);

        assert_eq!(*state.cache.read().await, before);
    }

    #[tokio::test]
    async fn test_compact_handler() {
        let state = test_state();
        add(&state, 0, "a").await;
        add(&state, 1, "b").await;

        let response = compact_handler(State(state.clone()), SlotIndex(0)).await;
        assert_eq!(response.removed.as_deref(), Some("a"));

        let dump = dump_handler(State(state)).await;
        assert_eq!(dump.slots[0].as_deref(), Some("b"));
        assert_eq!(dump.occupied, 1);
    }

    #[tokio::test]
    async fn test_clear_and_occupancy() {
        let state = test_state();
        add(&state, 0, "a").await;

        let occupied = occupancy_handler(State(state.clone()), SlotIndex(0)).await;
        assert!(occupied.occupied);

        let response = clear_handler(State(state.clone())).await;
        assert_eq!(response.capacity, 10);

        let occupied = occupancy_handler(State(state), SlotIndex(0)).await;
        assert!(!occupied.occupied);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
