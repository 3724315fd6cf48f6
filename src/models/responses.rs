//! Response DTOs for the slot cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, IndexedSlotCache};

/// Response body for a slot lookup (GET /slots/:index)
#[derive(Debug, Clone, Serialize)]
pub struct SlotResponse {
    /// The requested slot
    pub index: usize,
    /// The stored value
    pub value: String,
}

impl SlotResponse {
    /// Creates a new SlotResponse
    pub fn new(index: usize, value: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }
}

/// Response body for the add operation (PUT /slots/:index)
#[derive(Debug, Clone, Serialize)]
pub struct AddResponse {
    /// Success message
    pub message: String,
    /// The slot that was written
    pub index: usize,
    /// Previous occupant overwritten by this add
    pub replaced: Option<String>,
}

impl AddResponse {
    /// Creates a new AddResponse
    pub fn new(index: usize, replaced: Option<String>) -> Self {
        Self {
            message: format!("Slot {} set successfully", index),
            index,
            replaced,
        }
    }
}

/// Response body for a slot occupancy check (GET /slots/:index/occupied)
#[derive(Debug, Clone, Serialize)]
pub struct OccupancyResponse {
    pub index: i64,
    pub occupied: bool,
}

/// Response body for a value lookup (GET /values/:value)
#[derive(Debug, Clone, Serialize)]
pub struct ContainsResponse {
    /// The value searched for
    pub value: String,
    /// Whether any slot holds an equal value
    pub present: bool,
    /// Lowest slot holding the value
    pub index: Option<usize>,
}

impl ContainsResponse {
    /// Creates a new ContainsResponse from the lowest matching slot
    pub fn new(value: impl Into<String>, index: Option<usize>) -> Self {
        Self {
            value: value.into(),
            present: index.is_some(),
            index,
        }
    }
}

/// Response body for deleting by value (DELETE /values/:value)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Outcome message
    pub message: String,
    /// The value that was searched for
    pub value: String,
    /// The slot that was cleared, None when nothing matched
    pub index: Option<usize>,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(value: impl Into<String>, index: Option<usize>) -> Self {
        let value = value.into();
        let message = match index {
            Some(index) => format!("Value '{}' deleted from slot {}", value, index),
            None => format!("Value '{}' not present, nothing deleted", value),
        };
        Self {
            message,
            value,
            index,
        }
    }
}

/// Response body for shift-left and compact operations
#[derive(Debug, Clone, Serialize)]
pub struct SlotRemovedResponse {
    /// Outcome message
    pub message: String,
    /// The targeted slot, echoed as requested
    pub index: i64,
    /// Value removed from the slot, if it was occupied
    pub removed: Option<String>,
}

impl SlotRemovedResponse {
    /// Creates a new SlotRemovedResponse; `action` names the operation
    pub fn new(action: &str, index: i64, removed: Option<String>) -> Self {
        Self {
            message: format!("Slot {} {}", index, action),
            index,
            removed,
        }
    }
}

/// Response body for clearing the cache (DELETE /slots)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    pub capacity: usize,
}

impl ClearResponse {
    pub fn new(capacity: usize) -> Self {
        Self {
            message: format!("All {} slots cleared", capacity),
            capacity,
        }
    }
}

/// Response body for the full slot dump (GET /slots)
#[derive(Debug, Clone, Serialize)]
pub struct DumpResponse {
    /// Fixed slot capacity
    pub capacity: usize,
    /// Number of occupied slots
    pub occupied: usize,
    /// Every slot in index order, null when empty
    pub slots: Vec<Option<String>>,
}

impl From<&IndexedSlotCache<String>> for DumpResponse {
    fn from(cache: &IndexedSlotCache<String>) -> Self {
        Self {
            capacity: cache.capacity(),
            occupied: cache.occupied_count(),
            slots: cache.slots().to_vec(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Lookups that found a value
    pub hits: u64,
    /// Lookups on empty slots
    pub misses: u64,
    /// Lookups rejected as out of range
    pub out_of_range: u64,
    /// Current number of occupied slots
    pub occupied_slots: usize,
    /// Fixed slot capacity
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Combines lookup counters with the cache's current occupancy
    pub fn new<T>(stats: &CacheStats, cache: &IndexedSlotCache<T>) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            out_of_range: stats.out_of_range,
            occupied_slots: cache.occupied_count(),
            capacity: cache.capacity(),
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
