//! Slot Cache - a fixed-capacity, index-addressable cache
//!
//! Values live at caller-chosen slots and can be looked up by slot or by
//! value equality. An axum service embeds one cache behind a lock.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::IndexedSlotCache;
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_snapshot_task;
