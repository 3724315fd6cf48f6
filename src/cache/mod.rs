//! Cache Module
//!
//! Provides a fixed-capacity cache addressed by explicit slot index.

mod slots;
mod stats;


// Re-export public types
pub use slots::IndexedSlotCache;
pub use stats::CacheStats;
