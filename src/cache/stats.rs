//! Cache Statistics Module
//!
//! Tracks slot lookups served by the embedding service.

use serde::Serialize;

// == Cache Stats ==
/// Lookup counters for an indexed slot cache.
///
/// Occupancy is not tracked here; it is read from the cache itself when a
/// stats response is built.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups that found an occupied slot
    pub hits: u64,
    /// Lookups that landed on an empty slot
    pub misses: u64,
    /// Lookups rejected because the index was out of range
    pub out_of_range: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the hit rate over in-range lookups.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Out Of Range ==
    pub fn record_out_of_range(&mut self) {
        self.out_of_range += 1;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.out_of_range, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_out_of_range_excluded_from_hit_rate() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_out_of_range();
        stats.record_out_of_range();
        assert_eq!(stats.out_of_range, 2);
        assert_eq!(stats.hit_rate(), 1.0);
    }
}
