//! Request Extractors
//!
//! Path extraction for slot indices.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::CacheError;

/// Slot index taken from the `:index` path segment.
///
/// Parsed as a signed integer so negative input reaches the handler and is
/// treated as out of range instead of failing extraction. Anything that is
/// not an integer is rejected as `CacheError::InvalidRequest`, which renders
/// as a JSON error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotIndex(pub i64);

impl SlotIndex {
    /// Returns the index as a slot position, or None when it is negative.
    pub fn slot(&self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    /// Out-of-range error for this index against the given capacity.
    pub fn out_of_range(&self, capacity: usize) -> CacheError {
        CacheError::IndexOutOfRange {
            index: self.0,
            capacity,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SlotIndex
where
    S: Send + Sync,
{
    type Rejection = CacheError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(index) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CacheError::InvalidRequest(rejection.body_text()))?;

        Ok(Self(index))
    }
}
