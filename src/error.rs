//! Error types for the slot cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache and its HTTP service.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Slot index outside `0..capacity`; signed so negative request input can be reported
    #[error("Index {index} out of range for capacity {capacity}")]
    IndexOutOfRange { index: i64, capacity: usize },

    /// Slot exists but holds no value
    #[error("Slot {0} is empty")]
    EmptySlot(usize),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::IndexOutOfRange { .. } => StatusCode::BAD_REQUEST,
            CacheError::EmptySlot(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the slot cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = CacheError::IndexOutOfRange {
            index: 11,
            capacity: 10,
        };
        assert_eq!(err.to_string(), "Index 11 out of range for capacity 10");

        let negative = CacheError::IndexOutOfRange {
            index: -1,
            capacity: 10,
        };
        assert_eq!(negative.to_string(), "Index -1 out of range for capacity 10");
    }

    #[test]
    fn test_status_codes() {
        let out_of_range = CacheError::IndexOutOfRange {
            index: 1,
            capacity: 1,
        };
        assert_eq!(out_of_range.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            CacheError::EmptySlot(3).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CacheError::InvalidRequest("bad".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
