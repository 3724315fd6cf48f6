//! API Routes
//!
//! Configures the Axum router with all slot cache endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_handler, clear_handler, compact_handler, contains_handler, delete_value_handler,
    dump_handler, get_handler, health_handler, occupancy_handler, shift_left_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /slots` - Dump every slot
/// - `DELETE /slots` - Clear the cache
/// - `PUT /slots/:index` - Store a value at a slot
/// - `GET /slots/:index` - Read a slot
/// - `GET /slots/:index/occupied` - Check slot occupancy
/// - `POST /slots/:index/shift-left` - Empty a slot in place
/// - `POST /slots/:index/compact` - Remove a slot and move later slots left
/// - `GET /values/:value` - Check whether a value is stored
/// - `DELETE /values/:value` - Delete the first slot holding a value
/// - `GET /stats` - Lookup statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/slots", get(dump_handler).delete(clear_handler))
        .route("/slots/:index", get(get_handler).put(add_handler))
        .route("/slots/:index/occupied", get(occupancy_handler))
        .route("/slots/:index/shift-left", post(shift_left_handler))
        .route("/slots/:index/compact", post(compact_handler))
        .route(
            "/values/:value",
            get(contains_handler).delete(delete_value_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
