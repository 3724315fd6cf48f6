//! API Module
//!
//! HTTP handlers and routing for the service embedding the slot cache.
//!
//! # Endpoints
//! - `GET|DELETE /slots` - Dump or clear all slots
//! - `GET|PUT /slots/:index` - Read or write a slot
//! - `GET /slots/:index/occupied` - Slot occupancy
//! - `POST /slots/:index/shift-left` - Empty a slot in place
//! - `POST /slots/:index/compact` - Remove a slot and compact
//! - `GET|DELETE /values/:value` - Lookup or delete by value
//! - `GET /stats` - Lookup statistics
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::SlotIndex;
pub use handlers::*;
pub use routes::create_router;
