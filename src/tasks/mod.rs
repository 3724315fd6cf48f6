//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Snapshot: Logs cache occupancy and a slot dump at configured intervals

mod snapshot;

pub use snapshot::spawn_snapshot_task;
