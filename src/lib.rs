//! Internship placement tracker.
//!
//! Students browse and apply to postings, company reps create and vet
//! them, and staff approve accounts and postings and arbitrate
//! withdrawals. All state is held in memory and exchanged with disk as
//! CSV snapshots.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
