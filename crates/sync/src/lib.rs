//! Data Synchronization Layer.
//!
//! [`DataContext`] owns the in-memory copies of services, appointments,
//! messages and reviews, mediates every read and write against a
//! [`DataStore`](mucize_db::DataStore), and derives statistics on demand.
//! Create one per process and share it behind an `Arc`.

pub mod context;
pub mod error;
pub mod mapping;

pub use context::{Collections, DataContext, ReviewOutcome, Snapshot, SyncOptions};
pub use error::SyncError;
