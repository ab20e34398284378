//! Domain types and pure business logic for the Mucize cleaning-services site.
//!
//! Nothing in this crate performs I/O. The store contract lives in
//! `mucize-db` and the synchronization layer in `mucize-sync`.

pub mod booking;
pub mod dashboard;
pub mod entities;
pub mod error;
pub mod icon;
pub mod review;
pub mod stats;
pub mod status;
pub mod types;
pub mod validation;
