//! Request extractors that gate access.
//!
//! - [`admin::RequireAdmin`] -- Requires the shared admin secret.
//! - [`loaded::RequireLoaded`] -- Requires the initial data load to have resolved.

pub mod admin;
pub mod loaded;
