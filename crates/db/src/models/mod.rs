//! Storage row structs and insert DTOs.
//!
//! Field names follow the storage (snake_case) convention. Each submodule
//! contains:
//! - A `FromRow` + `Serialize` struct matching the table row
//! - A `New*` DTO for inserts (and full-row updates where the table allows them)

pub mod appointment;
pub mod message;
pub mod review;
pub mod service;
