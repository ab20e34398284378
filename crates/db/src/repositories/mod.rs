//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod appointment_repo;
pub mod message_repo;
pub mod review_repo;
pub mod service_repo;

pub use appointment_repo::AppointmentRepo;
pub use message_repo::MessageRepo;
pub use review_repo::ReviewRepo;
pub use service_repo::ServiceRepo;
