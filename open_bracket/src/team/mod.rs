//! Team registration and records.

pub mod models;
pub mod registry;

pub use models::Team;
pub use registry::{RegisterError, Registration, TeamRegistry};
