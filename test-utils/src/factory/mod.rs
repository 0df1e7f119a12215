//! Entity factories for creating test data.
//!
//! Factories insert entity rows with sensible defaults that can be overridden
//! through a builder pattern, reducing boilerplate in repository and service
//! tests.

pub mod helpers;
pub mod track_record;
pub mod user_status;
