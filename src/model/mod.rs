//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entities into these models at the
//! infrastructure boundary; services and command handlers never touch entity
//! types directly.

pub mod category;
pub mod progression;
pub mod track_record;
pub mod user_status;
