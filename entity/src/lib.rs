//! SeaORM entity models for the rankboard schema.

pub mod prelude;

pub mod track_record;
pub mod user_status;
