pub mod points;
pub mod progression;
pub mod role_sync;
pub mod webhook;
