//! Application error types.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors. The
//! core services only ever return structured errors; user-visible messaging is
//! owned entirely by the command layer.

pub mod config;
pub mod internal;
pub mod progression;

use thiserror::Error;

use crate::error::{
    config::ConfigError, internal::InternalError, progression::ProgressionError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion. Store failures
/// (`DbErr`) surface directly to the caller and are never retried; the command
/// layer reports them to the end user as a generic failure.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Progression ledger error (bad tier, duplicate completion, etc.).
    #[error(transparent)]
    ProgressionErr(#[from] ProgressionError),

    /// Internal invariant violation indicating a bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// JSON (de)serialization error for a `completed_tiers` payload.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Returns the progression error inside this error, if that is what it is.
    ///
    /// The command layer uses this to distinguish user-facing ledger outcomes
    /// (duplicate completion) from infrastructure failures.
    pub fn as_progression(&self) -> Option<&ProgressionError> {
        match self {
            AppError::ProgressionErr(err) => Some(err),
            _ => None,
        }
    }
}
