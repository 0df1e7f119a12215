use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Stored Discord IDs are VARCHAR columns; a row that fails to parse back
    /// into a u64 indicates corrupted data or a bug in the write path.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// An upserted row could not be read back.
    ///
    /// The repository writes a row and immediately re-reads it to return the
    /// persisted state; the row being absent afterwards is a bug.
    #[error("Row missing immediately after upsert into {table}")]
    MissingAfterUpsert {
        /// Table the upsert targeted
        table: &'static str,
    },
}
