//! Discord bot integration for the progression ledger.
//!
//! The bot registers its slash commands against a single configured guild on
//! startup and dispatches command interactions to the registry. All state the
//! command handlers need - the database connection and the audit webhook -
//! lives in [`AppState`] on the event handler.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and interaction events
//! - `GUILD_MEMBERS` - Fetch members for rank role sync (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

use sea_orm::DatabaseConnection;

use crate::service::webhook::LogWebhook;

pub mod start;

/// Shared state handed to every command execution.
pub struct AppState {
    pub db: DatabaseConnection,
    pub webhook: LogWebhook,
}
