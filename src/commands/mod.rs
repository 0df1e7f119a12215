//! Slash command registry and shared interaction plumbing.
//!
//! Each command is a unit struct implementing [`RankCommand`]; the gateway
//! handler walks `registry()` once at startup to register everything and
//! again per interaction to dispatch by name. The four track completion
//! commands share one implementation parameterized by track, replacing the
//! legacy per-track command files.

use serenity::all::{
    CommandDataOptionValue, CommandInteraction, Context, CreateCommand, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage, UserId,
};
use serenity::async_trait;

use crate::bot::AppState;
use crate::error::AppError;
use crate::model::category::Track;

pub mod completion;
pub mod quota_update;
pub mod reset_progress;
pub mod status;

/// A registered slash command.
#[async_trait]
pub trait RankCommand: Send + Sync {
    /// Command name as registered with Discord.
    fn name(&self) -> &'static str;

    /// Builds the command definition for guild registration.
    fn register(&self) -> CreateCommand;

    /// Handles an invocation of this command.
    async fn execute(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
        state: &AppState,
    ) -> Result<(), AppError>;
}

/// All commands the bot registers, in registration order.
pub fn registry() -> Vec<Box<dyn RankCommand>> {
    vec![
        Box::new(completion::CompletionCommand::new(Track::MainQuest)),
        Box::new(completion::CompletionCommand::new(Track::SideQuest)),
        Box::new(completion::CompletionCommand::new(Track::Medals)),
        Box::new(completion::CompletionCommand::new(Track::EventVictories)),
        Box::new(status::StatusCommand),
        Box::new(quota_update::QuotaUpdateCommand),
        Box::new(reset_progress::ResetProgressCommand),
    ]
}

/// Sends an ephemeral plain-text reply to an interaction.
pub(crate) async fn respond_ephemeral(
    ctx: &Context,
    interaction: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}

/// Sends an embed reply to an interaction.
pub(crate) async fn respond_embed(
    ctx: &Context,
    interaction: &CommandInteraction,
    embed: CreateEmbed,
    ephemeral: bool,
) -> Result<(), AppError> {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .add_embed(embed)
                    .ephemeral(ephemeral),
            ),
        )
        .await?;
    Ok(())
}

/// Extracts a top-level integer option by name.
pub(crate) fn integer_option(interaction: &CommandInteraction, name: &str) -> Option<i64> {
    interaction.data.options.iter().find_map(|o| {
        if o.name == name {
            match o.value {
                CommandDataOptionValue::Integer(i) => Some(i),
                _ => None,
            }
        } else {
            None
        }
    })
}

/// Extracts a top-level string option by name.
pub(crate) fn string_option<'a>(
    interaction: &'a CommandInteraction,
    name: &str,
) -> Option<&'a str> {
    interaction.data.options.iter().find_map(|o| {
        if o.name == name {
            match &o.value {
                CommandDataOptionValue::String(s) => Some(s.as_str()),
                _ => None,
            }
        } else {
            None
        }
    })
}

/// Extracts a top-level user option by name.
pub(crate) fn user_option(interaction: &CommandInteraction, name: &str) -> Option<UserId> {
    interaction.data.options.iter().find_map(|o| {
        if o.name == name {
            match o.value {
                CommandDataOptionValue::User(id) => Some(id),
                _ => None,
            }
        } else {
            None
        }
    })
}

/// Display name to record against the ledger for the invoking user.
///
/// Prefers the guild nickname over the account name.
pub(crate) fn invoker_display_name(interaction: &CommandInteraction) -> String {
    interaction
        .member
        .as_ref()
        .and_then(|m| m.nick.clone())
        .unwrap_or_else(|| interaction.user.name.clone())
}

/// Whether the invoking member holds the Administrator permission.
///
/// Registration already gates admin commands via default member permissions;
/// this is the server-side check behind it.
pub(crate) fn is_administrator(interaction: &CommandInteraction) -> bool {
    interaction
        .member
        .as_ref()
        .and_then(|m| m.permissions)
        .is_some_and(|p| p.administrator())
}
