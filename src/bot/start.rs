use serenity::all::{
    ActivityData, Client, Context, EventHandler, GatewayIntents, GuildId, Interaction, Ready,
};
use serenity::async_trait;

use crate::bot::AppState;
use crate::commands::{registry, RankCommand};
use crate::config::Config;
use crate::error::AppError;
use crate::service::webhook::LogWebhook;

/// Discord bot event handler
struct Handler {
    state: AppState,
    guild_id: GuildId,
    commands: Vec<Box<dyn RankCommand>>,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::watching("the ranks")));

        let registrations = self.commands.iter().map(|c| c.register()).collect();
        match self.guild_id.set_commands(&ctx.http, registrations).await {
            Ok(commands) => {
                tracing::info!(
                    "Registered {} slash commands in guild {}",
                    commands.len(),
                    self.guild_id
                );
            }
            Err(e) => {
                tracing::error!("Failed to register slash commands: {:?}", e);
            }
        }
    }

    /// Called for every interaction; dispatches slash commands by name
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let Some(handler) = self
            .commands
            .iter()
            .find(|c| c.name() == command.data.name)
        else {
            tracing::warn!("Received unknown command /{}", command.data.name);
            return;
        };

        if let Err(e) = handler.execute(&ctx, &command, &self.state).await {
            tracing::error!("Command /{} failed: {:?}", command.data.name, e);
        }
    }
}

/// Starts the Discord bot in a blocking manner
///
/// This function creates and starts the Discord bot client. It blocks until
/// the bot shuts down.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config, db: sea_orm::DatabaseConnection) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler {
        state: AppState {
            db,
            webhook: LogWebhook::new(config.log_webhook_url.clone()),
        },
        guild_id: GuildId::new(config.discord_guild_id),
        commands: registry(),
    };

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
