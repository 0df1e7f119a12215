//! The /status command: a user's ladder position and quota progress.
//!
//! Checking status also re-syncs the target's rank role. Role sync at
//! promotion time is best-effort, so a failed add there heals the next time
//! anyone looks the user up.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateEmbedFooter,
};
use serenity::async_trait;

use crate::bot::AppState;
use crate::commands::{respond_embed, user_option, RankCommand};
use crate::error::AppError;
use crate::model::category::{Category, Track, MAX_STAGE};
use crate::model::progression::ProgressionStatus;
use crate::service::{progression::ProgressionService, role_sync};

const EMBED_COLOR_STATUS: u32 = 0x3498db;

pub struct StatusCommand;

#[async_trait]
impl RankCommand for StatusCommand {
    fn name(&self) -> &'static str {
        "status"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Show rank progression and quota progress")
            .dm_permission(false)
            .add_option(CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                "Whose status to show (defaults to you)",
            ))
    }

    async fn execute(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
        state: &AppState,
    ) -> Result<(), AppError> {
        let target = user_option(interaction, "user").unwrap_or(interaction.user.id);
        let target_name = if target == interaction.user.id {
            crate::commands::invoker_display_name(interaction)
        } else {
            match target.to_user(&ctx.http).await {
                Ok(user) => user.name,
                Err(_) => target.to_string(),
            }
        };

        let service = ProgressionService::new(&state.db);
        let snapshot = service.status(target.get(), &target_name).await?;

        if let Some(guild_id) = interaction.guild_id {
            let (category, stage) = if snapshot.status.max_rank {
                (Category::RepublicCommando, MAX_STAGE)
            } else {
                (snapshot.status.category, snapshot.status.stage)
            };
            role_sync::ensure_rank_role(&ctx.http, guild_id, target, category, stage).await;
        }

        let embed = build_status_embed(&target_name, &snapshot);
        respond_embed(ctx, interaction, embed, true).await
    }
}

/// Renders a status snapshot as an embed.
fn build_status_embed(user_name: &str, snapshot: &ProgressionStatus) -> CreateEmbed {
    let position = if snapshot.status.max_rank {
        format!(
            "{} (Stage {}) - **Max Rank**",
            snapshot.status.category.display_name(),
            snapshot.status.stage
        )
    } else {
        format!(
            "{} (Stage {})",
            snapshot.status.category.display_name(),
            snapshot.status.stage
        )
    };

    let mut embed = CreateEmbed::new()
        .title(format!("{} - Progression", user_name))
        .description(position)
        .color(EMBED_COLOR_STATUS);

    for track in Track::ALL {
        let value = match snapshot.records.get(&track) {
            Some(record) => format!(
                "{} pts ({} completion{})",
                record.total_value,
                record.completed_tiers.len(),
                if record.completed_tiers.len() == 1 { "" } else { "s" }
            ),
            None => "0 pts".to_string(),
        };
        embed = embed.field(track.display_name(), value, true);
    }

    let footer = if snapshot.status.max_rank {
        "Nothing left to earn. o7".to_string()
    } else {
        format!(
            "{} / {} points - {} to promotion",
            snapshot.total,
            snapshot.quota,
            snapshot.remaining()
        )
    };

    embed.footer(CreateEmbedFooter::new(footer))
}
