//! The /quotaupdate command: admin override of a user's ladder position.

use std::str::FromStr;

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};
use serenity::async_trait;

use crate::bot::AppState;
use crate::commands::{
    integer_option, is_administrator, respond_ephemeral, string_option, user_option, RankCommand,
};
use crate::error::AppError;
use crate::model::category::Category;
use crate::model::progression::OverrideStatusParam;
use crate::service::{progression::ProgressionService, role_sync};

pub struct QuotaUpdateCommand;

#[async_trait]
impl RankCommand for QuotaUpdateCommand {
    fn name(&self) -> &'static str {
        "quotaupdate"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Admin: set a user's rank category and stage directly")
            .dm_permission(false)
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "User to reposition")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "category",
                    "Rank category to place the user in",
                )
                .required(true)
                .add_string_choice("Clone Trooper", "clone_trooper")
                .add_string_choice("ARF", "arf")
                .add_string_choice("ARC", "arc")
                .add_string_choice("Republic Commando", "republic_commando"),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "stage",
                    "Promotion stage (1-4)",
                )
                .min_int_value(1)
                .max_int_value(4)
                .required(true),
            )
    }

    async fn execute(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
        state: &AppState,
    ) -> Result<(), AppError> {
        let Some(guild_id) = interaction.guild_id else {
            return respond_ephemeral(ctx, interaction, "This command only works in a server.")
                .await;
        };
        if !is_administrator(interaction) {
            return respond_ephemeral(
                ctx,
                interaction,
                "You need the Administrator permission to use this command.",
            )
            .await;
        }

        let (Some(target), Some(category_str), Some(stage)) = (
            user_option(interaction, "user"),
            string_option(interaction, "category"),
            integer_option(interaction, "stage"),
        ) else {
            return respond_ephemeral(ctx, interaction, "Missing user, category, or stage.").await;
        };

        let category = match Category::from_str(category_str) {
            Ok(category) => category,
            Err(_) => {
                return respond_ephemeral(ctx, interaction, "Unknown category.").await;
            }
        };

        let target_name = match target.to_user(&ctx.http).await {
            Ok(user) => user.name,
            Err(_) => target.to_string(),
        };

        let service = ProgressionService::new(&state.db);
        let status = service
            .override_status(OverrideStatusParam {
                user_id: target.get(),
                user_name: target_name.clone(),
                category,
                stage: stage as i32,
            })
            .await?;

        respond_ephemeral(
            ctx,
            interaction,
            format!(
                "Set {} to {} (Stage {}).",
                target_name,
                status.category.display_name(),
                status.stage
            ),
        )
        .await?;

        role_sync::ensure_rank_role(&ctx.http, guild_id, target, status.category, status.stage)
            .await;

        let admin_name = crate::commands::invoker_display_name(interaction);
        state
            .webhook
            .log_override(&ctx.http, &admin_name, &status)
            .await;

        Ok(())
    }
}
