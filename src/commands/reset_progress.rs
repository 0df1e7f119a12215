//! The /reset-progress command: admin wipe of one category's accumulation.

use std::str::FromStr;

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};
use serenity::async_trait;

use crate::bot::AppState;
use crate::commands::{
    is_administrator, respond_ephemeral, string_option, user_option, RankCommand,
};
use crate::error::AppError;
use crate::model::category::Category;
use crate::service::progression::ProgressionService;

pub struct ResetProgressCommand;

#[async_trait]
impl RankCommand for ResetProgressCommand {
    fn name(&self) -> &'static str {
        "reset-progress"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Admin: clear a user's accumulated points in one category")
            .dm_permission(false)
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "User to reset")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "category",
                    "Category whose records to clear",
                )
                .required(true)
                .add_string_choice("Clone Trooper", "clone_trooper")
                .add_string_choice("ARF", "arf")
                .add_string_choice("ARC", "arc")
                .add_string_choice("Republic Commando", "republic_commando"),
            )
    }

    async fn execute(
        &self,
        ctx: &Context,
        interaction: &CommandInteraction,
        state: &AppState,
    ) -> Result<(), AppError> {
        if !is_administrator(interaction) {
            return respond_ephemeral(
                ctx,
                interaction,
                "You need the Administrator permission to use this command.",
            )
            .await;
        }

        let (Some(target), Some(category_str)) = (
            user_option(interaction, "user"),
            string_option(interaction, "category"),
        ) else {
            return respond_ephemeral(ctx, interaction, "Missing user or category.").await;
        };

        let category = match Category::from_str(category_str) {
            Ok(category) => category,
            Err(_) => {
                return respond_ephemeral(ctx, interaction, "Unknown category.").await;
            }
        };

        let service = ProgressionService::new(&state.db);
        let removed = service.reset_progress(target.get(), category).await?;

        let target_name = match target.to_user(&ctx.http).await {
            Ok(user) => user.name,
            Err(_) => target.to_string(),
        };

        respond_ephemeral(
            ctx,
            interaction,
            format!(
                "Cleared {} track record(s) for {} in {}.",
                removed,
                target_name,
                category.display_name()
            ),
        )
        .await?;

        let admin_name = crate::commands::invoker_display_name(interaction);
        state
            .webhook
            .log_reset(&ctx.http, &admin_name, &target_name, category, removed)
            .await;

        Ok(())
    }
}
