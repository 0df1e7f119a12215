//! Track completion commands: /main-quest, /side-quest, /medals,
//! /event-victories.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
};
use serenity::async_trait;

use crate::bot::AppState;
use crate::commands::{integer_option, invoker_display_name, respond_ephemeral, RankCommand};
use crate::error::{progression::ProgressionError, AppError};
use crate::model::category::{Category, Track, MAX_STAGE};
use crate::model::progression::{CompleteTierParam, Promotion};
use crate::service::{progression::ProgressionService, role_sync};

/// One completion command, parameterized by the track it credits.
pub struct CompletionCommand {
    track: Track,
}

impl CompletionCommand {
    pub fn new(track: Track) -> Self {
        Self { track }
    }

    fn command_name(track: Track) -> &'static str {
        match track {
            Track::MainQuest => "main-quest",
            Track::SideQuest => "side-quest",
            Track::Medals => "medals",
            Track::EventVictories => "event-victories",
        }
    }
}

#[async_trait]
impl RankCommand for CompletionCommand {
    fn name(&self) -> &'static str {
        Self::command_name(self.track)
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(format!(
                "Record a {} tier completion",
                self.track.display_name()
            ))
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "tier",
                    "Completed tier (1-4)",
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
        let Some(tier) = integer_option(interaction, "tier") else {
            return respond_ephemeral(ctx, interaction, "You must provide a tier (1-4).").await;
        };

        let user_name = invoker_display_name(interaction);
        let service = ProgressionService::new(&state.db);
        let result = service
            .complete_tier(CompleteTierParam {
                user_id: interaction.user.id.get(),
                user_name: user_name.clone(),
                track: self.track,
                tier: tier as i32,
            })
            .await;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => match err.as_progression() {
                Some(ProgressionError::DuplicateCompletion { track, tier }) => {
                    return respond_ephemeral(
                        ctx,
                        interaction,
                        format!(
                            "You have already completed {} tier {} at this rank.",
                            track.display_name(),
                            tier
                        ),
                    )
                    .await;
                }
                Some(ProgressionError::UnknownPointValue { .. }) => {
                    return respond_ephemeral(ctx, interaction, "Tier must be between 1 and 4.")
                        .await;
                }
                _ => {
                    tracing::error!("Failed to record {} completion: {}", self.track, err);
                    return respond_ephemeral(
                        ctx,
                        interaction,
                        "Something went wrong recording your completion. Try again later.",
                    )
                    .await;
                }
            },
        };

        let reply = match &outcome.promotion {
            Some(Promotion::Advanced { category, stage }) => format!(
                "{} tier {} recorded for {} points. You met the {} quota and have been promoted to **{} (Stage {})**!",
                self.track.display_name(),
                outcome.tier,
                outcome.value,
                outcome.category.display_name(),
                category.display_name(),
                stage
            ),
            Some(Promotion::MaxRank) => format!(
                "{} tier {} recorded for {} points. You completed the final {} quota - you have reached **max rank**!",
                self.track.display_name(),
                outcome.tier,
                outcome.value,
                outcome.category.display_name()
            ),
            None => format!(
                "{} tier {} recorded for {} points. {} total: **{}**.",
                self.track.display_name(),
                outcome.tier,
                outcome.value,
                self.track.display_name(),
                outcome.new_total
            ),
        };
        respond_ephemeral(ctx, interaction, reply).await?;

        if outcome.promotion.is_some() {
            let (category, stage) = match outcome.promotion {
                Some(Promotion::Advanced { category, stage }) => (category, stage),
                _ => (Category::RepublicCommando, MAX_STAGE),
            };
            role_sync::ensure_rank_role(&ctx.http, guild_id, interaction.user.id, category, stage)
                .await;
            state
                .webhook
                .log_promotion(&ctx.http, &user_name, &outcome)
                .await;
        }

        Ok(())
    }
}
