//! Audit webhook for ledger events.
//!
//! Promotions, admin overrides, and resets are mirrored to a Discord webhook
//! channel so staff can audit rank movement without database access. The
//! webhook is optional - when no URL is configured every send is a no-op -
//! and delivery is fire-and-forget: a failed post is logged and dropped,
//! never surfaced to the user who triggered it.

use serenity::all::{CreateEmbed, ExecuteWebhook, Webhook};
use serenity::http::Http;

use crate::model::{
    category::Category,
    progression::{CompletionOutcome, Promotion},
    user_status::UserStatus,
};

const EMBED_COLOR_PROMOTION: u32 = 0x2ecc71;
const EMBED_COLOR_ADMIN: u32 = 0xe67e22;

/// Audit log sink backed by an optional Discord webhook URL.
pub struct LogWebhook {
    url: Option<String>,
}

impl LogWebhook {
    /// Creates a new LogWebhook instance.
    ///
    /// # Arguments
    /// - `url` - Webhook URL, or None to disable audit logging
    pub fn new(url: Option<String>) -> Self {
        Self { url }
    }

    /// Posts a promotion notice for a completed quota.
    pub async fn log_promotion(&self, http: &Http, user_name: &str, outcome: &CompletionOutcome) {
        let Some(promotion) = &outcome.promotion else {
            return;
        };

        let description = match promotion {
            Promotion::Advanced { category, stage } => format!(
                "**{}** completed the {} quota and advanced to **{} (Stage {})**.",
                user_name,
                outcome.category.display_name(),
                category.display_name(),
                stage
            ),
            Promotion::MaxRank => format!(
                "**{}** completed the final {} quota and reached max rank.",
                user_name,
                outcome.category.display_name()
            ),
        };

        let embed = CreateEmbed::new()
            .title("Rank Promotion")
            .description(description)
            .color(EMBED_COLOR_PROMOTION);

        self.send(http, embed).await;
    }

    /// Posts an admin override notice.
    pub async fn log_override(&self, http: &Http, admin_name: &str, status: &UserStatus) {
        let embed = CreateEmbed::new()
            .title("Rank Override")
            .description(format!(
                "**{}** set **{}** to **{} (Stage {})**.",
                admin_name,
                status.user_name,
                status.category.display_name(),
                status.stage
            ))
            .color(EMBED_COLOR_ADMIN);

        self.send(http, embed).await;
    }

    /// Posts a progress reset notice.
    pub async fn log_reset(
        &self,
        http: &Http,
        admin_name: &str,
        user_name: &str,
        category: Category,
        removed: u64,
    ) {
        let embed = CreateEmbed::new()
            .title("Progress Reset")
            .description(format!(
                "**{}** cleared {} track record(s) for **{}** in **{}**.",
                admin_name,
                removed,
                user_name,
                category.display_name()
            ))
            .color(EMBED_COLOR_ADMIN);

        self.send(http, embed).await;
    }

    /// Delivers an embed to the configured webhook, if any.
    ///
    /// Failures are logged and swallowed.
    async fn send(&self, http: &Http, embed: CreateEmbed) {
        let Some(url) = &self.url else {
            return;
        };

        let webhook = match Webhook::from_url(http, url).await {
            Ok(webhook) => webhook,
            Err(e) => {
                tracing::error!("Failed to resolve audit webhook: {}", e);
                return;
            }
        };

        let builder = ExecuteWebhook::new().embed(embed);
        if let Err(e) = webhook.execute(http, false, builder).await {
            tracing::error!("Failed to deliver audit webhook message: {}", e);
        }
    }
}
