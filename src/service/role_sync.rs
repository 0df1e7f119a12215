//! Guild role synchronization for rank changes.
//!
//! Every (category, stage) rung maps to a guild role. After a promotion or
//! an admin override the command layer asks this service to line the
//! member's roles up with their ledger position. Role assignment is
//! best-effort: Discord failures are logged and swallowed, never propagated,
//! so the ledger stays authoritative and the roles eventually catch up on
//! the next sync.

use serenity::all::{GuildId, RoleId, UserId};
use serenity::http::Http;

use crate::model::category::Category;

/// Guild role IDs for each ladder rung, in (category, stage) order.
///
/// Stage runs 1..=4 within each category block.
const RANK_ROLES: [(Category, i32, u64); 16] = [
    (Category::CloneTrooper, 1, 1263921728716013710),
    (Category::CloneTrooper, 2, 1263921842096246854),
    (Category::CloneTrooper, 3, 1263921879842951238),
    (Category::CloneTrooper, 4, 1263921923432075405),
    (Category::Arf, 1, 1263922003241406535),
    (Category::Arf, 2, 1263922041120555098),
    (Category::Arf, 3, 1263922083345793124),
    (Category::Arf, 4, 1263922125808013381),
    (Category::Arc, 1, 1263922171924146319),
    (Category::Arc, 2, 1263922210482753620),
    (Category::Arc, 3, 1263922252887490631),
    (Category::Arc, 4, 1263922297456629852),
    (Category::RepublicCommando, 1, 1263922340783849544),
    (Category::RepublicCommando, 2, 1263922386883576749),
    (Category::RepublicCommando, 3, 1263922428667420704),
    (Category::RepublicCommando, 4, 1263922471816204359),
];

/// Looks up the guild role for a ladder rung.
///
/// # Returns
/// - `Some(RoleId)` - Mapped role for the (category, stage) pair
/// - `None` - Stage outside the tabulated range
pub fn role_for(category: Category, stage: i32) -> Option<RoleId> {
    RANK_ROLES
        .iter()
        .find(|(c, s, _)| *c == category && *s == stage)
        .map(|(_, _, id)| RoleId::new(*id))
}

/// Lines a member's rank roles up with their ledger position.
///
/// Adds the role mapped to (category, stage) if the member lacks it and
/// removes any other rank role they still hold from a previous rung. All
/// Discord API failures are logged and swallowed; callers never see them.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `guild_id` - Guild the interaction came from
/// - `user_id` - Member to synchronize
/// - `category` - Ledger category to mirror
/// - `stage` - Ledger stage to mirror
pub async fn ensure_rank_role(
    http: &Http,
    guild_id: GuildId,
    user_id: UserId,
    category: Category,
    stage: i32,
) {
    let Some(target) = role_for(category, stage) else {
        tracing::warn!(
            "No rank role mapped for {} stage {}, skipping sync",
            category,
            stage
        );
        return;
    };

    let member = match http.get_member(guild_id, user_id).await {
        Ok(member) => member,
        Err(e) => {
            tracing::warn!(
                "Failed to fetch member {} in guild {} for role sync: {}",
                user_id,
                guild_id,
                e
            );
            return;
        }
    };

    if !member.roles.contains(&target) {
        if let Err(e) = http
            .add_member_role(guild_id, user_id, target, Some("Rank promotion"))
            .await
        {
            tracing::error!("Failed to add rank role {} to {}: {}", target, user_id, e);
        }
    }

    // Strip rank roles from rungs the member no longer occupies.
    for (_, _, id) in RANK_ROLES {
        let role = RoleId::new(id);
        if role != target && member.roles.contains(&role) {
            if let Err(e) = http
                .remove_member_role(guild_id, user_id, role, Some("Rank changed"))
                .await
            {
                tracing::warn!(
                    "Failed to remove stale rank role {} from {}: {}",
                    role,
                    user_id,
                    e
                );
            }
        }
    }
}
