use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub discord_guild_id: u64,

    /// Optional audit webhook; rank movement logging is disabled when unset.
    pub log_webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let guild_id_raw = std::env::var("DISCORD_GUILD_ID")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_GUILD_ID".to_string()))?;
        let discord_guild_id =
            guild_id_raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "DISCORD_GUILD_ID".to_string(),
                    value: guild_id_raw,
                })?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            discord_guild_id,
            log_webhook_url: std::env::var("LOG_WEBHOOK_URL").ok(),
        })
    }
}
