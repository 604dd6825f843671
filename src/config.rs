// Process configuration: three secrets, read once at startup and
// passed explicitly to the clients that need them.

use anyhow::{Context, Result};

/// Secrets for the two remote services. Built by [`Config::from_env`]
/// and handed to `NotionClient` / `OpenAiClient`; nothing else in the
/// crate touches the environment.
#[derive(Clone)]
pub struct Config {
    pub notion_token: String,
    pub notion_database_id: String,
    pub openai_api_key: String,
}

impl Config {
    /// Load the configuration from the environment, honouring a local
    /// `.env` file when present. Each missing variable is reported by
    /// name.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; the variables may be set directly.
        dotenvy::dotenv().ok();

        Ok(Config {
            notion_token: require("NOTION_TOKEN")?,
            notion_database_id: require("NOTION_DATABASE_ID")?,
            openai_api_key: require("OPENAI_API_KEY")?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("Missing environment variable {}", name))
}
