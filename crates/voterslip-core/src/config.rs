use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_NAME_INDEX_NODE, DEFAULT_VOTERS_NODE};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub store: StoreConfig,
    pub server: ServerConfig,
    pub campaign: CampaignConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Realtime Database root, e.g. `https://example-roll.firebaseio.com`.
    /// Empty selects the built-in in-memory store (demo mode).
    pub base_url: String,
    /// Database secret or ID token sent as the `auth` query parameter.
    pub auth_token: Option<String>,
    pub voters_node: String,
    pub name_index_node: String,
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// ## Summary
    /// Returns whether a remote database root has been configured.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.base_url.trim().is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the listen address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }
}

/// Campaign identity rendered on slips and in share messages.
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignConfig {
    pub candidate_name: String,
    pub ballot_number: String,
    pub election_label: String,
    /// Origin advertised in share messages; falls back to the server origin.
    pub share_origin: Option<String>,
    /// Candidate photo embedded in the printable slip, when present.
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("store.base_url", "")?
            .set_default("store.voters_node", DEFAULT_VOTERS_NODE)?
            .set_default("store.name_index_node", DEFAULT_NAME_INDEX_NODE)?
            .set_default("store.timeout_secs", 10)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8136)?
            .set_default("campaign.candidate_name", "Vaibhav Jain")?
            .set_default("campaign.ballot_number", "136")?
            .set_default("campaign.election_label", "BCD Election 2026")?
            .set_default("logging.level", "info")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
