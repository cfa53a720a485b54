use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub feed: FeedConfig,
    #[serde(default)]
    pub submissions: SubmissionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the server address as a string in the format "host:port".
    #[must_use]
    pub fn serve_origin(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            self.serve_origin()
        }
    }
}

/// Feed-level metadata; fixed per deployment, never derived from events.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub title: String,
    pub description: String,
    /// Public page listing the events; entry anchors hang off this URL.
    pub events_page_url: String,
    pub logo_url: Option<String>,
    pub language: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionConfig {
    /// Discord-compatible webhook the submission announcement posts to.
    pub webhook_url: Option<String>,
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
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8642)?
            .set_default("logging.level", "debug")?
            .set_default("feed.title", "Upcoming Events")?
            .set_default(
                "feed.description",
                "Upcoming community events from all around the world",
            )?
            .set_default("feed.events_page_url", "https://example.org/community/events")?
            .set_default("feed.language", "en")?
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
