use anyhow::{Context, Result};

/// Fallback guide returned by the lead endpoint when the quiz result is unknown.
pub const DEFAULT_GUIDE_URL: &str = "/hooks/breathwork/5-techniques-zen.pdf";

/// Application configuration loaded from environment variables.
/// Every variable is optional; a bad `PORT` is the only startup error.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub default_guide_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            default_guide_url: DEFAULT_GUIDE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: match std::env::var("PORT") {
                Ok(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                Err(_) => defaults.port,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            default_guide_url: std::env::var("DEFAULT_GUIDE_URL")
                .unwrap_or(defaults.default_guide_url),
        })
    }
}
