use std::time::Duration;

use anyhow::{ensure, Context, Result};

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// The API key is optional: without it the page renders but submissions are refused.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
    pub request_timeout: Duration,
    pub session_ttl: chrono::Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 120)
            .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;
        let ttl_minutes = parse_env("SESSION_TTL_MINUTES", 120)
            .context("SESSION_TTL_MINUTES must be a whole number of minutes")?;

        Ok(Config {
            google_api_key: load_api_key(),
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            request_timeout: request_timeout(timeout_secs)?,
            session_ttl: session_ttl(ttl_minutes)?,
        })
    }
}

/// Reads `GOOGLE_API_KEY`. Any lookup failure, and a blank value, means "no key".
pub fn load_api_key() -> Option<String> {
    normalize_key(std::env::var("GOOGLE_API_KEY").ok())
}

fn normalize_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

/// A zero timeout would fail every provider call.
fn request_timeout(secs: u64) -> Result<Duration> {
    ensure!(secs > 0, "REQUEST_TIMEOUT_SECS must be greater than 0");
    Ok(Duration::from_secs(secs))
}

fn session_ttl(minutes: u64) -> Result<chrono::Duration> {
    ensure!(minutes > 0, "SESSION_TTL_MINUTES must be greater than 0");
    i64::try_from(minutes)
        .ok()
        .and_then(chrono::Duration::try_minutes)
        .with_context(|| format!("SESSION_TTL_MINUTES={minutes} is out of range"))
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_value(key, std::env::var(key).ok().as_deref(), default)
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: Option<&str>, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        None => Ok(default),
    }
}
