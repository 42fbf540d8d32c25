use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::models::resume::{FormLimits, DEFAULT_MAX_JOBS};
use crate::render::GlyphPolicy;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub llm_timeout: Duration,
    pub max_jobs: usize,
    pub require_name: bool,
    pub glyph_policy: GlyphPolicy,
    /// Sessions idle longer than this are evicted.
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
            llm_timeout: Duration::from_secs(
                optional_env("LLM_TIMEOUT_SECS", "60")
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            max_jobs: optional_env("MAX_JOBS", &DEFAULT_MAX_JOBS.to_string())
                .parse::<usize>()
                .context("MAX_JOBS must be a non-negative integer")?,
            require_name: optional_env("REQUIRE_NAME", "false")
                .parse::<bool>()
                .context("REQUIRE_NAME must be true or false")?,
            glyph_policy: optional_env("PDF_GLYPH_POLICY", "reject")
                .parse::<GlyphPolicy>()
                .map_err(|e| anyhow!(e))
                .context("PDF_GLYPH_POLICY is invalid")?,
            session_ttl: Duration::from_secs(
                optional_env("SESSION_TTL_SECS", "3600")
                    .parse::<u64>()
                    .context("SESSION_TTL_SECS must be a whole number of seconds")?,
            ),
        })
    }

    pub fn form_limits(&self) -> FormLimits {
        FormLimits {
            max_jobs: self.max_jobs,
            require_name: self.require_name,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
