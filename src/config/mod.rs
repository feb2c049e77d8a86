// src/config/mod.rs
// Companion configuration loaded from the environment (.env supported)

use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;

/// Output length cap for generated replies.
pub const DEFAULT_MAX_TOKENS: u32 = 800;
/// Sampling temperature for generated replies.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// Number of trailing conversation turns sent as context.
pub const DEFAULT_HISTORY_WINDOW: usize = 6;
/// Upper bound on a single remote call before it is treated as failed.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Request-shaping policy shared by the generator and the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPolicy {
    pub max_tokens: u32,
    pub temperature: f64,
    pub history_window: usize,
    pub request_timeout: Duration,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            history_window: DEFAULT_HISTORY_WINDOW,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompanionConfig {
    // ── Remote service
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,

    // ── Generation policy
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub history_window: usize,

    // ── Timeouts (in seconds)
    pub request_timeout: u64,

    // ── Logging
    pub log_level: String,
}

// Values may carry trailing `# comments` and whitespace from .env files.
fn env_var_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        None => default,
    }
}

impl CompanionConfig {
    pub fn from_env() -> Self {
        // A missing .env is fine; plain environment variables still apply.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Used by `from_env` and by tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url: String = env_var_or(&lookup, "OPENAI_BASE_URL", DEFAULT_BASE_URL.to_string());

        Self {
            openai_api_key: env_var_or(&lookup, "OPENAI_API_KEY", String::new()),
            openai_base_url: base_url.trim_end_matches('/').to_string(),
            model: env_var_or(&lookup, "MINDCARE_MODEL", DEFAULT_MODEL.to_string()),
            max_output_tokens: env_var_or(&lookup, "MINDCARE_MAX_TOKENS", DEFAULT_MAX_TOKENS),
            temperature: env_var_or(&lookup, "MINDCARE_TEMPERATURE", DEFAULT_TEMPERATURE),
            history_window: env_var_or(&lookup, "MINDCARE_HISTORY_WINDOW", DEFAULT_HISTORY_WINDOW),
            request_timeout: env_var_or(
                &lookup,
                "MINDCARE_REQUEST_TIMEOUT",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            log_level: env_var_or(&lookup, "MINDCARE_LOG_LEVEL", "info".to_string()),
        }
    }

    pub fn policy(&self) -> GenerationPolicy {
        GenerationPolicy {
            max_tokens: self.max_output_tokens,
            temperature: self.temperature,
            history_window: self.history_window,
            request_timeout: Duration::from_secs(self.request_timeout),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.openai_api_key.trim().is_empty() {
            return Err(anyhow!("OPENAI_API_KEY must be set"));
        }

        if self.openai_base_url.is_empty() {
            return Err(anyhow!("Base URL cannot be empty"));
        }

        if self.max_output_tokens == 0 {
            return Err(anyhow!("MINDCARE_MAX_TOKENS must be greater than zero"));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(anyhow!(
                "MINDCARE_TEMPERATURE must be between 0 and 2, got {}",
                self.temperature
            ));
        }

        if self.request_timeout == 0 {
            return Err(anyhow!("MINDCARE_REQUEST_TIMEOUT must be greater than zero"));
        }

        Ok(())
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<CompanionConfig> = Lazy::new(CompanionConfig::from_env);
