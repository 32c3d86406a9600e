//! Application configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::services::DEFAULT_STAGE_DELAY;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the campaign generation/persistence service
    pub api_base_url: String,
    /// Timeout applied to every service request
    pub request_timeout: Duration,
    /// Delay between cosmetic progress stages
    pub progress_stage_delay: Duration,
    /// JSON file with settings form values, used by the binary
    pub form_path: Option<PathBuf>,
    /// Commit the generated draft without waiting for review
    pub auto_finalize: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_base_url: env::var("CAMPAIGN_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),

            request_timeout: Duration::from_secs(
                env::var("CAMPAIGN_API_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "120".to_string())
                    .parse()
                    .context("CAMPAIGN_API_TIMEOUT_SECS must be a whole number of seconds")?,
            ),

            progress_stage_delay: match env::var("CAMPAIGN_PROGRESS_STAGE_DELAY_MS") {
                Ok(ms) => Duration::from_millis(ms.parse().context(
                    "CAMPAIGN_PROGRESS_STAGE_DELAY_MS must be a whole number of milliseconds",
                )?),
                Err(_) => DEFAULT_STAGE_DELAY,
            },

            form_path: env::var("CAMPAIGN_FORM_PATH").ok().map(PathBuf::from),

            auto_finalize: env::var("CAMPAIGN_AUTO_FINALIZE")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}
