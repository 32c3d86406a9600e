//! Campaign Wizard - headless runner
//!
//! Drives one wizard run against the configured generation service:
//! - Loads settings form values from `CAMPAIGN_FORM_PATH`
//! - Generates and prints a campaign preview
//! - Commits it when `CAMPAIGN_AUTO_FINALIZE` is set

use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campaign_wizard::application::dto::SettingsForm;
use campaign_wizard::application::services::{CampaignWizard, ProgressSequence};
use campaign_wizard::domain::value_objects::{SelectedTemplate, TemplateId};
use campaign_wizard::infrastructure::campaign_client::CampaignApiClient;
use campaign_wizard::infrastructure::config::AppConfig;
use campaign_wizard::infrastructure::console_view::ConsoleView;

/// Contents of the form file: form fields plus an optional template id
#[derive(Debug, Default, Deserialize)]
struct RunnerInput {
    #[serde(default)]
    template: Option<String>,
    #[serde(flatten)]
    form: SettingsForm,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_wizard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Campaign Wizard");

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Campaign API: {}", config.api_base_url);

    let api = CampaignApiClient::new(&config.api_base_url, config.request_timeout)
        .context("Failed to build campaign API client")?;
    let wizard = CampaignWizard::new(
        Arc::new(api),
        Arc::new(ConsoleView::new()),
        ProgressSequence::new(config.progress_stage_delay),
    );

    wizard.open().await;
    match wizard.refresh_templates().await {
        Ok(count) => tracing::info!("  Remote templates: {}", count),
        Err(e) => tracing::debug!("Continuing with built-in templates: {}", e),
    }

    let input = match &config.form_path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read form file {}", path.display()))?;
            serde_json::from_str::<RunnerInput>(&raw)
                .with_context(|| format!("Invalid form file {}", path.display()))?
        }
        None => RunnerInput::default(),
    };

    let RunnerInput { template, form } = input;
    wizard.update_form(move |current| *current = form).await;
    if let Some(template) = template {
        wizard
            .select_template(SelectedTemplate::Template(TemplateId::new(template)))
            .await;
    }

    wizard
        .generate()
        .await
        .context("Campaign generation did not complete")?;

    if !config.auto_finalize {
        tracing::info!("Draft ready for review; set CAMPAIGN_AUTO_FINALIZE=true to commit it");
        return Ok(());
    }

    let summary = wizard
        .finalize()
        .await
        .context("Campaign could not be saved")?;
    tracing::info!(session_id = ?summary.session_id, "Campaign committed");

    wizard.reset().await;
    Ok(())
}
