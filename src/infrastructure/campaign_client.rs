//! HTTP client for the campaign generation service

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::application::dto::{
    FinalizeRequestDto, FinalizeResponseDto, GeneratePreviewResponseDto, TemplateListResponseDto,
};
use crate::application::ports::outbound::{ApiError, CampaignApiPort};
use crate::domain::value_objects::{CampaignTemplate, GenerationSettings};

/// Client for the campaign REST API
pub struct CampaignApiClient {
    client: Client,
    base_url: String,
}

impl CampaignApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CampaignClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, CampaignClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        Self::read_json(response).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, CampaignClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::read_json(response).await
    }

    async fn read_json<R: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<R, CampaignClientError> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CampaignClientError::ApiError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(CampaignClientError::ParseError)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CampaignClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },
    #[error("Invalid response body: {0}")]
    ParseError(serde_json::Error),
}

impl From<CampaignClientError> for ApiError {
    fn from(error: CampaignClientError) -> Self {
        match error {
            CampaignClientError::HttpError(e) => ApiError::Request(e.to_string()),
            CampaignClientError::ApiError { status, body } => ApiError::Status { status, body },
            CampaignClientError::ParseError(e) => ApiError::Parse(e.to_string()),
        }
    }
}

// =============================================================================
// CampaignApiPort Implementation
// =============================================================================

#[async_trait]
impl CampaignApiPort for CampaignApiClient {
    async fn generate_preview(
        &self,
        settings: &GenerationSettings,
    ) -> Result<GeneratePreviewResponseDto, ApiError> {
        Ok(self
            .post_json("/api/campaign/generate-preview", settings)
            .await?)
    }

    async fn finalize(
        &self,
        request: &FinalizeRequestDto,
    ) -> Result<FinalizeResponseDto, ApiError> {
        Ok(self.post_json("/api/campaign/finalize", request).await?)
    }

    async fn list_templates(&self) -> Result<Vec<CampaignTemplate>, ApiError> {
        let response: TemplateListResponseDto = self.get_json("/api/campaign/templates").await?;
        Ok(response.templates)
    }
}
