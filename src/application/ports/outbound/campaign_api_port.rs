use async_trait::async_trait;

use crate::application::dto::{
    FinalizeRequestDto, FinalizeResponseDto, GeneratePreviewResponseDto,
};
use crate::domain::value_objects::{CampaignTemplate, GenerationSettings};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed response: {0}")]
    Parse(String),
    #[error("Service rejected the request: {0}")]
    Rejected(String),
}

/// Generation and persistence service behind the wizard
#[async_trait]
pub trait CampaignApiPort: Send + Sync {
    /// Ask the generator for a draft world built from `settings`
    async fn generate_preview(
        &self,
        settings: &GenerationSettings,
    ) -> Result<GeneratePreviewResponseDto, ApiError>;

    /// Durably commit a reviewed draft
    async fn finalize(&self, request: &FinalizeRequestDto)
        -> Result<FinalizeResponseDto, ApiError>;

    /// Templates published by the service
    async fn list_templates(&self) -> Result<Vec<CampaignTemplate>, ApiError>;
}
