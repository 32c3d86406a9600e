//! Finalize Controller - Commit a reviewed draft
//!
//! The request always carries the draft's current collections, so anything
//! the user pruned on the review step is left out of the persisted campaign.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::application::dto::{FinalizeRequestDto, FinalizeResponseDto, FinalizeSummary};
use crate::application::ports::outbound::{ApiError, CampaignApiPort};
use crate::domain::entities::CampaignDraft;

pub struct FinalizeController {
    api: Arc<dyn CampaignApiPort>,
}

impl FinalizeController {
    pub fn new(api: Arc<dyn CampaignApiPort>) -> Self {
        Self { api }
    }

    /// Build the durable-write payload from the draft as it is now
    pub fn build_request(draft: &CampaignDraft) -> FinalizeRequestDto {
        let description = draft.config.description.clone().or_else(|| {
            let scenario = draft.starting_scenario.trim();
            (!scenario.is_empty()).then(|| scenario.to_string())
        });

        FinalizeRequestDto {
            guild_id: draft.settings.guild_id,
            dm_user_id: draft.settings.dm_user_id,
            name: draft.config.name.clone(),
            description,
            world_setting: draft.world_setting.clone(),
            locations: draft.locations.clone(),
            npcs: draft.npcs.clone(),
            factions: draft.factions.clone(),
            quest_hooks: draft.quest_hooks.clone(),
            starting_scenario: draft.starting_scenario.clone(),
        }
    }

    /// Send the request and summarize what the service created
    #[instrument(skip_all, fields(campaign = %request.name))]
    pub async fn commit(&self, request: &FinalizeRequestDto) -> Result<FinalizeSummary, ApiError> {
        let response = self.api.finalize(request).await?;
        if !response.success {
            let message = response
                .message
                .unwrap_or_else(|| "campaign was not created".to_string());
            warn!(%message, "Finalize rejected by service");
            return Err(ApiError::Rejected(message));
        }

        let summary = summarize(response, request);
        info!(
            session_id = ?summary.session_id,
            locations = summary.locations_created,
            npcs = summary.npcs_created,
            quests = summary.quests_created,
            "Campaign finalized"
        );
        Ok(summary)
    }
}

/// Prefer the server's counts; fall back to what was sent
fn summarize(response: FinalizeResponseDto, request: &FinalizeRequestDto) -> FinalizeSummary {
    let stats = response.stats.unwrap_or_default();
    FinalizeSummary {
        campaign_name: request.name.clone(),
        session_id: response.session_id,
        message: response
            .message
            .unwrap_or_else(|| format!("Campaign '{}' created successfully!", request.name)),
        locations_created: stats.locations_created.unwrap_or(request.locations.len()),
        npcs_created: stats.npcs_created.unwrap_or(request.npcs.len()),
        factions_created: stats.factions_created.unwrap_or(request.factions.len()),
        quests_created: stats.quests_created.unwrap_or(request.quest_hooks.len()),
    }
}
