//! Wire DTOs for the campaign generation service

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DraftEntry, WorldSetting};
use crate::domain::value_objects::CampaignTemplate;

/// Response of `POST /api/campaign/generate-preview`
///
/// The service also echoes the settings it used; they are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePreviewResponseDto {
    pub preview: PreviewDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewDto {
    #[serde(default)]
    pub world_setting: WorldSetting,
    #[serde(default)]
    pub locations: Vec<DraftEntry>,
    #[serde(default)]
    pub npcs: Vec<DraftEntry>,
    #[serde(default)]
    pub factions: Vec<DraftEntry>,
    #[serde(default)]
    pub quest_hooks: Vec<DraftEntry>,
    #[serde(default)]
    pub starting_scenario: String,
}

/// Body of `POST /api/campaign/finalize`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizeRequestDto {
    pub guild_id: i64,
    pub dm_user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub world_setting: WorldSetting,
    pub locations: Vec<DraftEntry>,
    pub npcs: Vec<DraftEntry>,
    pub factions: Vec<DraftEntry>,
    pub quest_hooks: Vec<DraftEntry>,
    pub starting_scenario: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinalizeResponseDto {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<i64>,
    #[serde(default)]
    pub stats: Option<FinalizeStatsDto>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FinalizeStatsDto {
    #[serde(default)]
    pub locations_created: Option<usize>,
    #[serde(default)]
    pub npcs_created: Option<usize>,
    #[serde(default)]
    pub factions_created: Option<usize>,
    #[serde(default)]
    pub quests_created: Option<usize>,
}

/// Response of `GET /api/campaign/templates`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateListResponseDto {
    #[serde(default)]
    pub templates: Vec<CampaignTemplate>,
}
