//! View models handed to the wizard view

use serde::Serialize;

use crate::domain::entities::{CampaignDraft, DraftEntry, EntityKind};

/// One step of the generation progress display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressStage {
    pub percent: u8,
    pub label: String,
}

impl ProgressStage {
    pub fn new(percent: u8, label: impl Into<String>) -> Self {
        Self {
            percent,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// A card in one of the preview sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewCard {
    pub index: usize,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
}

impl PreviewCard {
    fn from_entry(index: usize, entry: &DraftEntry) -> Self {
        Self {
            index,
            title: entry.display_name().to_string(),
            subtitle: entry.entry_type.clone(),
            description: entry.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSection {
    pub kind: EntityKind,
    pub title: String,
    pub count: usize,
    pub count_label: String,
    pub cards: Vec<PreviewCard>,
    /// Shown instead of an empty region when there are no cards
    pub empty_placeholder: Option<String>,
}

/// Everything shown on the review step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewModel {
    pub world_name: String,
    pub world_description: String,
    pub starting_scenario: String,
    pub sections: Vec<PreviewSection>,
}

impl PreviewModel {
    pub fn from_draft(draft: &CampaignDraft) -> Self {
        let sections = EntityKind::ALL
            .iter()
            .map(|&kind| {
                let entries = draft.entries(kind);
                let cards: Vec<PreviewCard> = entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| PreviewCard::from_entry(index, entry))
                    .collect();
                let empty_placeholder = cards
                    .is_empty()
                    .then(|| format!("No {} generated", kind.title().to_lowercase()));
                PreviewSection {
                    kind,
                    title: kind.title().to_string(),
                    count: entries.len(),
                    count_label: entries.len().to_string(),
                    cards,
                    empty_placeholder,
                }
            })
            .collect();

        Self {
            world_name: draft
                .world_setting
                .name
                .clone()
                .unwrap_or_else(|| draft.config.name.clone()),
            world_description: draft.world_setting.description.clone().unwrap_or_default(),
            starting_scenario: draft.starting_scenario.clone(),
            sections,
        }
    }

    pub fn section(&self, kind: EntityKind) -> Option<&PreviewSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

/// Result of a successful finalize
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalizeSummary {
    pub campaign_name: String,
    pub session_id: Option<i64>,
    pub message: String,
    pub locations_created: usize,
    pub npcs_created: usize,
    pub factions_created: usize,
    pub quests_created: usize,
}
