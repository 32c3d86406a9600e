//! Campaign draft - generated content held in memory until finalized
//!
//! A draft only exists after a successful generation. The user may prune any
//! of its four entity collections before the draft is committed; nothing is
//! persisted until finalize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::{CampaignConfig, DraftId, GenerationSettings};

/// The four prunable collections of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Locations,
    Npcs,
    Factions,
    Quests,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Locations,
        EntityKind::Npcs,
        EntityKind::Factions,
        EntityKind::Quests,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locations => "locations",
            Self::Npcs => "npcs",
            Self::Factions => "factions",
            Self::Quests => "quests",
        }
    }

    /// Heading used for the preview section
    pub fn title(&self) -> &'static str {
        match self {
            Self::Locations => "Locations",
            Self::Npcs => "NPCs",
            Self::Factions => "Factions",
            Self::Quests => "Quest Hooks",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// World overview produced by the generator
///
/// Only the fields shown in the preview are typed; everything else the
/// generator returns is carried through untouched for finalize. A typed
/// field holding something other than text is kept in `extra` as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorldSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single generated location, NPC, faction, or quest hook
///
/// Generators use both numeric and string ids, so `id` is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DraftEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Quest hooks are titled rather than named
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for WorldSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut extra = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self {
            name: take_text(&mut extra, "name"),
            description: take_text(&mut extra, "description"),
            extra,
        })
    }
}

impl<'de> Deserialize<'de> for DraftEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut extra = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self {
            id: extra.remove("id").filter(|id| !id.is_null()),
            name: take_text(&mut extra, "name"),
            title: take_text(&mut extra, "title"),
            entry_type: take_text(&mut extra, "type"),
            description: take_text(&mut extra, "description"),
            extra,
        })
    }
}

/// Move a text field out of `fields`; non-text values stay where they are
fn take_text(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::String(text) => Some(text),
        Value::Null => None,
        other => {
            fields.insert(key.to_string(), other);
            None
        }
    }
}

impl DraftEntry {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Unnamed")
    }
}

/// Speculative campaign content awaiting review
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignDraft {
    pub id: DraftId,
    pub generated_at: DateTime<Utc>,
    pub world_setting: WorldSetting,
    pub locations: Vec<DraftEntry>,
    pub npcs: Vec<DraftEntry>,
    pub factions: Vec<DraftEntry>,
    pub quest_hooks: Vec<DraftEntry>,
    pub starting_scenario: String,
    /// Settings snapshot the draft was generated from
    pub config: CampaignConfig,
    /// Exact payload sent to the generation service
    pub settings: GenerationSettings,
}

impl CampaignDraft {
    pub fn entries(&self, kind: EntityKind) -> &[DraftEntry] {
        match kind {
            EntityKind::Locations => &self.locations,
            EntityKind::Npcs => &self.npcs,
            EntityKind::Factions => &self.factions,
            EntityKind::Quests => &self.quest_hooks,
        }
    }

    fn entries_mut(&mut self, kind: EntityKind) -> &mut Vec<DraftEntry> {
        match kind {
            EntityKind::Locations => &mut self.locations,
            EntityKind::Npcs => &mut self.npcs,
            EntityKind::Factions => &mut self.factions,
            EntityKind::Quests => &mut self.quest_hooks,
        }
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entries(kind).len()
    }

    /// Remove the entry at `index`, keeping the order of the rest
    ///
    /// Returns `None` when the index is out of range.
    pub fn remove(&mut self, kind: EntityKind, index: usize) -> Option<DraftEntry> {
        let entries = self.entries_mut(kind);
        if index < entries.len() {
            Some(entries.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{
        EntityCounts, MagicLevel, TechnologyLevel, Tone, WorldScale,
    };

    fn entry(name: &str) -> DraftEntry {
        DraftEntry {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn draft() -> CampaignDraft {
        let config = CampaignConfig {
            name: "Ember Hollow".to_string(),
            description: None,
            guild_id: "1".to_string(),
            dm_user_id: "2".to_string(),
            genre: "fantasy".to_string(),
            tone: Tone::Heroic,
            world_scale: WorldScale::Regional,
            magic_level: MagicLevel::High,
            technology_level: TechnologyLevel::Medieval,
            counts: EntityCounts::default(),
            world_description: None,
            key_events: None,
            special_rules: None,
        };
        let settings = config.to_generation_settings();
        CampaignDraft {
            id: DraftId::new(),
            generated_at: Utc::now(),
            world_setting: WorldSetting::default(),
            locations: vec![],
            npcs: vec![entry("Ada"), entry("Bram"), entry("Cora"), entry("Dell")],
            factions: vec![],
            quest_hooks: vec![],
            starting_scenario: String::new(),
            config,
            settings,
        }
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut draft = draft();
        let removed = draft.remove(EntityKind::Npcs, 1).unwrap();
        assert_eq!(removed.display_name(), "Bram");

        let names: Vec<&str> = draft.npcs.iter().map(|n| n.display_name()).collect();
        assert_eq!(names, vec!["Ada", "Cora", "Dell"]);
    }

    #[test]
    fn test_remove_same_index_twice_removes_distinct_entries() {
        let mut draft = draft();
        let first = draft.remove(EntityKind::Npcs, 1).unwrap();
        let second = draft.remove(EntityKind::Npcs, 1).unwrap();
        assert_ne!(first, second);
        assert_eq!(draft.count(EntityKind::Npcs), 2);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut draft = draft();
        assert!(draft.remove(EntityKind::Npcs, 10).is_none());
        assert!(draft.remove(EntityKind::Locations, 0).is_none());
        assert_eq!(draft.count(EntityKind::Npcs), 4);
    }

    #[test]
    fn test_entry_keeps_unknown_fields() {
        let raw = serde_json::json!({
            "id": "loc_0",
            "name": "Ashford",
            "type": "town",
            "danger_level": 3,
            "points_of_interest": ["Mill"]
        });
        let entry: DraftEntry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.entry_type.as_deref(), Some("town"));
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn test_display_name_falls_back_to_title() {
        let quest = DraftEntry {
            title: Some("The Drowned Bell".to_string()),
            ..Default::default()
        };
        assert_eq!(quest.display_name(), "The Drowned Bell");
        assert_eq!(DraftEntry::default().display_name(), "Unnamed");
    }

    #[test]
    fn test_entry_accepts_numeric_id() {
        let raw = serde_json::json!({"id": 3, "name": "Ashford"});
        let entry: DraftEntry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.id, Some(serde_json::json!(3)));
        assert_eq!(entry.display_name(), "Ashford");
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn test_non_text_fields_are_carried_in_extra() {
        let raw = serde_json::json!({
            "name": {"first": "Mara", "last": "Voss"},
            "description": ["scarred", "loyal"],
            "title": "Harbormaster"
        });
        let entry: DraftEntry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.name, None);
        assert_eq!(entry.description, None);
        assert_eq!(entry.display_name(), "Harbormaster");
        assert_eq!(entry.extra["description"], serde_json::json!(["scarred", "loyal"]));
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn test_world_setting_with_numeric_name() {
        let raw = serde_json::json!({"name": 42, "description": "Ash plains", "era": 3});
        let world: WorldSetting = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(world.name, None);
        assert_eq!(world.description.as_deref(), Some("Ash plains"));
        assert_eq!(serde_json::to_value(&world).unwrap(), raw);
    }
}
