//! Raw settings-step input, exactly as typed into the form

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    MagicLevel, TechnologyLevel, TemplateDefaults, Tone, WorldScale, DEFAULT_NUM_FACTIONS,
    DEFAULT_NUM_LOCATIONS, DEFAULT_NUM_NPCS, DEFAULT_NUM_QUESTS, DEFAULT_THEME,
};

/// Settings form fields as untyped strings
///
/// Nothing here is validated; `settings_collector::collect` turns it into a
/// `CampaignConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsForm {
    pub name: String,
    pub description: String,
    pub guild_id: String,
    pub dm_user_id: String,
    pub world_theme: String,
    pub tone: String,
    pub world_scale: String,
    pub magic_level: String,
    pub technology_level: String,
    pub num_npcs: String,
    pub num_locations: String,
    pub num_quests: String,
    pub num_factions: String,
    pub world_description: String,
    pub key_events: String,
    pub special_rules: String,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            guild_id: String::new(),
            dm_user_id: String::new(),
            world_theme: DEFAULT_THEME.to_string(),
            tone: Tone::default().to_string(),
            world_scale: WorldScale::default().to_string(),
            magic_level: MagicLevel::default().to_string(),
            technology_level: TechnologyLevel::default().to_string(),
            num_npcs: DEFAULT_NUM_NPCS.to_string(),
            num_locations: DEFAULT_NUM_LOCATIONS.to_string(),
            num_quests: DEFAULT_NUM_QUESTS.to_string(),
            num_factions: DEFAULT_NUM_FACTIONS.to_string(),
            world_description: String::new(),
            key_events: String::new(),
            special_rules: String::new(),
        }
    }
}

impl SettingsForm {
    /// Overwrite only the fields the template defines
    pub fn apply_template_defaults(&mut self, defaults: &TemplateDefaults) {
        fn set<T: ToString>(field: &mut String, value: &Option<T>) {
            if let Some(value) = value {
                *field = value.to_string();
            }
        }

        set(&mut self.world_theme, &defaults.world_theme);
        set(&mut self.world_scale, &defaults.world_scale);
        set(&mut self.magic_level, &defaults.magic_level);
        set(&mut self.technology_level, &defaults.technology_level);
        set(&mut self.tone, &defaults.tone);
        set(&mut self.num_locations, &defaults.num_locations);
        set(&mut self.num_npcs, &defaults.num_npcs);
        set(&mut self.num_factions, &defaults.num_factions);
        set(&mut self.num_quests, &defaults.num_quest_hooks);
    }
}
