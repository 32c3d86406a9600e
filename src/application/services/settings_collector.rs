//! Draft Settings Collector - Normalize the raw form into a `CampaignConfig`

use crate::application::dto::SettingsForm;
use crate::domain::value_objects::{
    CampaignConfig, EntityCounts, MagicLevel, SelectedTemplate, TechnologyLevel, Tone,
    WorldScale, DEFAULT_NUM_FACTIONS, DEFAULT_NUM_LOCATIONS, DEFAULT_NUM_NPCS, DEFAULT_NUM_QUESTS,
    DEFAULT_THEME,
};

/// Build the canonical settings snapshot from the current form
///
/// Never fails. Counts that are missing, non-numeric or not positive fall
/// back to their defaults; unknown enum values fall back the same way. With a
/// template selected, the genre is the template id instead of the theme field.
pub fn collect(form: &SettingsForm, selected: &SelectedTemplate) -> CampaignConfig {
    let genre = match selected.template_id() {
        Some(id) => id.to_string(),
        None => non_empty(&form.world_theme).unwrap_or_else(|| DEFAULT_THEME.to_string()),
    };

    CampaignConfig {
        name: form.name.trim().to_string(),
        description: non_empty(&form.description),
        guild_id: form.guild_id.trim().to_string(),
        dm_user_id: form.dm_user_id.trim().to_string(),
        genre,
        tone: Tone::parse_or_default(&form.tone),
        world_scale: WorldScale::parse_or_default(&form.world_scale),
        magic_level: MagicLevel::parse_or_default(&form.magic_level),
        technology_level: TechnologyLevel::parse_or_default(&form.technology_level),
        counts: EntityCounts {
            npcs: count_or(&form.num_npcs, DEFAULT_NUM_NPCS),
            locations: count_or(&form.num_locations, DEFAULT_NUM_LOCATIONS),
            quests: count_or(&form.num_quests, DEFAULT_NUM_QUESTS),
            factions: count_or(&form.num_factions, DEFAULT_NUM_FACTIONS),
        },
        world_description: non_empty(&form.world_description),
        key_events: non_empty(&form.key_events),
        special_rules: non_empty(&form.special_rules),
    }
}

fn count_or(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => default,
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
