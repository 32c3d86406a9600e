//! Campaign settings value objects
//!
//! `CampaignConfig` is the canonical snapshot built from the settings form for
//! one generation attempt. `GenerationSettings` is the payload derived from it
//! that goes to the generation service and is kept on the draft for finalize.
//!
//! Both carry serde derives because their JSON shape is the wire contract of
//! the generation service.

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME: &str = "fantasy";
pub const DEFAULT_NUM_NPCS: u32 = 8;
pub const DEFAULT_NUM_LOCATIONS: u32 = 5;
pub const DEFAULT_NUM_QUESTS: u32 = 3;
pub const DEFAULT_NUM_FACTIONS: u32 = 3;

/// Defines a closed set of setting values with a default and lenient parsing
macro_rules! setting_enum {
    ($name:ident, default = $default:ident, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Parse a raw form value, falling back to the default for anything unknown
            pub fn parse_or_default(raw: &str) -> Self {
                let raw = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(raw))
                    .unwrap_or_default()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

setting_enum!(Tone, default = Heroic, {
    Gritty => "gritty",
    Heroic => "heroic",
    Comedic => "comedic",
    Horror => "horror",
    Mystery => "mystery",
});

setting_enum!(WorldScale, default = Regional, {
    Local => "local",
    Regional => "regional",
    Continental => "continental",
    World => "world",
});

setting_enum!(MagicLevel, default = High, {
    None => "none",
    Low => "low",
    Medium => "medium",
    High => "high",
});

setting_enum!(TechnologyLevel, default = Medieval, {
    Primitive => "primitive",
    Medieval => "medieval",
    Renaissance => "renaissance",
    Industrial => "industrial",
    Modern => "modern",
    Futuristic => "futuristic",
});

/// How many entries of each kind the generator should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityCounts {
    pub npcs: u32,
    pub locations: u32,
    pub quests: u32,
    pub factions: u32,
}

impl Default for EntityCounts {
    fn default() -> Self {
        Self {
            npcs: DEFAULT_NUM_NPCS,
            locations: DEFAULT_NUM_LOCATIONS,
            quests: DEFAULT_NUM_QUESTS,
            factions: DEFAULT_NUM_FACTIONS,
        }
    }
}

/// Canonical settings snapshot for a single generation attempt
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignConfig {
    pub name: String,
    pub description: Option<String>,
    /// External guild id, kept in its string form
    pub guild_id: String,
    /// External DM user id, kept in its string form
    pub dm_user_id: String,
    pub genre: String,
    pub tone: Tone,
    pub world_scale: WorldScale,
    pub magic_level: MagicLevel,
    pub technology_level: TechnologyLevel,
    pub counts: EntityCounts,
    pub world_description: Option<String>,
    pub key_events: Option<String>,
    pub special_rules: Option<String>,
}

/// A required setting that was left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a campaign name")]
    MissingName,
    #[error("Please enter a guild ID")]
    MissingGuildId,
    #[error("Please enter a DM user ID")]
    MissingDmUserId,
}

impl CampaignConfig {
    /// Check the settings that must be present before anything is sent
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.guild_id.trim().is_empty() {
            return Err(ValidationError::MissingGuildId);
        }
        if self.dm_user_id.trim().is_empty() {
            return Err(ValidationError::MissingDmUserId);
        }
        Ok(())
    }

    /// Derive the outbound generation payload
    pub fn to_generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            guild_id: parse_external_id(&self.guild_id),
            dm_user_id: parse_external_id(&self.dm_user_id),
            name: self.name.clone(),
            world_theme: self.genre.clone(),
            world_scale: self.world_scale,
            magic_level: self.magic_level,
            technology_level: self.technology_level,
            tone: self.tone,
            num_locations: self.counts.locations,
            num_npcs: self.counts.npcs,
            num_factions: self.counts.factions,
            num_quest_hooks: self.counts.quests,
            world_description: self.world_description.clone(),
            key_events: self.key_events.clone(),
            special_rules: self.special_rules.clone(),
        }
    }
}

/// Settings payload sent to the generation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub guild_id: i64,
    pub dm_user_id: i64,
    pub name: String,
    pub world_theme: String,
    pub world_scale: WorldScale,
    pub magic_level: MagicLevel,
    pub technology_level: TechnologyLevel,
    pub tone: Tone,
    pub num_locations: u32,
    pub num_npcs: u32,
    pub num_factions: u32,
    pub num_quest_hooks: u32,
    pub world_description: Option<String>,
    pub key_events: Option<String>,
    pub special_rules: Option<String>,
}

/// External ids travel as integers; anything unparsable becomes 0
fn parse_external_id(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}
