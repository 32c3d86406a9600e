//! Campaign templates - named presets of settings defaults

use serde::{Deserialize, Serialize};

/// Identifier of a template in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The template currently chosen on the settings step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectedTemplate {
    /// No preset, settings are built by hand
    #[default]
    Custom,
    Template(TemplateId),
}

impl SelectedTemplate {
    pub fn template_id(&self) -> Option<&TemplateId> {
        match self {
            Self::Custom => None,
            Self::Template(id) => Some(id),
        }
    }
}

/// Partial settings supplied by a template
///
/// Every field is optional. Applying a template overwrites only the fields
/// that are `Some`; everything else keeps whatever the user entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_scale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_locations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_npcs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_factions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_quest_hooks: Option<u32>,
}

impl TemplateDefaults {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A named preset as shown in the template picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignTemplate {
    pub id: TemplateId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub settings: TemplateDefaults,
}
