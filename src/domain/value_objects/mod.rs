//! Value objects - Immutable objects defined by their attributes

mod campaign_settings;
mod ids;
mod template;
mod wizard_step;

pub use campaign_settings::{
    CampaignConfig, EntityCounts, GenerationSettings, MagicLevel, TechnologyLevel, Tone,
    ValidationError, WorldScale, DEFAULT_NUM_FACTIONS, DEFAULT_NUM_LOCATIONS, DEFAULT_NUM_NPCS,
    DEFAULT_NUM_QUESTS, DEFAULT_THEME,
};
pub use ids::*;
pub use template::{CampaignTemplate, SelectedTemplate, TemplateDefaults, TemplateId};
pub use wizard_step::{step_indicators, StepIndicator, StepStatus, WizardStep};
