//! Domain entities - Core business objects with identity

mod campaign_draft;

pub use campaign_draft::{CampaignDraft, DraftEntry, EntityKind, WorldSetting};
