//! Application services - Use case implementations
//!
//! Each piece of the campaign wizard is its own service; `CampaignWizard`
//! composes them and owns the shared state.

pub mod campaign_wizard;
pub mod finalize_controller;
pub mod generation_orchestrator;
pub mod preview_store;
pub mod settings_collector;
pub mod template_catalog;
pub mod wizard_state_machine;

pub use campaign_wizard::{CampaignWizard, WizardError};
pub use finalize_controller::FinalizeController;
pub use generation_orchestrator::{GenerationOrchestrator, ProgressSequence, DEFAULT_STAGE_DELAY};
pub use preview_store::PreviewStore;
pub use template_catalog::TemplateCatalog;
pub use wizard_state_machine::{TransitionError, WizardStateMachine};
