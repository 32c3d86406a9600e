//! Wizard view port - Presentation surface driven by the wizard
//!
//! The wizard never draws anything itself. Every visible change (active
//! panel, progress, preview cards, notices) goes through this port so the
//! same state machine can back a terminal, a desktop shell, or a test double.

use crate::application::dto::{
    FinalizeSummary, Notice, PreviewModel, ProgressStage, SettingsForm,
};
use crate::domain::value_objects::{StepIndicator, TemplateId, WizardStep};

pub trait WizardViewPort: Send + Sync {
    /// Show the panel for `step` and update the step indicator
    fn show_step(&self, step: WizardStep, indicators: &[StepIndicator]);

    /// Redraw the settings form with the given values
    fn show_form(&self, form: &SettingsForm);

    /// Highlight the chosen template card, or clear the highlight
    fn highlight_template(&self, template: Option<&TemplateId>);

    fn show_progress(&self, stage: &ProgressStage);

    /// Draw the review step from the current draft
    fn render_preview(&self, preview: &PreviewModel);

    fn show_success(&self, summary: &FinalizeSummary);

    fn notify(&self, notice: Notice);
}
