//! Terminal rendering of the wizard for the headless runner

use std::io::{self, Write};

use tracing::{debug, error, info, warn};

use crate::application::dto::{
    FinalizeSummary, Notice, NoticeLevel, PreviewModel, ProgressStage, SettingsForm,
};
use crate::application::ports::outbound::WizardViewPort;
use crate::domain::value_objects::{StepIndicator, StepStatus, TemplateId, WizardStep};

/// Writes every wizard update to stdout
#[derive(Debug, Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }

    fn print(&self, text: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", text) {
            debug!(error = %e, "Failed to write to terminal");
        }
    }
}

impl WizardViewPort for ConsoleView {
    fn show_step(&self, step: WizardStep, indicators: &[StepIndicator]) {
        let trail: Vec<String> = indicators
            .iter()
            .map(|i| match i.status {
                StepStatus::Completed => format!("[x] {}", i.step),
                StepStatus::Active => format!("[>] {}", i.step),
                StepStatus::Pending => format!("[ ] {}", i.step),
            })
            .collect();
        self.print(&format!("\n== Step {}: {} ==", step.number(), step));
        self.print(&trail.join("  "));
    }

    fn show_form(&self, form: &SettingsForm) {
        self.print(&format!(
            "Campaign \"{}\" | guild {} | DM {} | {} / {} / magic {} / tech {} / {} scale",
            form.name,
            form.guild_id,
            form.dm_user_id,
            form.world_theme,
            form.tone,
            form.magic_level,
            form.technology_level,
            form.world_scale
        ));
        self.print(&format!(
            "Counts: {} NPCs, {} locations, {} factions, {} quests",
            form.num_npcs, form.num_locations, form.num_factions, form.num_quests
        ));
    }

    fn highlight_template(&self, template: Option<&TemplateId>) {
        match template {
            Some(id) => self.print(&format!("Template: {}", id)),
            None => self.print("Template: custom"),
        }
    }

    fn show_progress(&self, stage: &ProgressStage) {
        self.print(&format!("  {:>3}%  {}", stage.percent, stage.label));
    }

    fn render_preview(&self, preview: &PreviewModel) {
        self.print(&format!("\n{}", preview.world_name));
        if !preview.world_description.is_empty() {
            self.print(&preview.world_description);
        }
        for section in &preview.sections {
            self.print(&format!("\n{} ({})", section.title, section.count_label));
            if let Some(placeholder) = &section.empty_placeholder {
                self.print(&format!("  {}", placeholder));
            }
            for card in &section.cards {
                let subtitle = card
                    .subtitle
                    .as_deref()
                    .map(|s| format!(" [{}]", s))
                    .unwrap_or_default();
                self.print(&format!("  {}. {}{}", card.index + 1, card.title, subtitle));
                if let Some(description) = &card.description {
                    self.print(&format!("     {}", description));
                }
            }
        }
        self.print(&format!("\nStarting scenario:\n{}", preview.starting_scenario));
    }

    fn show_success(&self, summary: &FinalizeSummary) {
        self.print(&format!(
            "\n{}\n  {} locations, {} NPCs, {} factions, {} quests",
            summary.message,
            summary.locations_created,
            summary.npcs_created,
            summary.factions_created,
            summary.quests_created
        ));
        if let Some(session_id) = summary.session_id {
            self.print(&format!("  Session #{}", session_id));
        }
    }

    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => error!(message = %notice.message, "Wizard notice"),
            NoticeLevel::Warning => warn!(message = %notice.message, "Wizard notice"),
            NoticeLevel::Info | NoticeLevel::Success => {
                info!(message = %notice.message, "Wizard notice")
            }
        }
        self.print(&format!("> {}", notice.message));
    }
}
