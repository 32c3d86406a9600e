//! Shared fakes for wizard integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;

use campaign_wizard::application::dto::{
    FinalizeRequestDto, FinalizeResponseDto, FinalizeStatsDto, FinalizeSummary,
    GeneratePreviewResponseDto, Notice, NoticeLevel, PreviewDto, PreviewModel, ProgressStage,
    SettingsForm,
};
use campaign_wizard::application::ports::outbound::{ApiError, CampaignApiPort, WizardViewPort};
use campaign_wizard::application::services::{CampaignWizard, ProgressSequence};
use campaign_wizard::domain::entities::{DraftEntry, WorldSetting};
use campaign_wizard::domain::value_objects::{
    CampaignTemplate, GenerationSettings, StepIndicator, TemplateId, WizardStep,
};

pub const STAGE_DELAY: Duration = Duration::from_millis(200);

/// In-memory stand-in for the generation service
///
/// Generation echoes back as many entries as were requested.
pub struct FakeCampaignApi {
    latency: Duration,
    gate: Mutex<Option<Arc<Notify>>>,
    finalize_gate: Mutex<Option<Arc<Notify>>>,
    finalize_rejection: Mutex<Option<String>>,
    generate_error: Mutex<Option<ApiError>>,
    finalize_error: Mutex<Option<ApiError>>,
    finalize_stats: Mutex<Option<FinalizeStatsDto>>,
    templates: Mutex<Result<Vec<CampaignTemplate>, ApiError>>,
    pub generate_calls: Mutex<Vec<GenerationSettings>>,
    pub finalize_calls: Mutex<Vec<FinalizeRequestDto>>,
}

impl FakeCampaignApi {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            gate: Mutex::new(None),
            finalize_gate: Mutex::new(None),
            finalize_rejection: Mutex::new(None),
            generate_error: Mutex::new(None),
            finalize_error: Mutex::new(None),
            finalize_stats: Mutex::new(None),
            templates: Mutex::new(Ok(vec![])),
            generate_calls: Mutex::new(vec![]),
            finalize_calls: Mutex::new(vec![]),
        }
    }

    /// Hold generation responses until the returned handle is notified
    pub fn gated(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Hold finalize responses until the returned handle is notified
    pub fn gated_finalize(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.finalize_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Answer finalize with `success: false` and this message
    pub fn reject_finalize(&self, message: Option<&str>) {
        *self.finalize_rejection.lock().unwrap() = message.map(str::to_string);
    }

    pub fn fail_generation(&self, error: ApiError) {
        *self.generate_error.lock().unwrap() = Some(error);
    }

    pub fn fail_finalize(&self, error: Option<ApiError>) {
        *self.finalize_error.lock().unwrap() = error;
    }

    pub fn with_finalize_stats(&self, stats: FinalizeStatsDto) {
        *self.finalize_stats.lock().unwrap() = Some(stats);
    }

    pub fn with_templates(&self, templates: Result<Vec<CampaignTemplate>, ApiError>) {
        *self.templates.lock().unwrap() = templates;
    }

    pub fn generate_call_count(&self) -> usize {
        self.generate_calls.lock().unwrap().len()
    }

    pub fn last_finalize(&self) -> Option<FinalizeRequestDto> {
        self.finalize_calls.lock().unwrap().last().cloned()
    }
}

fn entries(prefix: &str, count: u32) -> Vec<DraftEntry> {
    (0..count)
        .map(|i| DraftEntry {
            id: Some(json!(format!("{}_{}", prefix.to_lowercase(), i))),
            name: Some(format!("{} {}", prefix, i + 1)),
            description: Some(format!("Generated {}", prefix.to_lowercase())),
            ..Default::default()
        })
        .collect()
}

#[async_trait]
impl CampaignApiPort for FakeCampaignApi {
    async fn generate_preview(
        &self,
        settings: &GenerationSettings,
    ) -> Result<GeneratePreviewResponseDto, ApiError> {
        self.generate_calls.lock().unwrap().push(settings.clone());
        tokio::time::sleep(self.latency).await;
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(error) = self.generate_error.lock().unwrap().clone() {
            return Err(error);
        }

        Ok(GeneratePreviewResponseDto {
            preview: PreviewDto {
                world_setting: WorldSetting {
                    name: Some(format!("{} World", settings.name)),
                    description: Some("A land of ash and ember.".to_string()),
                    ..Default::default()
                },
                locations: entries("Location", settings.num_locations),
                npcs: entries("NPC", settings.num_npcs),
                factions: entries("Faction", settings.num_factions),
                quest_hooks: entries("Quest", settings.num_quest_hooks),
                starting_scenario: "The party meets at the crossroads.".to_string(),
            },
        })
    }

    async fn finalize(
        &self,
        request: &FinalizeRequestDto,
    ) -> Result<FinalizeResponseDto, ApiError> {
        self.finalize_calls.lock().unwrap().push(request.clone());
        let gate = self.finalize_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(error) = self.finalize_error.lock().unwrap().clone() {
            return Err(error);
        }
        if let Some(message) = self.finalize_rejection.lock().unwrap().clone() {
            return Ok(FinalizeResponseDto {
                success: false,
                message: Some(message),
                ..Default::default()
            });
        }
        Ok(FinalizeResponseDto {
            success: true,
            message: Some(format!("Campaign '{}' created successfully!", request.name)),
            session_id: Some(7),
            stats: *self.finalize_stats.lock().unwrap(),
        })
    }

    async fn list_templates(&self) -> Result<Vec<CampaignTemplate>, ApiError> {
        self.templates.lock().unwrap().clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Step(WizardStep),
    Form(SettingsForm),
    Highlight(Option<TemplateId>),
    Progress(u8),
    Preview(PreviewModel),
    Success(FinalizeSummary),
    Notice(Notice),
}

/// Records everything the wizard asks the view to show
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn steps(&self) -> Vec<WizardStep> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Step(step) => Some(step),
                _ => None,
            })
            .collect()
    }

    pub fn progress(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Progress(percent) => Some(percent),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self, level: NoticeLevel) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Notice(notice) if notice.level == level => Some(notice.message),
                _ => None,
            })
            .collect()
    }

    pub fn last_preview(&self) -> Option<PreviewModel> {
        self.events().into_iter().rev().find_map(|e| match e {
            ViewEvent::Preview(preview) => Some(preview),
            _ => None,
        })
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl WizardViewPort for RecordingView {
    fn show_step(&self, step: WizardStep, _indicators: &[StepIndicator]) {
        self.push(ViewEvent::Step(step));
    }

    fn show_form(&self, form: &SettingsForm) {
        self.push(ViewEvent::Form(form.clone()));
    }

    fn highlight_template(&self, template: Option<&TemplateId>) {
        self.push(ViewEvent::Highlight(template.cloned()));
    }

    fn show_progress(&self, stage: &ProgressStage) {
        self.push(ViewEvent::Progress(stage.percent));
    }

    fn render_preview(&self, preview: &PreviewModel) {
        self.push(ViewEvent::Preview(preview.clone()));
    }

    fn show_success(&self, summary: &FinalizeSummary) {
        self.push(ViewEvent::Success(summary.clone()));
    }

    fn notify(&self, notice: Notice) {
        self.push(ViewEvent::Notice(notice));
    }
}

pub struct Harness {
    pub wizard: Arc<CampaignWizard>,
    pub api: Arc<FakeCampaignApi>,
    pub view: Arc<RecordingView>,
}

pub fn harness(latency: Duration) -> Harness {
    let api = Arc::new(FakeCampaignApi::new(latency));
    let view = Arc::new(RecordingView::default());
    let wizard = Arc::new(CampaignWizard::new(
        api.clone(),
        view.clone(),
        ProgressSequence::new(STAGE_DELAY),
    ));
    Harness { wizard, api, view }
}

/// Fill in the fields required to generate
pub async fn fill_required(wizard: &CampaignWizard) {
    wizard
        .update_form(|form| {
            form.name = "Ember Hollow".to_string();
            form.guild_id = "123".to_string();
            form.dm_user_id = "456".to_string();
        })
        .await;
}
