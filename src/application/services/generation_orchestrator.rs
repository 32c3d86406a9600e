//! Generation Orchestrator - Drive a single campaign generation
//!
//! The generation request and the cosmetic progress sequence are started
//! together and joined. A successful run completes only when both have
//! finished, so the review step never appears just because the service
//! answered early. A failed request ends the run immediately and drops the
//! remaining progress stages.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::application::dto::{GeneratePreviewResponseDto, ProgressStage};
use crate::application::ports::outbound::{ApiError, CampaignApiPort, WizardViewPort};
use crate::domain::entities::CampaignDraft;
use crate::domain::value_objects::{CampaignConfig, DraftId, GenerationSettings};

/// Stages shown while the service is working
pub const GENERATION_STAGES: [(u8, &str); 5] = [
    (15, "Building world foundation..."),
    (35, "Creating locations..."),
    (55, "Populating with NPCs..."),
    (75, "Forming factions..."),
    (90, "Weaving quest hooks..."),
];

pub const COMPLETE_STAGE_LABEL: &str = "Campaign ready!";

pub const DEFAULT_STAGE_DELAY: Duration = Duration::from_millis(800);

/// Fixed, timed sequence of progress updates
///
/// Purely decorative. Its timing never affects what ends up in the draft.
#[derive(Debug, Clone)]
pub struct ProgressSequence {
    stages: Vec<ProgressStage>,
    delay: Duration,
}

impl ProgressSequence {
    pub fn new(delay: Duration) -> Self {
        let stages = GENERATION_STAGES
            .iter()
            .map(|&(percent, label)| ProgressStage::new(percent, label))
            .collect();
        Self { stages, delay }
    }

    /// Show each stage, then wait the fixed delay before the next
    pub async fn play(&self, view: &dyn WizardViewPort) {
        for stage in &self.stages {
            debug!(percent = stage.percent, "Generation progress");
            view.show_progress(stage);
            tokio::time::sleep(self.delay).await;
        }
    }
}

pub struct GenerationOrchestrator {
    api: Arc<dyn CampaignApiPort>,
    progress: ProgressSequence,
}

impl GenerationOrchestrator {
    pub fn new(api: Arc<dyn CampaignApiPort>, progress: ProgressSequence) -> Self {
        Self { api, progress }
    }

    /// Request a draft for `config` while playing the progress sequence
    ///
    /// No draft is produced unless the service call succeeds.
    #[instrument(skip_all, fields(campaign = %config.name))]
    pub async fn generate(
        &self,
        config: CampaignConfig,
        view: &dyn WizardViewPort,
    ) -> Result<CampaignDraft, ApiError> {
        let settings = config.to_generation_settings();
        info!(
            npcs = settings.num_npcs,
            locations = settings.num_locations,
            "Requesting campaign preview"
        );

        let request = self.api.generate_preview(&settings);
        let progress = async {
            self.progress.play(view).await;
            Ok::<(), ApiError>(())
        };
        let (response, ()) = tokio::try_join!(request, progress)?;

        let draft = assemble_draft(response, config, settings);
        view.show_progress(&ProgressStage::new(100, COMPLETE_STAGE_LABEL));
        info!(
            draft_id = %draft.id,
            locations = draft.locations.len(),
            npcs = draft.npcs.len(),
            factions = draft.factions.len(),
            quests = draft.quest_hooks.len(),
            "Campaign preview generated"
        );
        Ok(draft)
    }
}

/// Map the service response into a draft, keeping the inputs for finalize
pub fn assemble_draft(
    response: GeneratePreviewResponseDto,
    config: CampaignConfig,
    settings: GenerationSettings,
) -> CampaignDraft {
    let preview = response.preview;
    CampaignDraft {
        id: DraftId::new(),
        generated_at: Utc::now(),
        world_setting: preview.world_setting,
        locations: preview.locations,
        npcs: preview.npcs,
        factions: preview.factions,
        quest_hooks: preview.quest_hooks,
        starting_scenario: preview.starting_scenario,
        config,
        settings,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::time::Instant;

    use super::*;
    use crate::application::dto::{
        FinalizeRequestDto, FinalizeResponseDto, FinalizeSummary, Notice, PreviewDto,
        PreviewModel, SettingsForm,
    };
    use crate::application::services::settings_collector;
    use crate::domain::entities::DraftEntry;
    use crate::domain::value_objects::{
        CampaignTemplate, SelectedTemplate, StepIndicator, TemplateId, WizardStep,
    };

    struct StubApi {
        latency: Duration,
        fail: bool,
    }

    #[async_trait]
    impl CampaignApiPort for StubApi {
        async fn generate_preview(
            &self,
            settings: &GenerationSettings,
        ) -> Result<GeneratePreviewResponseDto, ApiError> {
            tokio::time::sleep(self.latency).await;
            if self.fail {
                return Err(ApiError::Status {
                    status: 502,
                    body: "bad gateway".to_string(),
                });
            }
            let npcs = (0..settings.num_npcs)
                .map(|i| DraftEntry {
                    name: Some(format!("NPC {}", i + 1)),
                    ..Default::default()
                })
                .collect();
            Ok(GeneratePreviewResponseDto {
                preview: PreviewDto {
                    npcs,
                    starting_scenario: "The road forks.".to_string(),
                    ..Default::default()
                },
            })
        }

        async fn finalize(
            &self,
            _request: &FinalizeRequestDto,
        ) -> Result<FinalizeResponseDto, ApiError> {
            unreachable!("not used by the orchestrator")
        }

        async fn list_templates(&self) -> Result<Vec<CampaignTemplate>, ApiError> {
            Ok(vec![])
        }
    }

    #[derive(Default)]
    struct ProgressLog {
        stages: Mutex<Vec<(u8, Instant)>>,
    }

    impl WizardViewPort for ProgressLog {
        fn show_step(&self, _step: WizardStep, _indicators: &[StepIndicator]) {}
        fn show_form(&self, _form: &SettingsForm) {}
        fn highlight_template(&self, _template: Option<&TemplateId>) {}
        fn show_progress(&self, stage: &ProgressStage) {
            self.stages.lock().unwrap().push((stage.percent, Instant::now()));
        }
        fn render_preview(&self, _preview: &PreviewModel) {}
        fn show_success(&self, _summary: &FinalizeSummary) {}
        fn notify(&self, _notice: Notice) {}
    }

    fn config() -> CampaignConfig {
        let form = SettingsForm {
            name: "Ember Hollow".to_string(),
            guild_id: "123".to_string(),
            dm_user_id: "456".to_string(),
            ..Default::default()
        };
        settings_collector::collect(
            &form,
            &SelectedTemplate::Template(TemplateId::new("classic_fantasy")),
        )
    }

    fn orchestrator(latency: Duration, fail: bool) -> GenerationOrchestrator {
        GenerationOrchestrator::new(
            Arc::new(StubApi { latency, fail }),
            ProgressSequence::new(Duration::from_millis(100)),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_service_still_waits_for_progress() {
        let view = ProgressLog::default();
        let started = Instant::now();

        let draft = orchestrator(Duration::from_millis(10), false)
            .generate(config(), &view)
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(500));
        assert_eq!(draft.npcs.len(), 8);
        let percents: Vec<u8> = view.stages.lock().unwrap().iter().map(|s| s.0).collect();
        assert_eq!(percents, vec![15, 35, 55, 75, 90, 100]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_service_is_awaited_after_progress() {
        let view = ProgressLog::default();
        let started = Instant::now();

        orchestrator(Duration::from_secs(3), false)
            .generate(config(), &view)
            .await
            .unwrap();

        let stages = view.stages.lock().unwrap();
        let (percent, at) = stages.last().copied().unwrap();
        assert_eq!(percent, 100);
        assert!(at.duration_since(started) >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_produces_no_draft_and_no_final_stage() {
        let view = ProgressLog::default();

        let result = orchestrator(Duration::from_millis(150), true)
            .generate(config(), &view)
            .await;

        assert!(matches!(result, Err(ApiError::Status { status: 502, .. })));
        let percents: Vec<u8> = view.stages.lock().unwrap().iter().map(|s| s.0).collect();
        assert!(!percents.contains(&100));
    }

    #[test]
    fn test_assemble_draft_keeps_outbound_settings() {
        let config = config();
        let settings = config.to_generation_settings();
        let response = GeneratePreviewResponseDto {
            preview: PreviewDto {
                starting_scenario: "Rain on the moor.".to_string(),
                ..Default::default()
            },
        };

        let draft = assemble_draft(response, config.clone(), settings.clone());

        assert_eq!(draft.settings, settings);
        assert_eq!(draft.config, config);
        assert_eq!(draft.settings.world_theme, "classic_fantasy");
        assert_eq!(draft.starting_scenario, "Rain on the moor.");
    }
}
