//! Campaign Wizard - Settings, generation, review, and commit in one flow
//!
//! The wizard owns all mutable state (form, template selection, active step,
//! draft) behind a single lock. The lock is never held across a network call:
//! generation and finalize release it while the service works and re-check
//! the run epoch when they resume, so a `reset` in between wins. Dropping a
//! `generate` or `finalize` future mid-request rolls its step back.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use crate::application::dto::{FinalizeSummary, Notice, PreviewModel, SettingsForm};
use crate::application::ports::outbound::{ApiError, CampaignApiPort, WizardViewPort};
use crate::application::services::finalize_controller::FinalizeController;
use crate::application::services::generation_orchestrator::{
    GenerationOrchestrator, ProgressSequence,
};
use crate::application::services::preview_store::PreviewStore;
use crate::application::services::settings_collector;
use crate::application::services::template_catalog::TemplateCatalog;
use crate::application::services::wizard_state_machine::{TransitionError, WizardStateMachine};
use crate::domain::entities::{CampaignDraft, DraftEntry, EntityKind};
use crate::domain::value_objects::{
    step_indicators, CampaignConfig, CampaignTemplate, SelectedTemplate, ValidationError,
    WizardStep,
};

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Campaign generation is already in progress")]
    GenerationInProgress,
    #[error("Campaign is already being saved")]
    FinalizeInProgress,
    #[error("No campaign draft to finalize")]
    NoDraft,
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("Failed to generate campaign: {0}")]
    Generation(ApiError),
    #[error("Failed to create campaign: {0}")]
    Finalize(ApiError),
    #[error("Failed to load campaign templates: {0}")]
    Templates(ApiError),
    #[error("The wizard was reset before the request finished")]
    Superseded,
}

#[derive(Debug)]
struct WizardState {
    machine: WizardStateMachine,
    form: SettingsForm,
    selected: SelectedTemplate,
    catalog: TemplateCatalog,
    store: PreviewStore,
    /// Bumped on every reset; in-flight requests from an older epoch are dropped
    epoch: u64,
    finalizing: bool,
}

#[derive(Debug, Clone, Copy)]
enum Request {
    Generate,
    Finalize,
}

/// Rolls back an in-flight request if its future is dropped before it finishes
struct InFlight<'a> {
    wizard: &'a CampaignWizard,
    request: Request,
    epoch: u64,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn new(wizard: &'a CampaignWizard, request: Request, epoch: u64) -> Self {
        Self {
            wizard,
            request,
            epoch,
            armed: true,
        }
    }

    /// Call once the completion has the state lock
    fn complete(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        // The lock is never held across the request, so this only fails if
        // another caller is mid-update; `reset` still recovers then.
        let Ok(mut state) = self.wizard.state.try_write() else {
            warn!(request = ?self.request, "Cancelled request left wizard state as is");
            return;
        };
        if state.epoch != self.epoch {
            return;
        }
        match self.request {
            Request::Generate => {
                state.store.clear();
                if let Err(e) = state.machine.go_to(WizardStep::Settings, &*self.wizard.view) {
                    warn!(error = %e, "Cancelled generation could not return to settings");
                }
            }
            Request::Finalize => state.finalizing = false,
        }
        debug!(request = ?self.request, "Cancelled request rolled back");
    }
}

pub struct CampaignWizard {
    state: RwLock<WizardState>,
    api: Arc<dyn CampaignApiPort>,
    view: Arc<dyn WizardViewPort>,
    generator: GenerationOrchestrator,
    finalizer: FinalizeController,
}

impl CampaignWizard {
    pub fn new(
        api: Arc<dyn CampaignApiPort>,
        view: Arc<dyn WizardViewPort>,
        progress: ProgressSequence,
    ) -> Self {
        Self {
            state: RwLock::new(WizardState {
                machine: WizardStateMachine::new(),
                form: SettingsForm::default(),
                selected: SelectedTemplate::Custom,
                catalog: TemplateCatalog::builtin(),
                store: PreviewStore::new(),
                epoch: 0,
                finalizing: false,
            }),
            generator: GenerationOrchestrator::new(api.clone(), progress),
            finalizer: FinalizeController::new(api.clone()),
            api,
            view,
        }
    }

    /// Draw the initial settings step
    pub async fn open(&self) {
        let state = self.state.read().await;
        let step = state.machine.current();
        self.view.show_form(&state.form);
        self.view.highlight_template(state.selected.template_id());
        self.view.show_step(step, &step_indicators(step));
    }

    pub async fn step(&self) -> WizardStep {
        self.state.read().await.machine.current()
    }

    pub async fn form(&self) -> SettingsForm {
        self.state.read().await.form.clone()
    }

    pub async fn selected_template(&self) -> SelectedTemplate {
        self.state.read().await.selected.clone()
    }

    pub async fn templates(&self) -> Vec<CampaignTemplate> {
        self.state.read().await.catalog.templates().to_vec()
    }

    /// Snapshot of the current draft, if any
    pub async fn draft(&self) -> Option<CampaignDraft> {
        self.state.read().await.store.draft().cloned()
    }

    pub async fn preview(&self) -> Option<PreviewModel> {
        self.state
            .read()
            .await
            .store
            .draft()
            .map(PreviewModel::from_draft)
    }

    /// What `generate` would send right now
    pub async fn collect(&self) -> CampaignConfig {
        let state = self.state.read().await;
        settings_collector::collect(&state.form, &state.selected)
    }

    /// Change form fields as the user types
    pub async fn update_form<F>(&self, edit: F)
    where
        F: FnOnce(&mut SettingsForm) + Send,
    {
        let mut state = self.state.write().await;
        edit(&mut state.form);
    }

    /// Select a template (or custom) and apply its defaults to the form
    ///
    /// Only the fields the template defines are overwritten.
    #[instrument(skip(self))]
    pub async fn select_template(&self, selected: SelectedTemplate) {
        let mut state = self.state.write().await;
        if let Some(id) = selected.template_id() {
            let defaults = state.catalog.lookup(id);
            if defaults.is_empty() {
                debug!(template = %id, "Template has no defaults");
            }
            state.form.apply_template_defaults(&defaults);
            self.view.show_form(&state.form);
        }
        self.view.highlight_template(selected.template_id());
        state.selected = selected;
    }

    /// Merge the service's templates into the catalog
    ///
    /// A failure leaves the built-in presets in place.
    #[instrument(skip(self))]
    pub async fn refresh_templates(&self) -> Result<usize, WizardError> {
        match self.api.list_templates().await {
            Ok(remote) => {
                let count = remote.len();
                self.state.write().await.catalog.merge(remote);
                info!(count, "Campaign templates refreshed");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "Using built-in campaign templates");
                let error = WizardError::Templates(e);
                self.view.notify(Notice::warning(error.to_string()));
                Err(error)
            }
        }
    }

    /// Generate a draft from the current settings and move to review
    ///
    /// Validation failures leave the wizard on settings without calling the
    /// service. A service failure returns to settings with no draft.
    #[instrument(skip(self))]
    pub async fn generate(&self) -> Result<(), WizardError> {
        let (config, epoch) = {
            let mut state = self.state.write().await;
            match state.machine.current() {
                WizardStep::Settings => {}
                WizardStep::Generating => {
                    warn!("Generate requested while already generating");
                    return Err(self.report(WizardError::GenerationInProgress));
                }
                from => {
                    return Err(self.report(
                        TransitionError {
                            from,
                            to: WizardStep::Generating,
                        }
                        .into(),
                    ));
                }
            }

            let config = settings_collector::collect(&state.form, &state.selected);
            if let Err(e) = config.validate() {
                debug!(error = %e, "Campaign settings incomplete");
                return Err(self.report(e.into()));
            }

            state.store.clear();
            state.machine.go_to(WizardStep::Generating, &*self.view)?;
            (config, state.epoch)
        };

        let mut in_flight = InFlight::new(self, Request::Generate, epoch);
        let result = self.generator.generate(config, &*self.view).await;

        let mut state = self.state.write().await;
        in_flight.complete();
        if state.epoch != epoch {
            debug!("Discarding generation result from before reset");
            return Err(WizardError::Superseded);
        }

        match result {
            Ok(draft) => {
                state.store.load(draft);
                state.machine.go_to(WizardStep::Review, &*self.view)?;
                state.store.render(&*self.view);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Campaign generation failed");
                state.store.clear();
                state.machine.go_to(WizardStep::Settings, &*self.view)?;
                Err(self.report(WizardError::Generation(e)))
            }
        }
    }

    /// Drop one entry from the draft; a no-op without a draft
    #[instrument(skip(self))]
    pub async fn remove(&self, kind: EntityKind, index: usize) -> Option<DraftEntry> {
        let mut state = self.state.write().await;
        state.store.remove(kind, index, &*self.view)
    }

    /// Placeholder: acknowledges the request without changing the draft
    pub async fn edit(&self, kind: EntityKind, index: usize) {
        let state = self.state.read().await;
        state.store.edit(kind, index, &*self.view);
    }

    /// Persist the current (possibly pruned) draft
    ///
    /// On failure the wizard stays on review with the draft untouched so the
    /// user can retry.
    #[instrument(skip(self))]
    pub async fn finalize(&self) -> Result<FinalizeSummary, WizardError> {
        let (request, epoch) = {
            let mut state = self.state.write().await;
            if state.finalizing {
                return Err(self.report(WizardError::FinalizeInProgress));
            }
            let Some(draft) = state.store.draft() else {
                return Err(self.report(WizardError::NoDraft));
            };
            let request = FinalizeController::build_request(draft);
            let from = state.machine.current();
            if from != WizardStep::Review {
                return Err(self.report(
                    TransitionError {
                        from,
                        to: WizardStep::Success,
                    }
                    .into(),
                ));
            }
            state.finalizing = true;
            (request, state.epoch)
        };

        let mut in_flight = InFlight::new(self, Request::Finalize, epoch);
        let result = self.finalizer.commit(&request).await;

        let mut state = self.state.write().await;
        in_flight.complete();
        if state.epoch != epoch {
            debug!("Discarding finalize result from before reset");
            return Err(WizardError::Superseded);
        }
        state.finalizing = false;

        match result {
            Ok(summary) => {
                state.store.clear();
                state.machine.go_to(WizardStep::Success, &*self.view)?;
                self.view.show_success(&summary);
                self.view.notify(Notice::success(summary.message.clone()));
                Ok(summary)
            }
            Err(e) => {
                error!(error = %e, "Campaign finalize failed");
                Err(self.report(WizardError::Finalize(e)))
            }
        }
    }

    /// Discard everything and start over on the settings step
    #[instrument(skip(self))]
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        if let Some(draft) = state.store.clear() {
            debug!(draft_id = %draft.id, "Draft discarded");
        }
        state.selected = SelectedTemplate::Custom;
        state.form = SettingsForm::default();
        state.epoch += 1;
        state.finalizing = false;

        self.view.highlight_template(None);
        self.view.show_form(&state.form);
        if let Err(e) = state.machine.go_to(WizardStep::Settings, &*self.view) {
            warn!(error = %e, "Reset could not return to settings");
        }
        info!("Campaign wizard reset");
    }

    /// Surface an error to the user and hand it back
    fn report(&self, error: WizardError) -> WizardError {
        self.view.notify(Notice::error(error.to_string()));
        error
    }
}
