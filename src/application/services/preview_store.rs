//! Preview Store & Editor - Sole owner of the in-memory draft
//!
//! Every mutation re-renders from the live draft so the review step never
//! shows a stale copy.

use tracing::{debug, info};

use crate::application::dto::{Notice, PreviewModel};
use crate::application::ports::outbound::WizardViewPort;
use crate::domain::entities::{CampaignDraft, DraftEntry, EntityKind};

#[derive(Debug, Default)]
pub struct PreviewStore {
    draft: Option<CampaignDraft>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> Option<&CampaignDraft> {
        self.draft.as_ref()
    }

    /// Replace whatever draft is held
    pub fn load(&mut self, draft: CampaignDraft) {
        debug!(draft_id = %draft.id, "Draft loaded into preview");
        self.draft = Some(draft);
    }

    /// Discard the draft, returning it if there was one
    pub fn clear(&mut self) -> Option<CampaignDraft> {
        self.draft.take()
    }

    /// Draw the current draft; nothing is drawn without one
    pub fn render(&self, view: &dyn WizardViewPort) -> Option<PreviewModel> {
        let model = PreviewModel::from_draft(self.draft.as_ref()?);
        view.render_preview(&model);
        Some(model)
    }

    /// Delete one entry and re-render
    ///
    /// Silently does nothing when no draft is held.
    pub fn remove(
        &mut self,
        kind: EntityKind,
        index: usize,
        view: &dyn WizardViewPort,
    ) -> Option<DraftEntry> {
        let draft = self.draft.as_mut()?;
        let removed = draft.remove(kind, index);
        match &removed {
            Some(entry) => info!(
                %kind,
                index,
                name = entry.display_name(),
                remaining = draft.count(kind),
                "Removed draft entry"
            ),
            None => debug!(%kind, index, "Remove ignored, index out of range"),
        }
        self.render(view);
        removed
    }

    /// Editing individual entries is not supported; the user is told so
    pub fn edit(&self, kind: EntityKind, index: usize, view: &dyn WizardViewPort) {
        let name = self
            .draft
            .as_ref()
            .and_then(|d| d.entries(kind).get(index))
            .map(|e| e.display_name().to_string())
            .unwrap_or_else(|| format!("{} #{}", kind, index.saturating_add(1)));
        view.notify(Notice::info(format!(
            "Editing \"{}\" is not available yet. Remove it or finalize as is.",
            name
        )));
    }
}
