//! Wizard State Machine - The only gate for changing the visible panel

use tracing::debug;

use crate::application::ports::outbound::WizardViewPort;
use crate::domain::value_objects::{step_indicators, WizardStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Cannot move from {from} to {to}")]
pub struct TransitionError {
    pub from: WizardStep,
    pub to: WizardStep,
}

#[derive(Debug, Default)]
pub struct WizardStateMachine {
    current: WizardStep,
}

impl WizardStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// Move to `to` and show its panel
    ///
    /// Re-entering the current step only redraws it.
    pub fn go_to(
        &mut self,
        to: WizardStep,
        view: &dyn WizardViewPort,
    ) -> Result<(), TransitionError> {
        let from = self.current;
        if from != to && !from.can_transition_to(to) {
            return Err(TransitionError { from, to });
        }
        debug!(%from, %to, "Wizard step change");
        self.current = to;
        view.show_step(to, &step_indicators(to));
        Ok(())
    }
}
