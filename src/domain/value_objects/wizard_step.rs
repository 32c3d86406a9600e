//! Wizard steps and the step indicator

use serde::{Deserialize, Serialize};

/// The four ordered wizard states
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Settings,
    Generating,
    Review,
    Success,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Settings,
        WizardStep::Generating,
        WizardStep::Review,
        WizardStep::Success,
    ];

    /// One-based position, as shown in the step indicator
    pub fn number(&self) -> u8 {
        match self {
            Self::Settings => 1,
            Self::Generating => 2,
            Self::Review => 3,
            Self::Success => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::Generating => "Generating",
            Self::Review => "Review",
            Self::Success => "Done",
        }
    }

    /// Whether moving from `self` to `to` is a legal wizard transition
    ///
    /// Returning to settings is always allowed (reset, failed generation).
    pub fn can_transition_to(&self, to: WizardStep) -> bool {
        matches!(
            (self, to),
            (_, Self::Settings)
                | (Self::Settings, Self::Generating)
                | (Self::Generating, Self::Review)
                | (Self::Review, Self::Success)
        )
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// One entry of the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepIndicator {
    pub step: WizardStep,
    pub status: StepStatus,
}

/// Build the indicator for `active`: lower steps completed, higher pending
pub fn step_indicators(active: WizardStep) -> Vec<StepIndicator> {
    WizardStep::ALL
        .iter()
        .map(|&step| StepIndicator {
            step,
            status: match step.cmp(&active) {
                std::cmp::Ordering::Less => StepStatus::Completed,
                std::cmp::Ordering::Equal => StepStatus::Active,
                std::cmp::Ordering::Greater => StepStatus::Pending,
            },
        })
        .collect()
}
