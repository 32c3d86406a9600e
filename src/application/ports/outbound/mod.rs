//! Outbound ports - Interfaces that the application requires from external systems

mod campaign_api_port;
mod wizard_view_port;

pub use campaign_api_port::{ApiError, CampaignApiPort};
pub use wizard_view_port::WizardViewPort;
