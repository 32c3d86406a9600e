//! Data Transfer Objects - For API and view boundaries
//!
//! Wire shapes for the generation service, the raw settings form, and the
//! view models rendered by the wizard view.

pub mod campaign;
pub mod settings_form;
pub mod view_models;

pub use campaign::*;
pub use settings_form::SettingsForm;
pub use view_models::*;
