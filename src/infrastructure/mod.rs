//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Campaign client: reqwest adapter for the generation service
//! - Console view: terminal rendering of the wizard
//! - Config: Application configuration

pub mod campaign_client;
pub mod config;
pub mod console_view;
