//! Application layer - Use cases, ports, and DTOs
//!
//! This layer contains:
//! - Services: the wizard and its collaborators
//! - Ports: the generation service and the view the wizard drives
//! - DTOs: wire shapes, the raw settings form, and view models

pub mod dto;
pub mod ports;
pub mod services;
