//! Ports - Boundaries between the wizard and the outside world

pub mod outbound;
