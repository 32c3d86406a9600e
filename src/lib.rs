//! Campaign Wizard - Generate, review, and commit TTRPG campaigns
//!
//! The wizard collects campaign settings, asks a generation service for a
//! draft world, lets the user prune the draft, and commits it through a
//! separate finalize call.

pub mod application;
pub mod domain;
pub mod infrastructure;
