//! Domain layer - Core wizard concepts with no I/O
//!
//! This layer contains:
//! - Entities: the campaign draft and its generated entries
//! - Value Objects: settings snapshot, templates, wizard steps, ids

pub mod entities;
pub mod value_objects;
