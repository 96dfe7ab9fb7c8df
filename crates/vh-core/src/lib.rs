//! Core types for Vorhut: combat entities, templates, and the encounter roster.
//!
//! This crate defines the data model the initiative engine operates on. It is
//! independent of dice and persistence — you can build a [`Roster`]
//! programmatically or deserialize one from JSON.

/// Combat entity types and identifiers.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// The roster that owns the entities of the active encounter.
pub mod roster;
/// Reusable presets from which roster entities are instantiated.
pub mod template;

/// Re-export entity types.
pub use entity::{CombatEntity, EntityId, EntityKind};
/// Re-export error types.
pub use error::{RosterError, RosterResult};
/// Re-export the roster.
pub use roster::Roster;
/// Re-export the template type.
pub use template::Template;
