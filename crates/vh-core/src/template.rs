//! Reusable presets for roster entities.

use serde::{Deserialize, Serialize};

use crate::entity::EntityKind;

/// A named preset from which roster entities are instantiated.
///
/// Templates live in the library; the roster copies their values at add
/// time, so later edits never touch entities already in an encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Template name, unique within the library.
    pub name: String,
    /// Kind of entity this template produces.
    pub kind: EntityKind,
    /// Starting hit points for NPC instances.
    pub base_hp: i32,
    /// Initiative modifier for instances.
    pub initiative_modifier: i32,
}

impl Template {
    /// Create a new template.
    pub fn new(
        name: impl Into<String>,
        kind: EntityKind,
        base_hp: i32,
        initiative_modifier: i32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            base_hp,
            initiative_modifier,
        }
    }
}
