use serde::{Deserialize, Serialize};

use crate::entity::{CombatEntity, EntityId, EntityKind};
use crate::error::{RosterError, RosterResult};
use crate::template::Template;

/// The combat entities of the active encounter, in insertion order.
///
/// The roster owns its entities. Iteration order only becomes initiative
/// order after the engine has sorted it; before a roll it is the order
/// entities were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    entities: Vec<CombatEntity>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a roster from a saved snapshot.
    pub fn from_entities(entities: Vec<CombatEntity>) -> Self {
        Self { entities }
    }

    /// Instantiate a template into the roster.
    ///
    /// Adding a player whose name is already present is rejected and leaves
    /// the roster untouched. NPCs sharing a base name get a numeric suffix:
    /// "Goblin", "Goblin 2", "Goblin 3". The suffix counts existing names
    /// that start with the template name, so removing "Goblin 2" and adding
    /// again produces a second "Goblin 2" — a known weakness of the scheme,
    /// kept for compatibility.
    pub fn add_from_template(&mut self, template: &Template) -> RosterResult<&CombatEntity> {
        let name = match template.kind {
            EntityKind::Player => {
                if self.entities.iter().any(|e| e.name == template.name) {
                    return Err(RosterError::DuplicatePlayer(template.name.clone()));
                }
                template.name.clone()
            }
            EntityKind::Npc => {
                let count = self
                    .entities
                    .iter()
                    .filter(|e| e.name.starts_with(template.name.as_str()))
                    .count();
                if count > 0 {
                    format!("{} {}", template.name, count + 1)
                } else {
                    template.name.clone()
                }
            }
        };

        self.entities.push(CombatEntity::new(
            name,
            template.kind,
            template.base_hp,
            template.initiative_modifier,
        ));
        Ok(self.entities.last().expect("roster grew by one"))
    }

    /// Remove an entity by ID, returning it.
    pub fn remove(&mut self, id: EntityId) -> RosterResult<CombatEntity> {
        let pos = self
            .entities
            .iter()
            .position(|e| e.id == id)
            .ok_or(RosterError::EntityNotFound(id))?;
        Ok(self.entities.remove(pos))
    }

    /// Empty the roster unconditionally.
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Apply damage to an entity. The amount is taken as its absolute
    /// value — the roster only ever subtracts — and there is no floor, so
    /// hit points can go negative. Returns the new value.
    pub fn adjust_hp(&mut self, id: EntityId, amount: i32) -> RosterResult<i32> {
        let entity = self.entity_mut(id)?;
        entity.current_hp -= amount.abs();
        Ok(entity.current_hp)
    }

    /// Overwrite an entity's initiative total with a hand-entered value.
    ///
    /// A nonzero value marks the entity as manually scored, which exempts
    /// it from the next roll. Entering 0 clears the manual entry.
    pub fn set_manual_initiative(&mut self, id: EntityId, value: i32) -> RosterResult<()> {
        let entity = self.entity_mut(id)?;
        entity.total = value;
        entity.has_manual_total = value != 0;
        Ok(())
    }

    /// Flip the cosmetic defeat marker. Returns the new state.
    pub fn toggle_defeated(&mut self, id: EntityId) -> RosterResult<bool> {
        let entity = self.entity_mut(id)?;
        entity.defeated = !entity.defeated;
        Ok(entity.defeated)
    }

    /// Entity names joined for archival text, in current iteration order.
    pub fn summary(&self) -> String {
        self.entities
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&CombatEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn entity_mut(&mut self, id: EntityId) -> RosterResult<&mut CombatEntity> {
        self.entities
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RosterError::EntityNotFound(id))
    }

    /// Find an entity by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&CombatEntity> {
        self.entities
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// All entities in iteration order.
    pub fn entities(&self) -> &[CombatEntity] {
        &self.entities
    }

    /// Mutable access to the entities as a slice. The slice cannot grow or
    /// shrink, so roster-level invariants hold; the engine uses this to
    /// write totals and reorder.
    pub fn entities_mut(&mut self) -> &mut [CombatEntity] {
        &mut self.entities
    }

    /// Number of entities in the roster.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
