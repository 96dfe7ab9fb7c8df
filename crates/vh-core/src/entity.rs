use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a combat entity, stable for one encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Whether an entity is a player character or an NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A player character. Initiative is typed in by hand or rolled.
    Player,
    /// A non-player character. Always rolled, tracks hit points.
    Npc,
}

impl EntityKind {
    /// Try to parse a kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "player" | "pc" => Some(Self::Player),
            "npc" => Some(Self::Npc),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Npc => write!(f, "npc"),
        }
    }
}

/// A participant in the active encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatEntity {
    /// Unique identifier, assigned at creation.
    pub id: EntityId,
    /// Display name. NPC names are disambiguated at add time.
    pub name: String,
    /// Player or NPC. Fixed once the entity is in the roster.
    pub kind: EntityKind,
    /// Current hit points. Meaningful for NPCs only; may go negative.
    pub current_hp: i32,
    /// Initiative modifier, copied from the originating template.
    pub initiative_modifier: i32,
    /// Initiative total for the encounter. 0 until rolled or entered.
    pub total: i32,
    /// True when a player typed their total instead of rolling.
    /// A rolled total never sets this.
    pub has_manual_total: bool,
    /// Secondary score while a tie is being resolved; 0 otherwise.
    pub tie_breaker: i32,
    /// Cosmetic defeat marker. Never affects ordering or removal.
    pub defeated: bool,
}

impl CombatEntity {
    /// Create a fresh entity with a random ID and unrolled initiative.
    pub fn new(
        name: impl Into<String>,
        kind: EntityKind,
        base_hp: i32,
        initiative_modifier: i32,
    ) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            kind,
            current_hp: base_hp,
            initiative_modifier,
            total: 0,
            has_manual_total: false,
            tie_breaker: 0,
            defeated: false,
        }
    }

    /// True for an NPC at or below zero hit points. Display state only;
    /// a downed NPC stays in the roster.
    pub fn is_down(&self) -> bool {
        self.kind == EntityKind::Npc && self.current_hp <= 0
    }
}
