//! The template library: named presets for roster entities.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use vh_core::{EntityKind, Template};

use crate::error::{StoreError, StoreResult};

/// A name-unique collection of templates, persisted as one JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateLibrary {
    templates: Vec<Template>,
}

impl TemplateLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a library from a JSON file. A missing file is an empty
    /// library, not an error.
    pub fn load(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Save the library to a JSON file.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Add a template. Names are unique (case-insensitive).
    pub fn add(&mut self, template: Template) -> StoreResult<()> {
        if self.get(&template.name).is_some() {
            return Err(StoreError::DuplicateTemplate(template.name));
        }
        self.templates.push(template);
        Ok(())
    }

    /// Replace the template with the given name. Renaming onto another
    /// existing template is rejected.
    pub fn update(&mut self, name: &str, template: Template) -> StoreResult<()> {
        if !template.name.eq_ignore_ascii_case(name) && self.get(&template.name).is_some() {
            return Err(StoreError::DuplicateTemplate(template.name));
        }
        let slot = self
            .templates
            .iter_mut()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| StoreError::TemplateNotFound(name.to_string()))?;
        *slot = template;
        Ok(())
    }

    /// Remove a template by name, returning it.
    pub fn remove(&mut self, name: &str) -> StoreResult<Template> {
        let pos = self
            .templates
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| StoreError::TemplateNotFound(name.to_string()))?;
        Ok(self.templates.remove(pos))
    }

    /// Find a template by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// All templates, sorted by name.
    pub fn templates(&self) -> Vec<&Template> {
        let mut out: Vec<&Template> = self.templates.iter().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Player templates, sorted by name.
    pub fn players(&self) -> Vec<&Template> {
        self.of_kind(EntityKind::Player)
    }

    /// NPC templates, sorted by name.
    pub fn npcs(&self) -> Vec<&Template> {
        self.of_kind(EntityKind::Npc)
    }

    /// Number of templates in the library.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn of_kind(&self, kind: EntityKind) -> Vec<&Template> {
        let mut out: Vec<&Template> = self.templates.iter().filter(|t| t.kind == kind).collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn goblin() -> Template {
        Template::new("Goblin", EntityKind::Npc, 7, 2)
    }

    #[test]
    fn add_and_get() {
        let mut lib = TemplateLibrary::new();
        lib.add(goblin()).unwrap();
        assert_eq!(lib.len(), 1);
        assert!(lib.get("goblin").is_some());
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut lib = TemplateLibrary::new();
        lib.add(goblin()).unwrap();
        let err = lib
            .add(Template::new("goblin", EntityKind::Npc, 10, 0))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateTemplate(_)));
        assert_eq!(lib.len(), 1);
    }

    #[test]
    fn update_replaces_all_fields() {
        let mut lib = TemplateLibrary::new();
        lib.add(goblin()).unwrap();
        lib.update("Goblin", Template::new("Hobgoblin", EntityKind::Npc, 11, 1))
            .unwrap();
        assert!(lib.get("Goblin").is_none());
        let t = lib.get("Hobgoblin").unwrap();
        assert_eq!(t.base_hp, 11);
    }

    #[test]
    fn update_cannot_steal_a_name() {
        let mut lib = TemplateLibrary::new();
        lib.add(goblin()).unwrap();
        lib.add(Template::new("Orc", EntityKind::Npc, 15, 0)).unwrap();
        let err = lib
            .update("Orc", Template::new("Goblin", EntityKind::Npc, 15, 0))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateTemplate(_)));
    }

    #[test]
    fn update_unknown_template() {
        let mut lib = TemplateLibrary::new();
        let err = lib.update("Ghost", goblin()).unwrap_err();
        assert!(matches!(err, StoreError::TemplateNotFound(_)));
    }

    #[test]
    fn remove_returns_the_template() {
        let mut lib = TemplateLibrary::new();
        lib.add(goblin()).unwrap();
        let t = lib.remove("GOBLIN").unwrap();
        assert_eq!(t.name, "Goblin");
        assert!(lib.is_empty());
    }

    #[test]
    fn listing_is_sorted_and_grouped() {
        let mut lib = TemplateLibrary::new();
        lib.add(Template::new("Orc", EntityKind::Npc, 15, 0)).unwrap();
        lib.add(Template::new("Kira", EntityKind::Player, 0, 3)).unwrap();
        lib.add(goblin()).unwrap();
        lib.add(Template::new("Brand", EntityKind::Player, 0, 1)).unwrap();

        let names: Vec<&str> = lib.templates().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Brand", "Goblin", "Kira", "Orc"]);

        let players: Vec<&str> = lib.players().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(players, ["Brand", "Kira"]);

        let npcs: Vec<&str> = lib.npcs().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(npcs, ["Goblin", "Orc"]);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let lib = TemplateLibrary::load(&dir.path().join("templates.json")).unwrap();
        assert!(lib.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("templates.json");

        let mut lib = TemplateLibrary::new();
        lib.add(goblin()).unwrap();
        lib.add(Template::new("Kira", EntityKind::Player, 0, 3)).unwrap();
        lib.save(&path).unwrap();

        let back = TemplateLibrary::load(&path).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.get("Goblin").unwrap().base_hp, 7);
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            TemplateLibrary::load(&path),
            Err(StoreError::Json(_))
        ));
    }
}
