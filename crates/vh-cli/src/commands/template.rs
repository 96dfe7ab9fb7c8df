use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use vh_core::{EntityKind, Template};

pub fn add(dir: &Path, name: &str, kind: &str, hp: i32, modifier: i32) -> Result<(), String> {
    let kind = parse_kind(kind)?;
    let mut library = super::load_library(dir)?;
    library
        .add(Template::new(name, kind, hp, modifier))
        .map_err(|e| e.to_string())?;
    super::save_library(dir, &library)?;

    println!("  Added template '{name}'.");
    Ok(())
}

pub fn list(dir: &Path) -> Result<(), String> {
    let library = super::load_library(dir)?;
    if library.is_empty() {
        println!("  No templates yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Kind", "HP", "Mod"]);

    for t in library.templates() {
        let hp = match t.kind {
            EntityKind::Npc => t.base_hp.to_string(),
            EntityKind::Player => "—".to_string(),
        };
        table.add_row(vec![
            t.name.clone(),
            t.kind.to_string(),
            hp,
            format!("{:+}", t.initiative_modifier),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} templates", library.len());

    Ok(())
}

pub fn edit(
    dir: &Path,
    name: &str,
    rename: Option<&str>,
    kind: Option<&str>,
    hp: Option<i32>,
    modifier: Option<i32>,
) -> Result<(), String> {
    let mut library = super::load_library(dir)?;
    let current = library
        .get(name)
        .cloned()
        .ok_or_else(|| format!("template not found: \"{name}\""))?;

    let updated = Template::new(
        rename.unwrap_or(&current.name),
        match kind {
            Some(k) => parse_kind(k)?,
            None => current.kind,
        },
        hp.unwrap_or(current.base_hp),
        modifier.unwrap_or(current.initiative_modifier),
    );
    let updated_name = updated.name.clone();

    library.update(name, updated).map_err(|e| e.to_string())?;
    super::save_library(dir, &library)?;

    println!("  Updated template '{updated_name}'.");
    Ok(())
}

pub fn remove(dir: &Path, name: &str) -> Result<(), String> {
    let mut library = super::load_library(dir)?;
    let removed = library.remove(name).map_err(|e| e.to_string())?;
    super::save_library(dir, &library)?;

    println!("  Removed template '{}'.", removed.name);
    Ok(())
}

fn parse_kind(kind: &str) -> Result<EntityKind, String> {
    EntityKind::parse(kind).ok_or_else(|| format!("unknown kind '{kind}', use: player, npc"))
}
