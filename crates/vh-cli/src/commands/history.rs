use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use vh_store::{BattleArchive, HISTORY_FILE};

pub fn run(dir: &Path) -> Result<(), String> {
    let archive = BattleArchive::load(&dir.join(HISTORY_FILE)).map_err(|e| e.to_string())?;
    if archive.is_empty() {
        println!("  No battles archived yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Date", "Summary"]);

    for entry in archive.entries() {
        table.add_row(vec![
            entry.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
            entry.summary.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} battles", archive.len());

    Ok(())
}
