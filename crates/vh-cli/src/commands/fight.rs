use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use vh_session::{EncounterConfig, EncounterSession};

pub fn run(dir: &Path, seed: u64) -> Result<(), String> {
    let config = EncounterConfig::new(dir).with_seed(seed);
    let mut session =
        EncounterSession::new(config).map_err(|e| format!("failed to open encounter: {e}"))?;

    println!("  {} encounter | Seed: {seed}", "Starting".bold());
    if !session.roster().is_empty() {
        println!(
            "  Restored {} participant(s) from the last session.",
            session.roster().len()
        );
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
