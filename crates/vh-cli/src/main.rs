//! CLI frontend for Vorhut, a tabletop-combat initiative tracker.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vh",
    about = "Vorhut — initiative tracking for the table",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the template library
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// List archived battles, newest first
    History {
        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Run an interactive encounter
    Fight {
        /// RNG seed for reproducible rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Subcommand)]
enum TemplateAction {
    /// Add a template to the library
    Add {
        /// Template name
        name: String,

        /// Kind of entity: player or npc
        #[arg(short, long, default_value = "npc")]
        kind: String,

        /// Base hit points (meaningful for NPCs)
        #[arg(long, default_value = "10")]
        hp: i32,

        /// Initiative modifier
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        modifier: i32,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List templates, grouped by kind
    List {
        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Change a template's values
    Edit {
        /// Template to edit
        name: String,

        /// New name
        #[arg(long)]
        rename: Option<String>,

        /// New kind: player or npc
        #[arg(short, long)]
        kind: Option<String>,

        /// New base hit points
        #[arg(long)]
        hp: Option<i32>,

        /// New initiative modifier
        #[arg(short, long, allow_hyphen_values = true)]
        modifier: Option<i32>,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Remove a template from the library
    Remove {
        /// Template to remove
        name: String,

        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Template { action } => match action {
            TemplateAction::Add {
                name,
                kind,
                hp,
                modifier,
                dir,
            } => commands::template::add(&dir, &name, &kind, hp, modifier),
            TemplateAction::List { dir } => commands::template::list(&dir),
            TemplateAction::Edit {
                name,
                rename,
                kind,
                hp,
                modifier,
                dir,
            } => commands::template::edit(&dir, &name, rename.as_deref(), kind.as_deref(), hp, modifier),
            TemplateAction::Remove { name, dir } => commands::template::remove(&dir, &name),
        },
        Commands::History { dir } => commands::history::run(&dir),
        Commands::Fight { seed, dir } => commands::fight::run(&dir, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
