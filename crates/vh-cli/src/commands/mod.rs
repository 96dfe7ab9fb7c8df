pub mod fight;
pub mod history;
pub mod template;

use std::path::{Path, PathBuf};

use vh_store::{TEMPLATES_FILE, TemplateLibrary};

/// Path of the template library inside the data directory.
fn templates_path(dir: &Path) -> PathBuf {
    dir.join(TEMPLATES_FILE)
}

/// Load the template library, mapping failures to a printable message.
fn load_library(dir: &Path) -> Result<TemplateLibrary, String> {
    TemplateLibrary::load(&templates_path(dir)).map_err(|e| e.to_string())
}

/// Save the template library, creating the data directory if needed.
fn save_library(dir: &Path, library: &TemplateLibrary) -> Result<(), String> {
    std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    library.save(&templates_path(dir)).map_err(|e| e.to_string())
}
