pub mod check;
pub mod play;
pub mod scenes;

use std::path::Path;

use adv_core::{SceneRepository, loader};
use colored::Colorize;
use tracing::info;

use crate::config::PlayConfig;

/// Load and validate a story file, printing any warnings to stderr.
fn load(path: &Path, config: &PlayConfig) -> Result<SceneRepository, String> {
    let story = loader::from_path(path).map_err(|e| e.to_string())?;
    let repo = SceneRepository::with_config(story, &config.engine).map_err(|e| e.to_string())?;

    for warning in repo.warnings() {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }
    let count = repo.warnings().len();
    if count > 0 {
        eprintln!("  {} warning{}", count, if count == 1 { "" } else { "s" });
    }

    info!(path = %path.display(), scenes = repo.len(), "story loaded");
    Ok(repo)
}
