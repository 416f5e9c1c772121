use std::path::Path;

use colored::Colorize;

use crate::config::PlayConfig;

pub fn run(path: &Path, config: &PlayConfig) -> Result<(), String> {
    let repo = super::load(path, config)?;

    let choices: usize = repo.scenes().map(|s| s.choices.len()).sum();
    let endings = repo.scenes().filter(|s| s.is_end).count();

    println!(
        "  {} for '{}'.",
        "All checks passed".green().bold(),
        path.display()
    );
    println!(
        "  {} scenes, {} choices, {} endings (start: {})",
        repo.len(),
        choices,
        endings,
        repo.start_scene_id()
    );

    Ok(())
}
