use std::collections::HashSet;
use std::path::Path;

use colored::Colorize;
use adv_core::Scene;
use comfy_table::{ContentArrangement, Table};

use crate::config::PlayConfig;

pub fn run(path: &Path, config: &PlayConfig) -> Result<(), String> {
    let repo = super::load(path, config)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scene", "End", "Choices", "Leads to"]);

    for scene in repo.scenes() {
        let targets = unique_targets(scene);
        let leads_to = if targets.is_empty() {
            "—".to_string()
        } else {
            targets.join(", ")
        };

        table.add_row(vec![
            scene.id.clone(),
            if scene.is_end { "yes" } else { "" }.to_string(),
            scene.choices.len().to_string(),
            leads_to,
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} scenes, starting at {}",
        repo.len(),
        repo.start_scene_id().bold()
    );

    Ok(())
}

/// Goto targets of `scene` in first-seen order, each listed once.
fn unique_targets(scene: &Scene) -> Vec<&str> {
    let mut seen = HashSet::new();
    scene
        .goto_targets()
        .filter(|target| seen.insert(*target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adv_core::{Choice, Effect};

    #[test]
    fn targets_listed_once_in_order() {
        let scene = Scene::new("a", "A")
            .with_choice(Choice::new(1, "To b").with_effect(Effect::goto("b")))
            .with_choice(Choice::new(2, "To c").with_effect(Effect::goto("c")))
            .with_choice(Choice::new(3, "Back to b").with_effect(Effect::goto("b")));

        assert_eq!(unique_targets(&scene), vec!["b", "c"]);
    }

    #[test]
    fn no_targets() {
        let scene = Scene::new("a", "A")
            .with_choice(Choice::new(1, "Wait").with_effect(Effect::set_flag("waited")));

        assert!(unique_targets(&scene).is_empty());
    }
}
