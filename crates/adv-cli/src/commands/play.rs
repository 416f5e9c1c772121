//! Interactive read-evaluate-print loop over a story.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::path::Path;

use adv_core::{SceneRepository, SceneView, Selection, Session, parse_selection};
use colored::Colorize;
use tracing::{debug, info};

use crate::config::PlayConfig;

/// Play the story at `path` on stdin/stdout.
///
/// Disabled choices are dimmed when stdout is a color terminal.
pub fn run(path: &Path, config: &PlayConfig) -> Result<(), String> {
    let repo = super::load(path, config)?;
    let config = config
        .clone()
        .with_dim_disabled(colored::control::SHOULD_COLORIZE.should_colorize());
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&repo, stdin.lock(), stdout.lock(), &config).map_err(|e| e.to_string())
}

/// Drive one playthrough, reading selections from `input`.
///
/// Returns when an end scene is reached or `input` is exhausted.
pub fn play<R: BufRead, W: Write>(
    repo: &SceneRepository,
    mut input: R,
    mut out: W,
    config: &PlayConfig,
) -> io::Result<()> {
    let mut session = Session::new(repo);

    loop {
        let view = session.view().map_err(io::Error::other)?;

        writeln!(out, "{}", view.text)?;
        writeln!(out)?;

        if view.is_end {
            break;
        }

        write!(out, "{}", render_choices(&view, config))?;
        writeln!(out)?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            info!(scene = view.id, "input closed before the story ended");
            return Ok(());
        }
        writeln!(out)?;

        let Some(number) = parse_selection(&line) else {
            writeln!(out, "Invalid input. Enter a number.")?;
            writeln!(out)?;
            continue;
        };

        match session.select(number).map_err(io::Error::other)? {
            Selection::Applied => {
                debug!(
                    choice = number,
                    scene = session.state().current_scene_id(),
                    "choice applied"
                );
                writeln!(out)?;
            }
            Selection::NoSuchChoice(_) => {
                writeln!(out, "No such option.")?;
                writeln!(out)?;
            }
            Selection::Disabled { reason } => {
                writeln!(out, "{}", reason.unwrap_or(&config.fallback_reason))?;
                writeln!(out)?;
            }
        }
    }

    writeln!(out, "Game ended.")?;
    Ok(())
}

/// One line per choice; disabled choices carry their reason in parentheses.
fn render_choices(view: &SceneView<'_>, config: &PlayConfig) -> String {
    let mut rendered = String::new();
    for choice in &view.choices {
        if choice.enabled {
            let _ = writeln!(rendered, "{}. {}", choice.number, choice.text);
            continue;
        }
        let line = format!(
            "{}. {} ({})",
            choice.number,
            choice.text,
            choice.reason.unwrap_or(&config.fallback_reason)
        );
        if config.dim_disabled {
            let _ = writeln!(rendered, "{}", line.dimmed());
        } else {
            let _ = writeln!(rendered, "{line}");
        }
    }
    rendered
}
