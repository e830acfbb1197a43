use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cheatdb_markup::{load_game, scan_database};

use crate::error::CliError;

pub(crate) fn run_list(root: &Path) -> Result<(), CliError> {
    let games = scan_database(root)?;

    if games.is_empty() {
        log::info!(
            "{}",
            format!("No game folders found in {}", root.display())
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("");
        log::info!("Tip: create one folder per game and put its .txt database files inside.");
        log::info!("     Run 'cheatdb config set-root <path>' to remember the database location.");
        return Ok(());
    }

    log::info!(
        "{} ({} games):",
        root.display().if_supports_color(Stdout, |t| t.bold()),
        games.len(),
    );
    log::info!("");

    for folder in &games {
        let game = match load_game(folder) {
            Ok(game) => game,
            Err(e) => {
                log::warn!(
                    "  {} {}: {}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    folder.name,
                    e,
                );
                continue;
            }
        };

        let ids: Vec<&str> = game
            .metadata_values(cheatdb_core::MetadataKind::GameId)
            .collect();
        log::info!(
            "  {}{}",
            game.name.if_supports_color(Stdout, |t| t.bold()),
            if ids.is_empty() {
                String::new()
            } else {
                format!(
                    " [{}]",
                    ids.join(", ").if_supports_color(Stdout, |t| t.cyan())
                )
            },
        );
        log::info!(
            "    {} groups, {} codes, {} file(s)",
            game.groups.len(),
            game.entry_count(),
            folder.files.len(),
        );
    }

    Ok(())
}
