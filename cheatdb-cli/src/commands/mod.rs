pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod normalize;
pub(crate) mod patch;
pub(crate) mod show;

use std::path::Path;

use cheatdb_core::Game;
use cheatdb_markup::{GameFolder, load_game, scan_database};

use crate::error::CliError;

/// Find a game folder by name under `root`, or treat `query` as a folder path.
pub(crate) fn find_game(root: &Path, query: &str) -> Result<GameFolder, CliError> {
    let as_path = Path::new(query);
    if as_path.is_dir() {
        return Ok(GameFolder::from_path(as_path)?);
    }

    let wanted = query.trim();
    scan_database(root)?
        .into_iter()
        .find(|g| g.id.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CliError::game_not_found(format!("{wanted} (in {})", root.display())))
}

/// Find and parse a game.
pub(crate) fn open_game(root: &Path, query: &str) -> Result<Game, CliError> {
    let folder = find_game(root, query)?;
    log::debug!(
        "Loading {} from {} file(s) in {}",
        folder.name,
        folder.files.len(),
        folder.path.display()
    );
    Ok(load_game(&folder)?)
}
