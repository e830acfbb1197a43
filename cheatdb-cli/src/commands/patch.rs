use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cheatdb_core::{CodeEntry, Game};
use cheatdb_patch::{PatchItem, compose_patch_text, patch_file_name, write_patch_file};

use crate::commands::open_game;
use crate::error::CliError;
use crate::settings::{self, PathSetting};

/// Which codes of a game go into the patch.
#[derive(Debug, Clone, Default)]
pub(crate) struct Selection {
    pub codes: Vec<String>,
    pub groups: Vec<String>,
    pub all: bool,
}

impl Selection {
    fn is_empty(&self) -> bool {
        !self.all && self.codes.is_empty() && self.groups.is_empty()
    }
}

pub(crate) fn run_patch(
    root: &Path,
    query: &str,
    selection: &Selection,
    output: Option<PathBuf>,
    to_stdout: bool,
) -> Result<(), CliError> {
    if selection.is_empty() {
        return Err(CliError::NothingSelected);
    }

    let game = open_game(root, query)?;
    let entries = select_entries(&game, selection)?;
    let items: Vec<PatchItem> = entries.into_iter().map(PatchItem::from).collect();

    if to_stdout {
        println!("{}", compose_patch_text(&items));
        return Ok(());
    }

    let target = output.or_else(|| {
        settings::load_path(PathSetting::PatchOutputDir).map(|dir| dir.join(patch_file_name()))
    });
    let written = write_patch_file(&items, target.as_deref())?;

    log::info!(
        "{} Wrote {} code(s) from {} to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        items.len(),
        game.name,
        written.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Resolve a selection to entries: groups first, then individual codes,
/// each in the order requested.
fn select_entries<'a>(
    game: &'a Game,
    selection: &Selection,
) -> Result<Vec<&'a CodeEntry>, CliError> {
    if selection.all {
        return Ok(game.entries().collect());
    }

    let mut selected: Vec<&CodeEntry> = Vec::new();
    for name in &selection.groups {
        let wanted = name.trim();
        let mut found = false;
        for group in game
            .groups
            .iter()
            .filter(|g| g.name.eq_ignore_ascii_case(wanted))
        {
            found = true;
            selected.extend(group.codes.iter());
        }
        if !found {
            return Err(CliError::GroupNotFound {
                game: game.name.clone(),
                group: wanted.to_string(),
            });
        }
    }
    for name in &selection.codes {
        let matches = game.find_entries(name);
        if matches.is_empty() {
            return Err(CliError::CodeNotFound {
                game: game.name.clone(),
                code: name.trim().to_string(),
            });
        }
        selected.extend(matches);
    }
    Ok(selected)
}
