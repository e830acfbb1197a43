//! Database directory scanner.
//!
//! A database is a root folder with one sub-folder per game:
//!
//! ```text
//! <root>/
//!   Some Game/
//!     01 - codes.txt
//!     02 - mods.txt
//!   Another Game/
//!     codes.txt
//! ```
//!
//! The folder name is both the game id and its display name. Files are fed to
//! the parser in lexicographic order so that state carried across files is
//! deterministic.

use std::path::{Path, PathBuf};

use cheatdb_core::Game;

use crate::error::MarkupError;
use crate::parser::parse_game;

/// Extensions (lowercase) of files that hold database markup.
pub const DATABASE_EXTENSIONS: &[&str] = &["txt"];

/// One game folder and the database files found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFolder {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
    /// Database files, sorted
    pub files: Vec<PathBuf>,
}

impl GameFolder {
    /// Inspect a single game folder.
    pub fn from_path(path: &Path) -> Result<Self, MarkupError> {
        if !path.is_dir() {
            return Err(MarkupError::NotADirectory(path.to_path_buf()));
        }
        let files = collect_database_files(path)?;
        if files.is_empty() {
            return Err(MarkupError::NoGameFiles(path.to_path_buf()));
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();
        Ok(Self {
            id: name.clone(),
            name,
            path: path.to_path_buf(),
            files,
        })
    }
}

/// List every game folder under a database root, sorted by name.
///
/// Hidden folders and folders without database files are skipped.
pub fn scan_database(root: &Path) -> Result<Vec<GameFolder>, MarkupError> {
    if !root.is_dir() {
        return Err(MarkupError::NotADirectory(root.to_path_buf()));
    }

    let mut dirs: Vec<PathBuf> = std::fs::read_dir(root)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir() && !is_hidden(p))
        .collect();
    dirs.sort();

    let mut games = Vec::new();
    for dir in dirs {
        match GameFolder::from_path(&dir) {
            Ok(folder) => games.push(folder),
            Err(MarkupError::NoGameFiles(path)) => {
                log::debug!("Skipping {}: no database files", path.display());
            }
            Err(e) => log::warn!("Skipping {}: {e}", dir.display()),
        }
    }
    Ok(games)
}

/// Read and parse every file of a game folder.
pub fn load_game(folder: &GameFolder) -> Result<Game, MarkupError> {
    let mut files = Vec::with_capacity(folder.files.len());
    for path in &folder.files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();
        files.push((name, read_text(path)?));
    }
    Ok(parse_game(&folder.id, &folder.name, &folder.path, files))
}

/// Read a file as text. Invalid UTF-8 is replaced rather than rejected.
fn read_text(path: &Path) -> Result<String, MarkupError> {
    let bytes = std::fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("{} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

fn collect_database_files(dir: &Path) -> Result<Vec<PathBuf>, MarkupError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && !is_hidden(p) && has_database_extension(p))
        .collect();
    files.sort();
    Ok(files)
}

fn has_database_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| DATABASE_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
