//! Persistent CLI settings.
//!
//! Stored in `~/.config/cheatdb/settings.toml`:
//!
//! ```toml
//! [database]
//! root = "/path/to/database"
//!
//! [patch]
//! output_dir = "/path/to/patches"
//! ```

use std::io;
use std::path::{Path, PathBuf};

/// A path-valued setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathSetting {
    /// `[database] root`
    DatabaseRoot,
    /// `[patch] output_dir`
    PatchOutputDir,
}

impl PathSetting {
    fn section(&self) -> &'static str {
        match self {
            Self::DatabaseRoot => "database",
            Self::PatchOutputDir => "patch",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::DatabaseRoot => "root",
            Self::PatchOutputDir => "output_dir",
        }
    }

    pub(crate) fn display_key(&self) -> String {
        format!("{}.{}", self.section(), self.key())
    }
}

/// Canonical path to the settings file: `~/.config/cheatdb/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("cheatdb").join("settings.toml")
}

/// Resolve the database root using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `database.root` in `settings.toml`
/// 3. Current working directory
pub(crate) fn resolve_database_root(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_path(PathSetting::DatabaseRoot) {
        return p;
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Read a path setting from the settings file, if set.
pub(crate) fn load_path(setting: PathSetting) -> Option<PathBuf> {
    load_path_from(&settings_path(), setting)
}

/// Save (or clear) a path setting in the settings file.
pub(crate) fn save_path(setting: PathSetting, path: Option<&Path>) -> io::Result<()> {
    save_path_to(&settings_path(), setting, path)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

fn load_path_from(file: &Path, setting: PathSetting) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(file).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let value = doc.get(setting.section())?.get(setting.key())?.as_str()?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Update one key in place, leaving every other key in the file untouched.
fn save_path_to(file: &Path, setting: PathSetting, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(file) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let section = table
        .entry(setting.section())
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let section_table = section
        .as_table_mut()
        .ok_or_else(|| io::Error::other(format!("[{}] is not a table", setting.section())))?;

    match path {
        Some(p) => {
            section_table.insert(
                setting.key().to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            section_table.remove(setting.key());
        }
    }

    // Write atomically
    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = file.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, file)?;

    Ok(())
}
