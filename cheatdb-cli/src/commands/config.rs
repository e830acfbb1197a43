use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings::{self, PathSetting};

/// Show the settings file location and its contents.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "cheatdb Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    for setting in [PathSetting::DatabaseRoot, PathSetting::PatchOutputDir] {
        let key = format!("{}:", setting.display_key());
        match settings::load_path(setting) {
            Some(value) => log::info!(
                "  {} {}",
                key.if_supports_color(Stdout, |t| t.cyan()),
                value.display(),
            ),
            None => log::info!(
                "  {} {}",
                key.if_supports_color(Stdout, |t| t.cyan()),
                "not set".if_supports_color(Stdout, |t| t.yellow()),
            ),
        }
    }

    if let Some(contents) = settings::load_settings_string() {
        log::debug!("");
        for line in contents.lines() {
            log::debug!("  {line}");
        }
    }
    Ok(())
}

pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings::settings_path().display());
    Ok(())
}

/// Save or clear one path setting.
pub(crate) fn run_config_set(setting: PathSetting, path: Option<PathBuf>) -> Result<(), CliError> {
    let path = match path {
        Some(p) => {
            if !p.is_dir() {
                return Err(CliError::config(format!(
                    "{} is not a directory",
                    p.display()
                )));
            }
            Some(std::fs::canonicalize(&p)?)
        }
        None => None,
    };

    settings::save_path(setting, path.as_deref())?;

    match &path {
        Some(p) => log::info!(
            "{} Set {} to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            setting.display_key(),
            p.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "{} Cleared {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            setting.display_key(),
        ),
    }
    Ok(())
}
