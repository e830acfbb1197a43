use thiserror::Error;

use cheatdb_markup::MarkupError;
use cheatdb_patch::PatchError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database folder could not be read
    #[error("{0}")]
    Markup(#[from] MarkupError),

    /// Patch file could not be written
    #[error("{0}")]
    Patch(#[from] PatchError),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// No game folder matched the requested name
    #[error("Unknown game: {0}")]
    GameNotFound(String),

    /// No code entry matched the requested name
    #[error("Unknown code in {game}: {code}")]
    CodeNotFound { game: String, code: String },

    /// No group matched the requested name
    #[error("Unknown group in {game}: {group}")]
    GroupNotFound { game: String, group: String },

    /// The patch command was given nothing to include
    #[error("Nothing selected: pass --code, --group or --all")]
    NothingSelected,

    /// `normalize --check` found text that would change
    #[error("Input is not normalized")]
    NotNormalized,
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn game_not_found(msg: impl Into<String>) -> Self {
        Self::GameNotFound(msg.into())
    }
}
