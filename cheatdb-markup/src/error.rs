use std::path::PathBuf;

/// Errors that can occur while loading database folders.
///
/// Parsing itself never fails; these only cover the file system side.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No database files in {}", .0.display())]
    NoGameFiles(PathBuf),
}
