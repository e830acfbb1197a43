/// Errors that can occur while writing a patch file.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Nothing to write: the composed patch is empty")]
    EmptyPatch,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
