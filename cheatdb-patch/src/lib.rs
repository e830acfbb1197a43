//! Patch file output: hex reflow and `[Name]` block composition.

pub mod compose;
pub mod error;
pub mod reflow;

pub use compose::{
    PATCH_EXTENSION, PatchItem, compose_from_entries, compose_patch_text, default_patch_path,
    patch_file_name, write_patch_file,
};
pub use error::PatchError;
pub use reflow::{LINE_ENDING, count_hex_words, is_candidate, is_normalized, normalize};
