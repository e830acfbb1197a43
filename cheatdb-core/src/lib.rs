//! Data model shared by every cheatdb crate.
//!
//! A parse produces one [`Game`] per game folder. Games own their groups,
//! groups own their entries, and metadata/credits are flat lists collected
//! across every file of the game.

pub mod badges;
pub mod game;
pub mod metadata;

pub use badges::BadgeFlags;
pub use game::{CodeEntry, CodeGroup, Game, UNGROUPED_NAME};
pub use metadata::{Credit, Metadata, MetadataKind, MetadataKindParseError};
