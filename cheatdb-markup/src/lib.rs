pub mod error;
pub mod line;
pub mod metadata;
pub mod parser;
pub mod scanner;

pub use error::MarkupError;
pub use line::{Line, classify};
pub use metadata::{try_parse_credit, try_parse_metadata};
pub use parser::{ParseStats, Parser, parse_game};
pub use scanner::{GameFolder, load_game, scan_database};
