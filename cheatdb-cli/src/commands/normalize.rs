use std::io::Read;
use std::path::PathBuf;

use cheatdb_patch::{is_normalized, normalize};

use crate::error::CliError;

pub(crate) fn run_normalize(file: Option<PathBuf>, check: bool) -> Result<(), CliError> {
    let text = match &file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if check {
        if !is_normalized(&text) {
            return Err(CliError::NotNormalized);
        }
        log::info!("Already normalized");
        return Ok(());
    }

    print!("{}", normalize(&text));
    Ok(())
}
