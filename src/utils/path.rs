//! Path utilities: expand ~ and validate the files passed on the command line.

use crate::errors::{AppError, AppResult};
use std::io;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `path` and make sure it names an existing regular file.
pub fn existing_file(path: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if !p.is_file() {
        return Err(AppError::from(io::Error::new(
            io::ErrorKind::NotFound,
            format!("file not found: {}", p.display()),
        )));
    }
    Ok(p)
}
