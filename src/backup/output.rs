use std::{fs, io::ErrorKind, path::Path};

use anyhow::{Context, Result};
use log::info;

use crate::error::BackupError;

/// Create the output directory if it is missing; refuse a path that is a file.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(BackupError::NotADirectory(path.to_path_buf()).into()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("Creating output directory {}", path.display());
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create output directory {}", path.display()))
        }
        Err(e) => Err(e)
            .with_context(|| format!("Failed to inspect output directory {}", path.display())),
    }
}
