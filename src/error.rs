use std::path::PathBuf;

use thiserror::Error;

/// Conditions that end a run with a plain message instead of an error chain.
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    #[error("An API token (--api-token) or an API key with its account email (--api-key, --email) is required")]
    MissingCredential,

    #[error("Use either an API token or an API key, not both")]
    ConflictingCredentials,

    #[error("The provided output path must be a directory, not a file: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("This program currently does not support accounts with more than {per_page} zones ({total} found)")]
    TooManyZones { per_page: u32, total: u32 },

    #[error("Zone {zone_id} has {total} DNS records, more than the {per_page} that fit in one page")]
    TooManyRecords {
        zone_id: String,
        per_page: u32,
        total: u32,
    },

    #[error("API request to {path} failed: {errors}")]
    Api { path: String, errors: String },
}
