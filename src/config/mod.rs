mod models;

pub use models::{Config, Credential, FailurePolicy};

use std::{fs::File, io::Read, path::Path};

use anyhow::{Context, Result};
use validator::Validate;

use crate::error::BackupError;

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Field checks plus credential resolution. Touches neither disk nor network.
    pub fn check(&self) -> Result<(), BackupError> {
        self.validate()?;
        self.credential().map(|_| ())
    }

    pub fn credential(&self) -> Result<Credential, BackupError> {
        match (&self.api_token, &self.api_key, &self.api_email) {
            (Some(_), Some(_), _) => Err(BackupError::ConflictingCredentials),
            (Some(token), None, _) => Ok(Credential::Token(token.clone())),
            (None, Some(key), Some(email)) => Ok(Credential::Key {
                email: email.clone(),
                key: key.clone(),
            }),
            _ => Err(BackupError::MissingCredential),
        }
    }
}
