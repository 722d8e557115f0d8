use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::cloudflare::API_BASE_URL;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    #[validate(length(min = 1, message = "API token cannot be empty"))]
    pub api_token: Option<String>,

    #[validate(length(min = 1, message = "API key cannot be empty"))]
    pub api_key: Option<String>,

    #[validate(length(min = 1, message = "Account email cannot be empty"))]
    pub api_email: Option<String>,

    #[validate(length(min = 1, message = "Output directory cannot be empty"))]
    pub output_dir: String,

    #[validate(length(min = 1, message = "API URL cannot be empty"))]
    pub api_url: String,

    #[validate(range(min = 1, message = "Request timeout must be greater than 0"))]
    pub request_timeout: u64,

    pub page_rules: bool,

    pub failure_policy: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            api_key: None,
            api_email: None,
            output_dir: "output/".to_string(),
            api_url: API_BASE_URL.to_string(),
            request_timeout: 30,
            page_rules: false,
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// How the API request is authenticated.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Token(String),
    /// Legacy global API key, tied to the account email.
    Key { email: String, key: String },
}

// Keep secrets out of debug logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Token(_) => f.write_str("Token(***)"),
            Credential::Key { email, .. } => write!(f, "Key {{ email: {:?}, key: *** }}", email),
        }
    }
}

/// What the run does when a single zone fails to export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failed zone.
    #[default]
    Abort,
    /// Log the failure and move on to the next zone.
    Continue,
}
