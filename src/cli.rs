use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{Config, FailurePolicy};

pub const TOKEN_ENV: &str = "CLOUDFLARE_API_TOKEN";
pub const KEY_ENV: &str = "CLOUDFLARE_API_KEY";
pub const EMAIL_ENV: &str = "CLOUDFLARE_EMAIL";

#[derive(Debug, Parser)]
#[command(name = "cloudflare-backup")]
#[command(about = "Back up every Cloudflare DNS zone on an account to text files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// YAML file with default settings; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Cloudflare API token [env: CLOUDFLARE_API_TOKEN]
    #[arg(long, conflicts_with = "api_key")]
    pub api_token: Option<String>,

    /// Legacy global API key, requires --email [env: CLOUDFLARE_API_KEY]
    #[arg(long)]
    pub api_key: Option<String>,

    /// Account email used with --api-key [env: CLOUDFLARE_EMAIL]
    #[arg(long)]
    pub email: Option<String>,

    /// The output directory [default: output/]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Also back up each zone's page rules
    #[arg(long)]
    pub page_rules: bool,

    /// What to do when a zone fails to export
    #[arg(long, value_enum)]
    pub on_error: Option<FailurePolicy>,

    /// Per-request timeout in seconds [default: 30]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Cloudflare API root
    #[arg(long, hide = true)]
    pub api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer the process environment and then the flags over the config file
    /// (or the defaults when there is none).
    pub fn into_config(self) -> Result<Config> {
        self.into_config_with_env(|name| std::env::var(name).ok())
    }

    /// Precedence, lowest first: config file, credential variables from `env`, flags.
    /// A credential given at one layer replaces the other kind from the layers below.
    pub fn into_config_with_env<F>(self, env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        apply_credential(
            &mut config,
            env(TOKEN_ENV),
            env(KEY_ENV),
            env(EMAIL_ENV),
        );
        apply_credential(&mut config, self.api_token, self.api_key, self.email);
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if self.page_rules {
            config.page_rules = true;
        }
        if let Some(policy) = self.on_error {
            config.failure_policy = policy;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout = timeout;
        }
        if let Some(url) = self.api_url {
            config.api_url = url;
        }

        Ok(config)
    }
}

// Token and key both set at the same layer are kept so `Config::credential`
// reports the conflict.
fn apply_credential(
    config: &mut Config,
    token: Option<String>,
    key: Option<String>,
    email: Option<String>,
) {
    match (token, key) {
        (Some(token), Some(key)) => {
            config.api_token = Some(token);
            config.api_key = Some(key);
        }
        (Some(token), None) => {
            config.api_token = Some(token);
            config.api_key = None;
            config.api_email = None;
        }
        (None, Some(key)) => {
            config.api_key = Some(key);
            config.api_token = None;
        }
        (None, None) => {}
    }
    if let Some(email) = email {
        config.api_email = Some(email);
    }
}
