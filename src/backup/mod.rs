pub mod output;
pub mod render;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use log::{error, info};

use crate::api::{models::Zone, DnsApiClient};
use crate::config::{Config, FailurePolicy};

/// Outcome of a run that was not aborted.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub exported: Vec<PathBuf>,
    pub failed: Vec<(String, anyhow::Error)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct Backup<C> {
    client: C,
    output_dir: PathBuf,
    page_rules: bool,
    failure_policy: FailurePolicy,
}

impl<C: DnsApiClient> Backup<C> {
    pub fn new(client: C, config: &Config) -> Self {
        Self {
            client,
            output_dir: PathBuf::from(&config.output_dir),
            page_rules: config.page_rules,
            failure_policy: config.failure_policy,
        }
    }

    /// Prepare the output directory, list the zones and export them one by one.
    pub async fn run(&self) -> Result<RunSummary> {
        output::ensure_output_dir(&self.output_dir)?;

        let zones = self.client.list_zones().await?;
        info!("Found {} zones", zones.len());

        let mut summary = RunSummary::default();
        for zone in &zones {
            info!("Processing {}...", zone.name);

            match self.export_zone(zone).await {
                Ok(path) => {
                    info!("Wrote {}", path.display());
                    summary.exported.push(path);
                }
                Err(e) => match self.failure_policy {
                    FailurePolicy::Abort => {
                        return Err(e.context(format!("Failed to back up zone {}", zone.name)));
                    }
                    FailurePolicy::Continue => {
                        error!("Failed to back up zone {}: {:#}", zone.name, e);
                        summary.failed.push((zone.name.clone(), e));
                    }
                },
            }
        }

        Ok(summary)
    }

    /// Fetch everything for `zone` first, then write `{output_dir}/{zone.name}.txt`.
    pub async fn export_zone(&self, zone: &Zone) -> Result<PathBuf> {
        let records = self.client.list_dns_records(&zone.id).await?;
        let page_rules = if self.page_rules {
            Some(self.client.list_page_rules(&zone.id).await?)
        } else {
            None
        };

        let path = self.output_dir.join(format!("{}.txt", zone.name));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        render::write_zone(&mut writer, zone, &records, page_rules.as_deref())
            .and_then(|_| writer.flush())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(path)
    }
}
