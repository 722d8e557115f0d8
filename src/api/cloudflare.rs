use std::time::Duration;

use super::{client::DnsApiClient, models::*};
use crate::config::{Config, Credential};
use crate::error::BackupError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

pub const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

pub const ZONES_PER_PAGE: u32 = 50;
pub const DNS_RECORDS_PER_PAGE: u32 = 100;

pub struct CloudflareClient {
    client: reqwest::Client,
    credential: Credential,
    base_url: String,
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let per_page = ZONES_PER_PAGE.to_string();
        let response: ApiResponse<Vec<Zone>> =
            self.get("zones", &[("per_page", per_page.as_str())]).await?;

        if let Some(info) = response.result_info.as_ref() {
            if !info.is_complete() {
                return Err(BackupError::TooManyZones {
                    per_page: ZONES_PER_PAGE,
                    total: info.total_count,
                }
                .into());
            }
        }

        Ok(response.result.unwrap_or_default())
    }

    async fn list_dns_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>> {
        let per_page = DNS_RECORDS_PER_PAGE.to_string();
        let response: ApiResponse<Vec<DnsRecord>> = self
            .get(
                &format!("zones/{}/dns_records", zone_id),
                &[("per_page", per_page.as_str())],
            )
            .await?;

        if let Some(info) = response.result_info.as_ref() {
            if !info.is_complete() {
                return Err(BackupError::TooManyRecords {
                    zone_id: zone_id.to_string(),
                    per_page: DNS_RECORDS_PER_PAGE,
                    total: info.total_count,
                }
                .into());
            }
        }

        Ok(response.result.unwrap_or_default())
    }

    async fn list_page_rules(&self, zone_id: &str) -> Result<Vec<PageRule>> {
        let response: ApiResponse<Vec<PageRule>> = self
            .get(
                &format!("zones/{}/pagerules", zone_id),
                &[("order", "priority"), ("direction", "asc")],
            )
            .await?;

        Ok(response.result.unwrap_or_default())
    }
}

impl CloudflareClient {
    pub fn new(credential: Credential, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            credential,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.credential()?,
            &config.api_url,
            Duration::from_secs(config.request_timeout),
        )
    }

    /// GET `path` relative to the API root and decode the envelope.
    ///
    /// A `success: false` envelope is turned into an error; the HTTP status is
    /// only logged since the API reports failures in the body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse<T>> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .authorize(self.client.get(&url))
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        debug!("Response status: {}", status);

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response from {}", url))?;

        let parsed: ApiResponse<T> = serde_json::from_str(&text).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse API response (HTTP {}): {}. Response: {}",
                status,
                e,
                text
            )
        })?;

        if !parsed.success {
            let errors = parsed.error_summary();
            error!("API errors for {}: {}", path, errors);
            return Err(BackupError::Api {
                path: path.to_string(),
                errors,
            }
            .into());
        }

        for message in &parsed.messages {
            debug!("API message for {}: {}", path, message);
        }
        if let Some(info) = parsed.result_info.as_ref() {
            debug!(
                "Page {}/{} of {}: {} of {} items ({} per page)",
                info.page, info.total_pages, path, info.count, info.total_count, info.per_page
            );
        }

        if parsed.result.is_none() {
            return Err(anyhow::anyhow!("API response for {} has no result", path));
        }

        Ok(parsed)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credential {
            Credential::Token(token) => request.bearer_auth(token),
            Credential::Key { email, key } => request
                .header("X-Auth-Email", email)
                .header("X-Auth-Key", key),
        }
    }
}
