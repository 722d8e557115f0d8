use super::models::*;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient {
    /// Every zone on the account, in the order the API returns them.
    async fn list_zones(&self) -> Result<Vec<Zone>>;
    async fn list_dns_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>>;
    /// Page rules sorted by ascending priority.
    async fn list_page_rules(&self, zone_id: &str) -> Result<Vec<PageRule>>;
}
