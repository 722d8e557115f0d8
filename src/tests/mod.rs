mod report;

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::MockServer;

use crate::api::CloudflareClient;
use crate::config::{Config, Credential};

pub const TEST_TOKEN: &str = "test_token";

pub fn test_client(server: &MockServer) -> CloudflareClient {
    CloudflareClient::new(
        Credential::Token(TEST_TOKEN.to_string()),
        &server.uri(),
        Duration::from_secs(5),
    )
    .unwrap()
}

pub fn test_config(output_dir: &std::path::Path) -> Config {
    Config {
        api_token: Some(TEST_TOKEN.to_string()),
        output_dir: output_dir.to_string_lossy().into_owned(),
        ..Config::default()
    }
}

pub fn zone_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": "active",
        "created_on": "2020-01-01",
        "activated_on": "2020-01-02",
        "modified_on": "2020-01-03"
    })
}

pub fn record_json(name: &str, r#type: &str, content: &str, ttl: u32, proxied: bool) -> Value {
    json!({
        "id": format!("{}-{}", name, r#type),
        "type": r#type,
        "name": name,
        "content": content,
        "proxiable": true,
        "proxied": proxied,
        "ttl": ttl,
        "locked": false
    })
}

/// Successful envelope around `result` with one page of `count` out of `total` items.
pub fn envelope(result: Value, count: u32, total: u32) -> Value {
    json!({
        "result": result,
        "success": true,
        "errors": [],
        "messages": [],
        "result_info": {
            "page": 1,
            "per_page": 50,
            "total_pages": 1,
            "count": count,
            "total_count": total
        }
    })
}
