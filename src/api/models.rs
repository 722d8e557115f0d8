use std::fmt;

use serde::{Deserialize, Serialize};

/// Standard Cloudflare v4 response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
    pub result_info: Option<ResultInfo>,
}

impl<T> ApiResponse<T> {
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return "unknown error".to_string();
        }
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Entries of `errors`/`messages`; the API sends objects, older docs show bare strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiMessage {
    Detailed {
        #[serde(default)]
        code: i64,
        message: String,
    },
    Text(String),
}

impl fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiMessage::Detailed { code: 0, message } => f.write_str(message),
            ApiMessage::Detailed { code, message } => write!(f, "{} (code {})", message, code),
            ApiMessage::Text(message) => f.write_str(message),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultInfo {
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}

impl ResultInfo {
    /// True when this page holds every item the server has.
    pub fn is_complete(&self) -> bool {
        self.count == self.total_count
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub created_on: Option<String>,
    pub activated_on: Option<String>,
    pub modified_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: String,
    pub r#type: String,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub proxiable: bool,
    #[serde(default)]
    pub proxied: bool,
    pub ttl: u32,
    #[serde(default)]
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRule {
    pub id: String,
    #[serde(default)]
    pub targets: Vec<PageRuleTarget>,
    #[serde(default)]
    pub actions: Vec<PageRuleAction>,
    pub priority: i32,
    pub status: String,
    pub created_on: Option<String>,
    pub modified_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRuleTarget {
    pub target: String,
    pub constraint: PageRuleConstraint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRuleConstraint {
    pub operator: String,
    pub value: String,
}

/// Action values vary per action id, so they stay raw JSON and are only re-serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRuleAction {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}
