//! Content records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication status of a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Approved,
}

impl ContentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Approved => "approved",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ContentStatus> for String {
    fn from(status: ContentStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

/// Text statistics. The service reports these as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time_minutes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<String>,
}

/// The brief the content was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRequest {
    pub description: String,
}

/// A full piece of content, as returned by `getContentBySlug`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub agent_id: String,
    pub image_url: Option<String>,
    pub body: String,
    pub status: ContentStatus,
    pub meta: ContentMeta,
    pub request: ContentRequest,
    pub stats: ContentStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List entry: a content record without body, request or `updatedAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummary {
    pub id: String,
    pub meta: ContentMeta,
    pub image_url: Option<String>,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    pub stats: ContentStats,
}

/// One page of `listContentByAgent` results. `total` counts every match,
/// not just this page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentList {
    pub posts: Vec<ContentSummary>,
    pub total: u64,
}

/// Image attached to a piece of content, base64-encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentImage {
    pub data: String,
    pub content_type: String,
}

impl ContentImage {
    /// Decode `data` into raw image bytes.
    pub fn decode(&self) -> crate::Result<Vec<u8>> {
        super::decode_base64(&self.data, "data")
    }
}
