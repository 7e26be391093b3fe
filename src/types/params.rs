//! Caller parameters for each operation.
//!
//! These only shape the argument object; every constraint (UUID format,
//! allowed statuses, page bounds) is enforced by the operation's input shape
//! before anything is sent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reply language for the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Pt,
    Es,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
            Language::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            "es" => Ok(Language::Es),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// Arguments for `listContentByAgent`.
///
/// `limit` defaults to 10 (1..=100) and `page` to 1 when left unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContentByAgentParams {
    pub status: Vec<String>,
    pub agent_id: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
}

impl ListContentByAgentParams {
    pub fn new<A, S>(agent_ids: A, statuses: S) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            status: statuses.into_iter().map(Into::into).collect(),
            agent_id: agent_ids.into_iter().map(Into::into).collect(),
            limit: None,
            page: None,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }
}

/// Arguments for `getContentBySlug` and `getRelatedSlugs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSlugParams {
    pub slug: String,
    pub agent_id: String,
}

impl ContentSlugParams {
    pub fn new(slug: impl Into<String>, agent_id: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            agent_id: agent_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorParams {
    pub agent_id: String,
}

impl AuthorParams {
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentImageParams {
    pub content_id: String,
}

impl ContentImageParams {
    pub fn new(content_id: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
        }
    }
}

/// Arguments for `streamAssistantResponse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamAssistantParams {
    pub message: String,
    pub agent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl StreamAssistantParams {
    pub fn new(agent_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            agent_id: agent_id.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}
