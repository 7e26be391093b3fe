//! Operation descriptors.
//!
//! Each capability of the service is described once, as a `static`
//! [`Operation`]: its name, HTTP method, path template and the shapes its
//! input and output must satisfy. Descriptors are never mutated.

use crate::schema::{self, shapes, FieldType, ValidatedInput};
use crate::{Error, Result};
use reqwest::Method;
use serde_json::Value;

/// How the service answers an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// A single JSON document.
    Json,
    /// A chunked text body read incrementally.
    EventStream,
}

#[derive(Debug)]
pub struct Operation {
    /// Procedure name, also used in error messages (e.g. `"getContentBySlug"`).
    pub name: &'static str,
    pub method: Method,
    /// Path under the API prefix. `{field}` segments are filled from the
    /// validated input and those fields are left out of the query string.
    pub path: &'static str,
    pub input: &'static FieldType,
    /// `None` for streaming operations.
    pub output: Option<&'static FieldType>,
    pub response: ResponseKind,
}

impl Operation {
    /// Check raw caller arguments against this operation's input shape.
    pub fn validate_input(&self, raw: &Value) -> Result<ValidatedInput> {
        schema::validate_input(self.input, raw).map_err(|violations| Error::invalid_input(self.name, violations))
    }

    /// Names of the `{placeholders}` in the path template.
    pub fn path_params(&self) -> impl Iterator<Item = &'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
    }

    pub fn is_streaming(&self) -> bool {
        self.response == ResponseKind::EventStream
    }
}

pub static LIST_CONTENT_BY_AGENT: Operation = Operation {
    name: "listContentByAgent",
    method: Method::GET,
    path: "content",
    input: &shapes::LIST_CONTENT_BY_AGENT_INPUT,
    output: Some(&shapes::CONTENT_LIST),
    response: ResponseKind::Json,
};

pub static GET_CONTENT_BY_SLUG: Operation = Operation {
    name: "getContentBySlug",
    method: Method::GET,
    path: "content/{slug}",
    input: &shapes::CONTENT_SLUG_INPUT,
    output: Some(&shapes::CONTENT_RECORD),
    response: ResponseKind::Json,
};

pub static GET_RELATED_SLUGS: Operation = Operation {
    name: "getRelatedSlugs",
    method: Method::GET,
    path: "content/{slug}/related",
    input: &shapes::CONTENT_SLUG_INPUT,
    output: Some(&shapes::RELATED_SLUGS),
    response: ResponseKind::Json,
};

pub static GET_AUTHOR_BY_AGENT_ID: Operation = Operation {
    name: "getAuthorByAgentId",
    method: Method::GET,
    path: "author/{agentId}",
    input: &shapes::AUTHOR_BY_AGENT_ID_INPUT,
    output: Some(&shapes::AUTHOR),
    response: ResponseKind::Json,
};

pub static GET_CONTENT_IMAGE: Operation = Operation {
    name: "getContentImage",
    method: Method::GET,
    path: "content/{contentId}/image",
    input: &shapes::CONTENT_IMAGE_INPUT,
    output: Some(&shapes::CONTENT_IMAGE),
    response: ResponseKind::Json,
};

pub static STREAM_ASSISTANT_RESPONSE: Operation = Operation {
    name: "streamAssistantResponse",
    method: Method::GET,
    path: "assistant",
    input: &shapes::STREAM_ASSISTANT_INPUT,
    output: None,
    response: ResponseKind::EventStream,
};

/// Every operation the client exposes.
pub static OPERATIONS: [&Operation; 6] = [
    &LIST_CONTENT_BY_AGENT,
    &GET_CONTENT_BY_SLUG,
    &GET_RELATED_SLUGS,
    &GET_AUTHOR_BY_AGENT_ID,
    &GET_CONTENT_IMAGE,
    &STREAM_ASSISTANT_RESPONSE,
];

/// Look up an operation by procedure name.
pub fn find(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().copied().find(|op| op.name == name)
}
