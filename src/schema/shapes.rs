//! Input and output shapes for every operation the service exposes.

use super::field::{Field, FieldType};

/// Allowed content status values.
pub const CONTENT_STATUS_VALUES: &[&str] = &["draft", "approved"];

/// Allowed assistant reply languages.
pub const LANGUAGE_VALUES: &[&str] = &["en", "pt", "es"];

const AGENT_ID: FieldType = FieldType::Uuid {
    message: "Invalid Agent ID format.",
};

const CONTENT_STATUS: FieldType = FieldType::Enum {
    values: CONTENT_STATUS_VALUES,
    message: "Invalid content status. Must be one of: draft, approved.",
};

const LANGUAGE: FieldType = FieldType::Enum {
    values: LANGUAGE_VALUES,
    message: "Invalid language. Must be one of: en, pt, es.",
};

const SLUG: FieldType = FieldType::String {
    min_len: 1,
    message: Some("Slug is required."),
};

const STRING_LIST: FieldType = FieldType::Array {
    items: &FieldType::ANY_STRING,
};

const NULLABLE_STRING: FieldType = FieldType::Nullable {
    inner: &FieldType::ANY_STRING,
};

// Inputs

pub static LIST_CONTENT_BY_AGENT_INPUT: FieldType = FieldType::Object {
    fields: &[
        Field::required("status", FieldType::Array { items: &CONTENT_STATUS }),
        Field::required("agentId", FieldType::Array { items: &AGENT_ID }),
        Field::with_default(
            "limit",
            FieldType::Integer {
                min: Some(1),
                max: Some(100),
            },
            10,
        ),
        Field::with_default(
            "page",
            FieldType::Integer {
                min: Some(1),
                max: None,
            },
            1,
        ),
    ],
};

/// Shared by `getContentBySlug` and `getRelatedSlugs`.
pub static CONTENT_SLUG_INPUT: FieldType = FieldType::Object {
    fields: &[
        Field::required("slug", SLUG),
        Field::required("agentId", AGENT_ID),
    ],
};

pub static AUTHOR_BY_AGENT_ID_INPUT: FieldType = FieldType::Object {
    fields: &[Field::required("agentId", AGENT_ID)],
};

pub static CONTENT_IMAGE_INPUT: FieldType = FieldType::Object {
    fields: &[Field::required(
        "contentId",
        FieldType::String {
            min_len: 1,
            message: Some("Content ID is required."),
        },
    )],
};

pub static STREAM_ASSISTANT_INPUT: FieldType = FieldType::Object {
    fields: &[
        Field::required(
            "message",
            FieldType::String {
                min_len: 1,
                message: Some("Message is required."),
            },
        ),
        Field::required("agentId", AGENT_ID),
        Field::optional("language", LANGUAGE),
    ],
};

// Outputs

const CONTENT_META: FieldType = FieldType::Object {
    fields: &[
        Field::optional("title", FieldType::ANY_STRING),
        Field::optional("description", FieldType::ANY_STRING),
        Field::optional("keywords", STRING_LIST),
        Field::optional("slug", FieldType::ANY_STRING),
        Field::optional("sources", STRING_LIST),
    ],
};

const CONTENT_STATS: FieldType = FieldType::Object {
    fields: &[
        Field::optional("wordsCount", FieldType::ANY_STRING),
        Field::optional("readTimeMinutes", FieldType::ANY_STRING),
        Field::optional("qualityScore", FieldType::ANY_STRING),
    ],
};

const CONTENT_REQUEST: FieldType = FieldType::Object {
    fields: &[Field::required(
        "description",
        FieldType::String {
            min_len: 1,
            message: Some("Description is required"),
        },
    )],
};

/// Full content record, as returned by `getContentBySlug`.
pub static CONTENT_RECORD: FieldType = FieldType::Object {
    fields: &[
        Field::required("id", FieldType::ANY_STRING),
        Field::required("agentId", FieldType::ANY_STRING),
        Field::required("imageUrl", NULLABLE_STRING),
        Field::required("body", FieldType::ANY_STRING),
        Field::required("status", CONTENT_STATUS),
        Field::required("meta", CONTENT_META),
        Field::required("request", CONTENT_REQUEST),
        Field::required("stats", CONTENT_STATS),
        Field::required("createdAt", FieldType::Timestamp),
        Field::required("updatedAt", FieldType::Timestamp),
    ],
};

const CONTENT_SUMMARY: FieldType = FieldType::Object {
    fields: &[
        Field::required("id", FieldType::ANY_STRING),
        Field::required("meta", CONTENT_META),
        Field::required("imageUrl", NULLABLE_STRING),
        Field::required("status", CONTENT_STATUS),
        Field::required("createdAt", FieldType::Timestamp),
        Field::required("stats", CONTENT_STATS),
    ],
};

pub static CONTENT_LIST: FieldType = FieldType::Object {
    fields: &[
        Field::required("posts", FieldType::Array { items: &CONTENT_SUMMARY }),
        Field::required("total", FieldType::Number),
    ],
};

pub static RELATED_SLUGS: FieldType = STRING_LIST;

const PROFILE_PHOTO: FieldType = FieldType::Object {
    fields: &[
        Field::required("image", FieldType::ANY_STRING),
        Field::required("contentType", FieldType::ANY_STRING),
    ],
};

pub static AUTHOR: FieldType = FieldType::Object {
    fields: &[
        Field::required("name", FieldType::ANY_STRING),
        Field::required("profilePhoto", FieldType::Nullable { inner: &PROFILE_PHOTO }),
    ],
};

const IMAGE: FieldType = FieldType::Object {
    fields: &[
        Field::required("data", FieldType::ANY_STRING),
        Field::required("contentType", FieldType::ANY_STRING),
    ],
};

/// `null` means the content has no image; it is a valid result, not an error.
pub static CONTENT_IMAGE: FieldType = FieldType::Nullable { inner: &IMAGE };
