//! Response envelope detection.

use crate::{Error, ErrorContext, Result};
use serde_json::Value;

/// The two payload layouts the service produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{"result": {"data": …}}`, with the payload optionally one level deeper
    /// under `json`. The inner payload has already been extracted.
    Nested(Value),
    /// The payload itself, with no wrapper.
    Flat(Value),
}

impl Envelope {
    /// Resolve a parsed body into one of the two layouts.
    ///
    /// A nested envelope is recognised purely structurally (an object whose
    /// `result` is an object containing `data`) and may carry any payload,
    /// arrays and `null` included. Without an envelope the body must be an
    /// object; bare arrays, `null`, strings and numbers are rejected here
    /// before they reach the schema layer.
    pub fn detect(body: Value) -> Result<Self> {
        if let Some(data) = nested_data(&body) {
            let inner = data.get("json").unwrap_or(data).clone();
            return Ok(Envelope::Nested(inner));
        }

        if body.is_object() {
            Ok(Envelope::Flat(body))
        } else {
            Err(Error::invalid_response_with_context(
                format!(
                    "expected a result envelope or an object payload, received {}",
                    json_type_name(&body)
                ),
                ErrorContext::new().with_source("envelope"),
            ))
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Envelope::Nested(_))
    }

    /// The unwrapped payload.
    pub fn into_payload(self) -> Value {
        match self {
            Envelope::Nested(value) | Envelope::Flat(value) => value,
        }
    }
}

fn nested_data(body: &Value) -> Option<&Value> {
    body.get("result")
        .filter(|result| result.is_object())
        .and_then(|result| result.get("data"))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
