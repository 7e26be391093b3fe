//! 请求/响应结构校验层：声明式字段约束与统一校验器。
//!
//! # Schema Layer
//!
//! Declarative shape definitions for every request and response payload, and
//! the one generic validator that interprets them.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`field`] | Constraint description types (`FieldType`, `Field`, `Presence`) |
//! | [`validator`] | The interpreter that collects every violation |
//! | [`shapes`] | Static input/output shapes per operation |
//! | [`error`] | The [`Violation`] type |

pub mod error;
pub mod field;
pub mod shapes;
pub mod validator;

pub use error::{join_violations, Violation};
pub use field::{Field, FieldType, Presence};

use crate::normalize::Node;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Caller arguments that passed an operation's input shape.
///
/// Holds only declared fields, with defaults already substituted. The only
/// way to obtain one is [`validate_input`], so anything the transport layer
/// receives has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    fields: Map<String, Value>,
}

impl ValidatedInput {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Deserialize the validated fields into a typed structure.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.fields.clone()))
    }
}

/// Check caller-supplied arguments against an object shape.
pub fn validate_input(shape: &FieldType, raw: &Value) -> Result<ValidatedInput, Vec<Violation>> {
    let cleaned = validator::validate(shape, &Node::from(raw.clone()))?;
    match cleaned.into_json() {
        Value::Object(fields) => Ok(ValidatedInput { fields }),
        other => Err(vec![Violation::new(
            "",
            format!(
                "expected object, received {}",
                Node::from(other).type_name()
            ),
        )]),
    }
}

/// Check a normalized server payload against an output shape.
pub fn validate_output(shape: &FieldType, node: &Node) -> Result<Node, Vec<Violation>> {
    validator::validate(shape, node)
}
