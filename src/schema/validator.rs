//! Generic shape validator.
//!
//! Interprets a [`FieldType`] tree against a [`Node`], supporting:
//! - Type checks (string, integer, number, array, object, null, date)
//! - Field constraints (minimum length, inclusive integer range, UUID format, closed enums)
//! - Presence rules (required, optional, integer defaults)
//! - Nested validation (recursive object and array validation)
//!
//! Violations are collected rather than short-circuited: object fields are
//! visited in declaration order and array elements by ascending index, so the
//! reported list is deterministic for a given input.

use super::error::Violation;
use super::field::{FieldType, Presence};
use crate::normalize::Node;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("UUID pattern is a valid regex")
});

/// Validate `value` against `ty`.
///
/// On success returns the cleaned value: undeclared object keys are dropped
/// and absent fields with a default are filled in.
pub fn validate(ty: &FieldType, value: &Node) -> Result<Node, Vec<Violation>> {
    let mut violations = Vec::new();
    let cleaned = check(ty, value, "", &mut violations);
    if violations.is_empty() {
        Ok(cleaned)
    } else {
        Err(violations)
    }
}

fn check(ty: &FieldType, value: &Node, path: &str, out: &mut Vec<Violation>) -> Node {
    match (ty, value) {
        (FieldType::Nullable { .. }, Node::Null) => Node::Null,
        (FieldType::Nullable { inner }, _) => check(inner, value, path, out),

        (FieldType::String { min_len, message }, Node::String(s)) => {
            if s.chars().count() < *min_len {
                let message = match message {
                    Some(m) => m.to_string(),
                    None => format!("must contain at least {} character(s)", min_len),
                };
                out.push(Violation::new(path, message));
            }
            value.clone()
        }

        (FieldType::Uuid { .. }, Node::String(s)) if UUID_PATTERN.is_match(s) => value.clone(),
        (FieldType::Uuid { message }, _) => {
            out.push(Violation::new(path, *message));
            value.clone()
        }

        (FieldType::Enum { values, .. }, Node::String(s)) if values.contains(&s.as_str()) => {
            value.clone()
        }
        (FieldType::Enum { message, .. }, _) => {
            out.push(Violation::new(path, *message));
            value.clone()
        }

        (FieldType::Integer { min, max }, Node::Number(n)) => {
            // Whole floats such as `10.0` count as integers and are emitted as `10`.
            let whole = n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            });
            match whole {
                Some(i) => {
                    if let Some(min) = min.filter(|min| i < *min) {
                        out.push(Violation::new(
                            path,
                            format!("must be greater than or equal to {}", min),
                        ));
                    }
                    if let Some(max) = max.filter(|max| i > *max) {
                        out.push(Violation::new(
                            path,
                            format!("must be less than or equal to {}", max),
                        ));
                    }
                    Node::Number(i.into())
                }
                None => {
                    out.push(Violation::new(path, "expected integer, received number"));
                    value.clone()
                }
            }
        }

        (FieldType::Number, Node::Number(_)) => value.clone(),
        (FieldType::Timestamp, Node::Timestamp(_)) => value.clone(),

        (FieldType::Array { items }, Node::Array(elements)) => Node::Array(
            elements
                .iter()
                .enumerate()
                .map(|(i, element)| check(items, element, &index_path(path, i), out))
                .collect(),
        ),

        (FieldType::Object { fields }, Node::Object(map)) => {
            let mut cleaned = BTreeMap::new();
            for field in fields.iter() {
                let field_path = child_path(path, field.name);
                match (map.get(field.name), field.presence) {
                    (Some(v), _) => {
                        cleaned.insert(field.name.to_string(), check(&field.ty, v, &field_path, out));
                    }
                    (None, Presence::Required) => out.push(Violation::new(field_path, "Required")),
                    (None, Presence::Optional) => {}
                    (None, Presence::Default(default)) => {
                        cleaned.insert(field.name.to_string(), Node::Number(default.into()));
                    }
                }
            }
            Node::Object(cleaned)
        }

        (ty, value) => {
            out.push(Violation::new(
                path,
                format!(
                    "expected {}, received {}",
                    ty.expected_name(),
                    value.type_name()
                ),
            ));
            value.clone()
        }
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}
