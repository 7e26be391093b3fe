//! 响应规范化：信封解包与日期字段转换。
//!
//! # Response Normalizer
//!
//! Makes the service's payload layouts uniform before output validation:
//!
//! ```text
//! JSON body → Envelope::detect → Node → coerce_dates → schema::validate_output → Node
//!                (nested/flat)              (createdAt/updatedAt)
//! ```

pub mod dates;
pub mod envelope;
pub mod node;

pub use dates::{coerce_dates, parse_timestamp};
pub use envelope::Envelope;
pub use node::Node;

use crate::operation::Operation;
use crate::{Error, ErrorContext, Result};
use serde_json::Value;
use tracing::debug;

/// Unwrap, coerce and validate a parsed response body for `operation`.
///
/// A structural mismatch after coercion is reported as
/// [`Error::InvalidApiResponse`] listing every violation; nothing is
/// defaulted or coerced beyond the date fields.
pub fn normalize_response(operation: &Operation, body: Value) -> Result<Node> {
    let shape = operation.output.ok_or_else(|| {
        Error::invalid_response_with_context(
            "operation has no batch response shape",
            ErrorContext::new().with_source(operation.name),
        )
    })?;

    let envelope = Envelope::detect(body)?;
    debug!(
        operation = operation.name,
        nested = envelope.is_nested(),
        "normalizing response"
    );
    let node = coerce_dates(Node::from(envelope.into_payload()));

    crate::schema::validate_output(shape, &node).map_err(|violations| {
        Error::invalid_response_with_context(
            crate::schema::join_violations(&violations),
            ErrorContext::new().with_source(operation.name),
        )
    })
}
