//! Declarative constraint descriptions.
//!
//! A shape is a tree of [`FieldType`] values built entirely from `'static`
//! data, so every operation's input and output shape can live in a `static`
//! and be interpreted by the single validator in [`super::validator`].

/// Constraint on a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A string of at least `min_len` characters. `message` replaces the
    /// default length message when set.
    String {
        min_len: usize,
        message: Option<&'static str>,
    },
    /// A canonical hyphenated UUID string (8-4-4-4-12 hex digits).
    Uuid { message: &'static str },
    /// A whole number within the optional inclusive bounds.
    Integer { min: Option<i64>, max: Option<i64> },
    /// Any JSON number.
    Number,
    /// One of a closed set of strings.
    Enum {
        values: &'static [&'static str],
        message: &'static str,
    },
    Array { items: &'static FieldType },
    /// An object with declared fields; undeclared keys are dropped.
    Object { fields: &'static [Field] },
    /// `null` or a value matching `inner`.
    Nullable { inner: &'static FieldType },
    /// A temporal value produced by date coercion.
    Timestamp,
}

/// Whether a field must be present, and what to substitute when it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
    /// Absent values are replaced with this integer during validation.
    Default(i64),
}

/// A named member of an object shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
    pub presence: Presence,
}

impl Field {
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            presence: Presence::Required,
        }
    }

    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            presence: Presence::Optional,
        }
    }

    pub const fn with_default(name: &'static str, ty: FieldType, default: i64) -> Self {
        Self {
            name,
            ty,
            presence: Presence::Default(default),
        }
    }
}

impl FieldType {
    /// A string with no length constraint.
    pub const ANY_STRING: FieldType = FieldType::String {
        min_len: 0,
        message: None,
    };

    /// Name used in type-mismatch messages.
    pub fn expected_name(&self) -> &'static str {
        match self {
            FieldType::String { .. } | FieldType::Uuid { .. } | FieldType::Enum { .. } => "string",
            FieldType::Integer { .. } => "integer",
            FieldType::Number => "number",
            FieldType::Array { .. } => "array",
            FieldType::Object { .. } => "object",
            FieldType::Nullable { inner } => inner.expected_name(),
            FieldType::Timestamp => "date",
        }
    }

    /// Whether `null` satisfies this type at the top level.
    pub fn accepts_null(&self) -> bool {
        matches!(self, FieldType::Nullable { .. })
    }

    /// Declared fields when this is an object shape.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FieldType::Object { fields } => fields,
            FieldType::Nullable { inner } => inner.fields(),
            _ => &[],
        }
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields().iter().find(|f| f.name == name)
    }
}
