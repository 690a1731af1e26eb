//! Field-presence validation for loosely typed JSON bodies.
//!
//! A `Schema` is an ordered list of dotted field paths, each with the JSON
//! kind it must have. Validation stops at the first field that is absent or
//! of the wrong kind and reports only that one.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// The JSON kind a field is required to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    /// Any value, including `null`; only presence is checked.
    Any,
    /// A JSON object.
    Object,
    /// A JSON array.
    Array,
    /// A JSON string.
    String,
    /// A JSON number.
    Number,
    /// A JSON boolean.
    Bool,
}

impl JsonKind {
    /// Whether `value` is of this kind.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Bool => value.is_boolean(),
        }
    }

    /// Article-prefixed name used in messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Any => "a value",
            Self::Object => "an object",
            Self::Array => "an array",
            Self::String => "a string",
            Self::Number => "a number",
            Self::Bool => "a boolean",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Why a body failed validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A field is present but has the wrong JSON kind.
    #[error("{} should be {expected}", describe_field(field))]
    WrongType {
        /// Path of the offending field; empty for the body itself.
        field: String,
        /// Kind the field should have had.
        expected: JsonKind,
    },
}

impl ValidationError {
    /// Path of the field the error is about.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField(field) | Self::WrongType { field, .. } => field,
        }
    }
}

fn describe_field(field: &str) -> String {
    if field.is_empty() {
        "Response body".to_string()
    } else {
        format!("Field '{field}'")
    }
}

/// One required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Dotted path from the validated value, e.g. `device.name`.
    pub path: &'static str,
    /// Required kind.
    pub kind: JsonKind,
}

impl FieldSpec {
    /// Field that only has to be present.
    #[must_use]
    pub const fn present(path: &'static str) -> Self {
        Self {
            path,
            kind: JsonKind::Any,
        }
    }

    /// Field that has to be present with the given kind.
    #[must_use]
    pub const fn typed(path: &'static str, kind: JsonKind) -> Self {
        Self { path, kind }
    }
}

/// Ordered set of required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [FieldSpec],
}

impl Schema {
    /// Creates a schema from a static field list.
    #[must_use]
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// Required fields in check order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Validates `value` against the schema.
    ///
    /// # Errors
    ///
    /// Returns the first missing or mistyped field.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.validate_at(value, "")
    }

    /// Validates `value`, reporting field paths under `prefix`.
    ///
    /// # Errors
    ///
    /// Returns the first missing or mistyped field.
    pub fn validate_at(&self, value: &Value, prefix: &str) -> Result<(), ValidationError> {
        for spec in self.fields {
            let path = join_path(prefix, spec.path);
            match lookup(value, spec.path) {
                None => return Err(ValidationError::MissingField(path)),
                Some(found) if !spec.kind.matches(found) => {
                    return Err(ValidationError::WrongType {
                        field: path,
                        expected: spec.kind,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Validates up to `limit` leading items of a list, each against this schema.
    ///
    /// Item paths are reported as `<prefix>[<index>].<field>`.
    ///
    /// # Errors
    ///
    /// Returns the first missing or mistyped field of the first bad item.
    pub fn validate_items(
        &self,
        items: &[Value],
        prefix: &str,
        limit: usize,
    ) -> Result<(), ValidationError> {
        for (index, item) in items.iter().take(limit).enumerate() {
            if !item.is_object() {
                return Err(ValidationError::WrongType {
                    field: format!("{prefix}[{index}]"),
                    expected: JsonKind::Object,
                });
            }
            self.validate_at(item, &format!("{prefix}[{index}]"))?;
        }
        Ok(())
    }
}

/// Requires `value[field]` (or `value` itself when `field` is empty) to be an array.
///
/// # Errors
///
/// Returns `MissingField` if absent, `WrongType` if not an array.
pub fn require_array<'a>(value: &'a Value, field: &str) -> Result<&'a [Value], ValidationError> {
    let target = if field.is_empty() {
        Some(value)
    } else {
        lookup(value, field)
    };
    match target {
        None => Err(ValidationError::MissingField(field.to_string())),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ValidationError::WrongType {
            field: field.to_string(),
            expected: JsonKind::Array,
        }),
    }
}

/// Follows a dotted path through nested objects.
#[must_use]
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.as_object()?.get(segment))
}

fn join_path(prefix: &str, path: &str) -> String {
    match (prefix.is_empty(), path.is_empty()) {
        (true, _) => path.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}.{path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const DEVICE_FIELDS: &[FieldSpec] = &[
        FieldSpec::typed("device", JsonKind::Object),
        FieldSpec::present("device.name"),
        FieldSpec::present("device.version"),
    ];
    const SCHEMA: Schema = Schema::new(DEVICE_FIELDS);

    #[test]
    fn test_valid_body() {
        let body = json!({"device": {"name": "Pin", "version": "1.0"}});
        assert_eq!(SCHEMA.validate(&body), Ok(()));
    }

    #[test]
    fn test_null_counts_as_present() {
        let body = json!({"device": {"name": null, "version": "1.0"}});
        assert_eq!(SCHEMA.validate(&body), Ok(()));
    }

    #[test]
    fn test_stops_at_first_missing_field() {
        let body = json!({"device": {}});
        let err = SCHEMA.validate(&body).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("device.name".to_string()));
        assert_eq!(err.to_string(), "Missing required field: device.name");
    }

    #[test]
    fn test_wrong_type() {
        let body = json!({"device": "Pin"});
        let err = SCHEMA.validate(&body).unwrap_err();
        assert_eq!(err.field(), "device");
        assert_eq!(err.to_string(), "Field 'device' should be an object");
    }

    #[test]
    fn test_require_array() {
        let body = json!({"networks": [1, 2]});
        assert_eq!(require_array(&body, "networks").unwrap().len(), 2);

        let body = json!({"networks": {}});
        assert_eq!(
            require_array(&body, "networks").unwrap_err().to_string(),
            "Field 'networks' should be an array"
        );

        let body = json!({});
        assert_eq!(
            require_array(&body, "networks").unwrap_err(),
            ValidationError::MissingField("networks".to_string())
        );

        let body = json!({"plugins": []});
        assert_eq!(
            require_array(&body, "").unwrap_err().to_string(),
            "Response body should be an array"
        );
    }

    #[test]
    fn test_validate_items_respects_limit() {
        const FIELDS: &[FieldSpec] = &[FieldSpec::present("ssid")];
        const ITEM: Schema = Schema::new(FIELDS);
        let items = vec![json!({"ssid": "a"}), json!({"ssid": "b"}), json!({})];

        assert_eq!(ITEM.validate_items(&items, "networks", 2), Ok(()));
        assert_eq!(
            ITEM.validate_items(&items, "networks", 3).unwrap_err(),
            ValidationError::MissingField("networks[2].ssid".to_string())
        );
    }

    #[test]
    fn test_validate_items_rejects_non_objects() {
        const FIELDS: &[FieldSpec] = &[FieldSpec::present("name")];
        const ITEM: Schema = Schema::new(FIELDS);
        let items = vec![json!("clock")];
        assert_eq!(
            ITEM.validate_items(&items, "", usize::MAX).unwrap_err().to_string(),
            "Field '[0]' should be an object"
        );
    }
}
