//! Bind parameter values.
//!
//! Builders never interpret parameter values; they store them in placeholder
//! order and hand them back through `parameters()` for the caller to bind.
//! [`Value`] is the closed set of types a parameter can carry.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

/// A single bind parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Uuid(uuid::Uuid),
    DateTime(DateTime<Utc>),
    Timestamp(NaiveDateTime),
    Date(NaiveDate),
    Json(serde_json::Value),
}

impl Value {
    /// Whether this value counts as present for condition methods.
    ///
    /// `Null` and blank text suppress the condition; any other value does
    /// not, including `Int(0)`, `Float(0.0)` and `Bool(false)`.
    pub fn is_present(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Text(s) => !s.trim().is_empty(),
            _ => true,
        }
    }

    /// Whether this value is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

/// `None` maps to [`Value::Null`], which condition methods treat as absent.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

/// Build a heterogeneous `Vec<Value>` for the positional-value entry points.
///
/// # Example
/// ```
/// use crudsql::params;
///
/// let values = params!["Charlie", 35, "male"];
/// assert_eq!(values.len(), 3);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Value::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_blank_text_are_absent() {
        assert!(!Value::Null.is_present());
        assert!(!Value::from("").is_present());
        assert!(!Value::from("   ").is_present());
        assert!(!Value::from(None::<i32>).is_present());
    }

    #[test]
    fn test_only_strings_get_the_blank_check() {
        // Zero and false are ordinary values, not "blank".
        assert!(Value::from(0).is_present());
        assert!(Value::from(0.0).is_present());
        assert!(Value::from(false).is_present());
        assert!(Value::from("x").is_present());
    }

    #[test]
    fn test_params_macro_mixes_types() {
        let values = params!["Charlie", 35, true, None::<i64>];
        assert_eq!(
            values,
            vec![
                Value::Text("Charlie".to_string()),
                Value::Int(35),
                Value::Bool(true),
                Value::Null,
            ]
        );
    }

    #[test]
    fn test_serialize_snapshot() {
        let values = params![1, "a", Value::Null];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[1,"a",null]"#);
    }
}
