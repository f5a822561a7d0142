//! Input domain — everything the normalizer accepts
//!
//! `Value` is a closed sum type. Nominal records enter through the
//! [`Record`] capability: a type describes its own fields as
//! name / alternate-name / value triples, and the normalizer renders them
//! without any runtime reflection.

use std::collections::{BTreeMap, HashMap};

use crate::normalized::Normalized;

// ── Core Types ────────────────────────────────────────────

/// A value of the input domain
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Optional-reference cell, possibly empty
    Optional(Option<Box<Value>>),
    /// Nominal record, fields in declared order
    Record(Vec<Field>),
    /// Text-keyed mapping
    Mapping(BTreeMap<String, Value>),
    /// Lists and fixed-length arrays alike
    Sequence(Vec<Value>),
    /// Text scalar
    Text(String),
    /// Signed integer of any width
    Int(i128),
    /// Unsigned integer of any width
    UInt(u128),
    /// 32-bit float, formatted at 32-bit precision
    Float32(f32),
    /// 64-bit float
    Float64(f64),
    /// Boolean scalar
    Bool(bool),
    /// The absence value
    Absent,
}

/// One declared field of a record
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Declared field name, case preserved
    pub name: String,
    /// Alternate output name, used as the key when present
    pub rename: Option<String>,
    pub value: Value,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Field {
            name: name.into(),
            rename: None,
            value: value.into(),
        }
    }

    /// Attach an alternate output name
    pub fn renamed(mut self, rename: impl Into<String>) -> Self {
        self.rename = Some(rename.into());
        self
    }

    /// The key this field is emitted under
    pub fn key(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.name)
    }
}

/// Capability implemented by nominal record types
///
/// Implementors list every declared field, in declaration order.
///
/// ```
/// use strmap_core::{normalize, Field, Record, Value};
///
/// struct User {
///     no: i64,
///     name: String,
/// }
///
/// impl Record for User {
///     fn fields(&self) -> Vec<Field> {
///         vec![
///             Field::new("No", self.no).renamed("no"),
///             Field::new("Name", self.name.as_str()),
///         ]
///     }
/// }
///
/// let user = User { no: 1, name: "User1".into() };
/// let out = normalize(Value::record(&user));
/// assert_eq!(out.get("no").and_then(|n| n.as_text()), Some("1"));
/// assert_eq!(out.get("Name").and_then(|n| n.as_text()), Some("User1"));
/// ```
pub trait Record {
    fn fields(&self) -> Vec<Field>;
}

impl Value {
    /// Capture a record's current field values
    pub fn record<R: Record + ?Sized>(record: &R) -> Self {
        Value::Record(record.fields())
    }

    /// Build a sequence of records
    pub fn records<'a, R, I>(records: I) -> Self
    where
        R: Record + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        Value::Sequence(records.into_iter().map(Value::record).collect())
    }

    /// Get the shape name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Optional(_) => "Optional",
            Value::Record(_) => "Record",
            Value::Mapping(_) => "Mapping",
            Value::Sequence(_) => "Sequence",
            Value::Text(_) => "Text",
            Value::Int(_) => "Int",
            Value::UInt(_) => "UInt",
            Value::Float32(_) => "Float32",
            Value::Float64(_) => "Float64",
            Value::Bool(_) => "Bool",
            Value::Absent => "Absent",
        }
    }
}

// ── Conversions ───────────────────────────────────────────

macro_rules! impl_from_int {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $wide)
                }
            }
        )*
    };
}

impl_from_int!(Int as i128: i8, i16, i32, i64, i128, isize);
impl_from_int!(UInt as u128: u8, u16, u32, u64, u128, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Absent
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Text(v.to_string())
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

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::Optional(v.map(|inner| Box::new(inner.into())))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, T: Into<Value>> From<BTreeMap<K, T>> for Value {
    fn from(v: BTreeMap<K, T>) -> Self {
        Value::Mapping(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, T: Into<Value>, S> From<HashMap<K, T, S>> for Value {
    fn from(v: HashMap<K, T, S>) -> Self {
        Value::Mapping(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, T: Into<Value>> FromIterator<(K, T)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Re-entry of an already-normalized tree
impl From<Normalized> for Value {
    fn from(n: Normalized) -> Self {
        match n {
            Normalized::Text(s) => Value::Text(s),
            Normalized::Sequence(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            Normalized::Mapping(map) => {
                Value::Mapping(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Convert parsed JSON (null → Absent, integers stay integers)
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Value::UInt(u as u128)
                } else if let Some(i) = n.as_i64() {
                    Value::Int(i as i128)
                } else {
                    Value::Float64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(arr) => {
                Value::Sequence(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Mapping(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i32,
        y: i32,
    }

    impl Record for Point {
        fn fields(&self) -> Vec<Field> {
            vec![Field::new("X", self.x).renamed("x"), Field::new("Y", self.y)]
        }
    }

    #[test]
    fn test_field_key_prefers_rename() {
        let field = Field::new("IsAdmin", true).renamed("is_admin");
        assert_eq!(field.key(), "is_admin");
        assert_eq!(Field::new("Name", "n").key(), "Name");
    }

    #[test]
    fn test_record_capture_keeps_declared_order() {
        let value = Value::record(&Point { x: 1, y: 2 });
        match value {
            Value::Record(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
                assert_eq!(names, vec!["X", "Y"]);
                assert_eq!(fields[0].value, Value::Int(1));
            }
            other => panic!("expected Record, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_integer_widths_widen() {
        assert_eq!(Value::from(-5i8), Value::Int(-5));
        assert_eq!(Value::from(i64::MIN), Value::Int(i64::MIN as i128));
        assert_eq!(Value::from(7u8), Value::UInt(7));
        assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX as u128));
    }

    #[test]
    fn test_option_becomes_cell() {
        assert_eq!(Value::from(None::<i32>), Value::Optional(None));
        assert_eq!(
            Value::from(Some("x")),
            Value::Optional(Some(Box::new(Value::Text("x".into()))))
        );
    }

    #[test]
    fn test_array_and_vec_are_sequences() {
        assert_eq!(Value::from([1u8, 2]), Value::from(vec![1u8, 2]));
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({"a": null, "b": -3, "c": 4, "d": 1.5, "e": [true]});
        let value = Value::from(json);
        let expected: Value = vec![
            ("a", Value::Absent),
            ("b", Value::Int(-3)),
            ("c", Value::UInt(4)),
            ("d", Value::Float64(1.5)),
            ("e", Value::Sequence(vec![Value::Bool(true)])),
        ]
        .into_iter()
        .collect();
        assert_eq!(value, expected);
    }

    #[test]
    fn test_from_normalized_preserves_shape() {
        let n = Normalized::Sequence(vec![Normalized::Text("1".into())]);
        assert_eq!(
            Value::from(n),
            Value::Sequence(vec![Value::Text("1".into())])
        );
    }
}
