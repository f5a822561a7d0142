//! strmap core — force every leaf of structured data into text
//!
//! Numbers, booleans and absent values are rewritten as canonical strings
//! while the mapping / sequence shape of the data is kept. The result can
//! go wherever only string-typed fields are accepted: form encodings,
//! log sinks, loosely typed JSON consumers.
//!
//! # Architecture
//!
//! ```text
//! T: Serialize ──ser──┐
//! impl Record ────────┼──→ Value ──normalize──→ Normalized ──encode──→ JSON
//! serde_json::Value ──┘
//! ```
//!
//! # Guarantees
//!
//! - **Total**: normalization never fails; only introspection and encoding can
//! - **Deterministic**: mappings are key-ordered, output is byte-stable
//! - **Idempotent**: normalizing a normalized tree returns it unchanged

/// Version of the strmap-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod encode;
pub mod error;
pub mod normalized;
pub mod normalizer;
pub mod ser;
pub mod value;

pub use encode::{encode_json, to_json_string, to_json_string_pretty};
pub use error::{Error, Result};
pub use normalized::Normalized;
pub use normalizer::normalize;
pub use ser::{to_normalized, to_value};
pub use value::{Field, Record, Value};

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct User {
        Name: String,
        Age: u32,
        IsAdmin: bool,
    }

    #[derive(serde::Serialize)]
    struct Response {
        Users: Vec<User>,
        Length: i32,
        Status: String,
        Nil: Option<Box<i32>>,
    }

    fn test_response() -> Response {
        let user = |name: &str, age, admin| User {
            Name: name.into(),
            Age: age,
            IsAdmin: admin,
        };
        Response {
            Users: vec![
                user("Alice", 60, true),
                user("Bob", 60, true),
                user("Carol", 50, false),
                user("Dave", 60, false),
            ],
            Length: 4,
            Status: "OK".into(),
            Nil: None,
        }
    }

    #[test]
    fn test_plain_and_forced_json_differ_only_in_leaves() {
        let resp = test_response();
        let plain = serde_json::to_string(&resp).unwrap();
        assert!(plain.contains(r#""Length":4"#));
        assert!(plain.contains(r#""Nil":null"#));

        let forced = encode_json(&resp).unwrap();
        assert_eq!(
            forced,
            concat!(
                r#"{"Length":"4","Nil":"","Status":"OK","Users":["#,
                r#"{"Age":"60","IsAdmin":"1","Name":"Alice"},"#,
                r#"{"Age":"60","IsAdmin":"1","Name":"Bob"},"#,
                r#"{"Age":"50","IsAdmin":"0","Name":"Carol"},"#,
                r#"{"Age":"60","IsAdmin":"0","Name":"Dave"}]}"#
            )
        );
    }

    #[test]
    fn test_record_trait_and_serde_agree() {
        struct Manual(User);

        impl Record for Manual {
            fn fields(&self) -> Vec<Field> {
                vec![
                    Field::new("Name", self.0.Name.as_str()),
                    Field::new("Age", self.0.Age),
                    Field::new("IsAdmin", self.0.IsAdmin),
                ]
            }
        }

        let user = User {
            Name: "Alice".into(),
            Age: 60,
            IsAdmin: true,
        };
        let via_serde = to_normalized(&user).unwrap();
        let via_trait = normalize(Value::record(&Manual(user)));
        assert_eq!(via_serde, via_trait);
    }

    #[test]
    fn test_determinism_100_iterations() {
        let first = encode_json(&test_response()).unwrap();
        for i in 0..100 {
            let result = encode_json(&test_response()).unwrap();
            assert_eq!(first, result, "Non-determinism at iteration {}", i);
        }
    }
}
