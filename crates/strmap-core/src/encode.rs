//! JSON encoding of normalized trees
//!
//! Encoder failures surface as `EncodingError`; nothing here retries or
//! rewrites the tree.

use std::io::Write;

use serde::Serialize;

use crate::normalized::Normalized;
use crate::{Error, Result};

/// Encode a normalized tree as compact JSON
pub fn to_json_string(tree: &Normalized) -> Result<String> {
    serde_json::to_string(tree).map_err(encoding_error)
}

/// Encode a normalized tree as indented JSON
pub fn to_json_string_pretty(tree: &Normalized) -> Result<String> {
    serde_json::to_string_pretty(tree).map_err(encoding_error)
}

/// Encode a normalized tree as compact JSON bytes
pub fn to_json_vec(tree: &Normalized) -> Result<Vec<u8>> {
    serde_json::to_vec(tree).map_err(encoding_error)
}

/// Stream a normalized tree as JSON into `writer`
pub fn write_json<W: Write>(writer: W, tree: &Normalized, pretty: bool) -> Result<()> {
    let res = if pretty {
        serde_json::to_writer_pretty(writer, tree)
    } else {
        serde_json::to_writer(writer, tree)
    };
    res.map_err(encoding_error)
}

/// Introspect, normalize and encode any serializable value
///
/// # Example
/// ```
/// let json = strmap_core::encode_json(&vec![Some(1.5f64), None]).unwrap();
/// assert_eq!(json, r#"["1.5",""]"#);
/// ```
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    to_json_string(&crate::to_normalized(value)?)
}

fn encoding_error(err: serde_json::Error) -> Error {
    tracing::debug!(error = %err, "failed to encode normalized tree");
    Error::from(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample() -> Normalized {
        let mut map = BTreeMap::new();
        map.insert("no".to_string(), Normalized::from("1"));
        map.insert(
            "tags".to_string(),
            Normalized::Sequence(vec!["a".into(), "".into()]),
        );
        Normalized::Mapping(map)
    }

    #[test]
    fn test_compact_json() {
        assert_eq!(
            to_json_string(&sample()).unwrap(),
            r#"{"no":"1","tags":["a",""]}"#
        );
        assert_eq!(to_json_vec(&sample()).unwrap(), br#"{"no":"1","tags":["a",""]}"#.to_vec());
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let pretty = to_json_string_pretty(&sample()).unwrap();
        assert!(pretty.contains('\n'));
        let back: Normalized = serde_json::from_str(&pretty).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_write_json() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample(), false).unwrap();
        assert_eq!(buf, to_json_vec(&sample()).unwrap());
    }

    #[test]
    fn test_writer_failure_is_encoding_error() {
        let err = write_json(FailingWriter, &sample(), true).unwrap_err();
        match err {
            Error::EncodingError(msg) => assert!(msg.contains("pipe closed"), "got {}", msg),
            other => panic!("expected EncodingError, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_json_forces_strings() {
        let mut data = BTreeMap::new();
        data.insert("count", serde_json::json!(3));
        data.insert("ok", serde_json::json!(true));
        assert_eq!(encode_json(&data).unwrap(), r#"{"count":"3","ok":"1"}"#);
    }

    #[test]
    fn test_encode_json_propagates_key_error() {
        let mut data = BTreeMap::new();
        data.insert((1, 2), "pair");
        assert!(matches!(
            encode_json(&data),
            Err(Error::UnsupportedKey { found: "Sequence" })
        ));
    }
}
