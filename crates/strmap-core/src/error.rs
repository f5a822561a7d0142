//! Error types for strmap
//!
//! The normalizer itself is total and never fails. Errors only come from
//! the collaborators around it: serde introspection and the encoder.

use thiserror::Error;

/// strmap error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The encoder rejected or failed to write a normalized tree
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// A map key that does not normalize to a text leaf
    #[error("Unsupported key: map keys must be scalar, found {found}")]
    UnsupportedKey { found: &'static str },

    /// Two distinct map keys normalize to the same text
    #[error("Duplicate key: {key:?} appears more than once after normalization")]
    DuplicateKey { key: String },

    /// A `Serialize` implementation reported its own failure
    #[error("Introspection error: {0}")]
    IntrospectionError(String),
}

impl serde::ser::Error for Error {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Error::IntrospectionError(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::EncodingError(err.to_string())
    }
}

/// Result type alias for strmap operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EncodingError("key must be a string".into());
        assert_eq!(err.to_string(), "Encoding error: key must be a string");

        let err = Error::UnsupportedKey { found: "Sequence" };
        assert_eq!(
            err.to_string(),
            "Unsupported key: map keys must be scalar, found Sequence"
        );

        let err = Error::DuplicateKey { key: "".into() };
        assert_eq!(
            err.to_string(),
            "Duplicate key: \"\" appears more than once after normalization"
        );
    }

    #[test]
    fn test_custom_serde_error_is_introspection_error() {
        let err = <Error as serde::ser::Error>::custom("boom");
        assert_eq!(err, Error::IntrospectionError("boom".into()));
    }
}
