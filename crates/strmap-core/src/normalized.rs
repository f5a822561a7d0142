//! Output domain — a tree whose only leaves are text

use std::collections::BTreeMap;
use std::fmt;

/// A normalized node
///
/// Mappings use `BTreeMap` so that encoding is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Normalized {
    /// Text leaf
    Text(String),
    /// Ordered sequence of nodes
    Sequence(Vec<Normalized>),
    /// Text-keyed mapping of nodes
    Mapping(BTreeMap<String, Normalized>),
}

impl Normalized {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Normalized::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Normalized]> {
        match self {
            Normalized::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Normalized>> {
        match self {
            Normalized::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key; `None` for missing keys and non-mappings
    pub fn get(&self, key: &str) -> Option<&Normalized> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Get the node kind for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Normalized::Text(_) => "Text",
            Normalized::Sequence(_) => "Sequence",
            Normalized::Mapping(_) => "Mapping",
        }
    }
}

impl From<&str> for Normalized {
    fn from(s: &str) -> Self {
        Normalized::Text(s.to_string())
    }
}

impl From<String> for Normalized {
    fn from(s: String) -> Self {
        Normalized::Text(s)
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalized::Text(s) => write!(f, "{:?}", s),
            Normalized::Sequence(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Normalized::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}
