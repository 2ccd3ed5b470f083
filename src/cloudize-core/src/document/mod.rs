//! An in-memory model of YAML/JSON documents that keeps map keys in the order
//! they were written.
pub mod access;
pub mod path;
pub mod walk;

pub use path::{NodePath, PathStep};

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_yaml::Number;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    Map(DocumentMap),
    Sequence(Vec<DocumentNode>),
    Scalar(Scalar),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    /// Kept as written: integers beyond `i64` and floats are not coerced.
    Number(Number),
    String(String),
}

/// Scalar-keyed map that iterates in insertion order.
///
/// Lookups go by the key's text, so `1` and `true` keys are reachable through
/// the same string paths the walker hands out. A string key wins over a
/// non-string key with the same text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentMap {
    entries: Vec<(Scalar, DocumentNode)>,
}

impl DocumentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| matches!(k, Scalar::String(s) if s == key))
            .or_else(|| {
                self.entries
                    .iter()
                    .position(|(k, _)| !matches!(k, Scalar::String(_)) && k.to_string() == key)
            })
    }

    pub fn get(&self, key: &str) -> Option<&DocumentNode> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Replaces the value in place when the key exists, otherwise appends.
    pub fn insert(&mut self, key: impl Into<Scalar>, value: DocumentNode) -> Option<DocumentNode> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Mutable access to the value at `key`, appending a null entry first if
    /// the key is missing.
    pub fn entry_mut(&mut self, key: &str) -> &mut DocumentNode {
        let index = match self.position(key) {
            Some(index) => index,
            None => {
                self.entries.push((Scalar::from(key), DocumentNode::null()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Scalar, &DocumentNode)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Into<Scalar>> FromIterator<(K, DocumentNode)> for DocumentMap {
    fn from_iter<I: IntoIterator<Item = (K, DocumentNode)>>(iter: I) -> Self {
        let mut map = DocumentMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for DocumentMap {
    type Item = (Scalar, DocumentNode);
    type IntoIter = std::vec::IntoIter<(Scalar, DocumentNode)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl DocumentNode {
    pub fn null() -> Self {
        DocumentNode::Scalar(Scalar::Null)
    }

    pub fn empty_map() -> Self {
        DocumentNode::Map(DocumentMap::new())
    }

    pub fn string(s: impl Into<String>) -> Self {
        DocumentNode::Scalar(Scalar::String(s.into()))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DocumentNode::Scalar(Scalar::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&DocumentMap> {
        match self {
            DocumentNode::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[DocumentNode]> {
        match self {
            DocumentNode::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// `false` for null, `false`, zero, and empty strings, maps and sequences.
    pub fn is_truthy(&self) -> bool {
        match self {
            DocumentNode::Map(map) => !map.is_empty(),
            DocumentNode::Sequence(items) => !items.is_empty(),
            DocumentNode::Scalar(Scalar::Null) => false,
            DocumentNode::Scalar(Scalar::Bool(b)) => *b,
            DocumentNode::Scalar(Scalar::Number(n)) => n.as_f64() != Some(0.0),
            DocumentNode::Scalar(Scalar::String(s)) => !s.is_empty(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<Number> for Scalar {
    fn from(n: Number) -> Self {
        Scalar::Number(n)
    }
}

impl From<&str> for DocumentNode {
    fn from(s: &str) -> Self {
        DocumentNode::string(s)
    }
}

impl From<String> for DocumentNode {
    fn from(s: String) -> Self {
        DocumentNode::string(s)
    }
}

impl From<DocumentMap> for DocumentNode {
    fn from(map: DocumentMap) -> Self {
        DocumentNode::Map(map)
    }
}

impl From<Vec<DocumentNode>> for DocumentNode {
    fn from(items: Vec<DocumentNode>) -> Self {
        DocumentNode::Sequence(items)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::String(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Number(n) => n.serialize(serializer),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for DocumentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DocumentNode::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            DocumentNode::Sequence(items) => {
                let mut out = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    out.serialize_element(item)?;
                }
                out.end()
            }
            DocumentNode::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_position_of_existing_key() {
        let mut map = DocumentMap::new();
        map.insert("b", "1".into());
        map.insert("a", "2".into());
        map.insert("b", "3".into());
        let keys: Vec<String> = map.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(map.get("b"), Some(&DocumentNode::string("3")));
    }

    #[test]
    fn truthiness_follows_emptiness() {
        assert!(!DocumentNode::null().is_truthy());
        assert!(!DocumentNode::empty_map().is_truthy());
        assert!(!DocumentNode::string("").is_truthy());
        assert!(!DocumentNode::Scalar(Scalar::Number(Number::from(0))).is_truthy());
        assert!(!DocumentNode::Scalar(Scalar::Number(Number::from(-0.0))).is_truthy());
        assert!(DocumentNode::Scalar(Scalar::Number(Number::from(u64::MAX))).is_truthy());
        assert!(DocumentNode::string("x").is_truthy());
        assert!(DocumentNode::Sequence(vec![DocumentNode::null()]).is_truthy());
    }

    #[test]
    fn serializes_in_insertion_order() {
        let map: DocumentMap = [
            ("z", DocumentNode::Scalar(Scalar::Number(Number::from(1)))),
            ("a", DocumentNode::Scalar(Scalar::Bool(true))),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&DocumentNode::Map(map)).unwrap();
        assert_eq!(json, r#"{"z":1,"a":true}"#);
    }

    #[test]
    fn non_string_keys_are_found_by_their_text() {
        let mut map = DocumentMap::new();
        map.insert(Scalar::Number(Number::from(1)), "number".into());
        map.insert(Scalar::Bool(true), "bool".into());
        assert_eq!(map.get("1"), Some(&DocumentNode::string("number")));
        assert_eq!(map.get("true"), Some(&DocumentNode::string("bool")));

        map.insert("1", "string".into());
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("1"), Some(&DocumentNode::string("string")));

        *map.entry_mut("true") = "replaced".into();
        assert_eq!(map.len(), 3);
        assert_eq!(
            map.iter().nth(1),
            Some((&Scalar::Bool(true), &DocumentNode::string("replaced")))
        );
    }
}
