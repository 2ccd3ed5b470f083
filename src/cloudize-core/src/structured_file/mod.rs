use crate::document::{DocumentMap, DocumentNode, Scalar};
use crate::error::structured_file::StructuredFileError;
use crate::error::structured_file::StructuredFileError::{
    DeserializeYamlFileFailed, ReadDocumentFileFailed, SerializeJsonFileFailed,
    SerializeYamlFileFailed, UnsupportedMappingKey, WriteDocumentFileFailed,
};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_yaml::Value;
use std::path::Path;

/// Output encoding of a saved document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// JSON for `.json` files, YAML for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Loads a YAML (or JSON) document, keeping map keys in file order.
pub fn load_document(path: &Path) -> Result<DocumentNode, StructuredFileError> {
    let content = crate::fs::read(path).map_err(ReadDocumentFileFailed)?;
    let value: Value = serde_yaml::from_slice(&content)
        .map_err(|err| DeserializeYamlFileFailed(Box::new(path.to_path_buf()), err))?;
    from_yaml_value(value, path)
}

/// `origin` only labels errors.
///
/// Comments are not part of the document model and are dropped.
pub fn parse_document(text: &str, origin: &Path) -> Result<DocumentNode, StructuredFileError> {
    let value: Value = serde_yaml::from_str(text)
        .map_err(|err| DeserializeYamlFileFailed(Box::new(origin.to_path_buf()), err))?;
    from_yaml_value(value, origin)
}

pub fn save_document(path: &Path, document: &DocumentNode) -> Result<(), StructuredFileError> {
    let content = render_document(document, DocumentFormat::from_path(path), path)?;
    crate::fs::composite::ensure_parent_dir_exists(path).map_err(WriteDocumentFileFailed)?;
    crate::fs::write(path, content).map_err(WriteDocumentFileFailed)?;
    Ok(())
}

/// YAML keeps non-string keys as written; JSON renders them as their text.
pub fn render_document(
    document: &DocumentNode,
    format: DocumentFormat,
    origin: &Path,
) -> Result<String, StructuredFileError> {
    match format {
        DocumentFormat::Json => serde_json::to_string_pretty(&JsonDocument(document))
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|err| SerializeJsonFileFailed(Box::new(origin.to_path_buf()), err)),
        DocumentFormat::Yaml => serde_yaml::to_string(document)
            .map_err(|err| SerializeYamlFileFailed(Box::new(origin.to_path_buf()), err)),
    }
}

/// JSON object keys must be strings.
struct JsonDocument<'a>(&'a DocumentNode);

impl Serialize for JsonDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            DocumentNode::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    out.serialize_entry(&key.to_string(), &JsonDocument(value))?;
                }
                out.end()
            }
            DocumentNode::Sequence(items) => {
                let mut out = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    out.serialize_element(&JsonDocument(item))?;
                }
                out.end()
            }
            DocumentNode::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

fn from_yaml_value(value: Value, origin: &Path) -> Result<DocumentNode, StructuredFileError> {
    let node = match value {
        Value::Null => DocumentNode::Scalar(Scalar::Null),
        Value::Bool(b) => DocumentNode::Scalar(Scalar::Bool(b)),
        Value::Number(n) => DocumentNode::Scalar(Scalar::Number(n)),
        Value::String(s) => DocumentNode::Scalar(Scalar::String(s)),
        Value::Sequence(items) => DocumentNode::Sequence(
            items
                .into_iter()
                .map(|item| from_yaml_value(item, origin))
                .collect::<Result<_, _>>()?,
        ),
        Value::Mapping(mapping) => {
            let mut map = DocumentMap::new();
            for (key, value) in mapping {
                map.insert(mapping_key(key, origin)?, from_yaml_value(value, origin)?);
            }
            DocumentNode::Map(map)
        }
        // tags carry no meaning for file discovery
        Value::Tagged(tagged) => from_yaml_value(tagged.value, origin)?,
    };
    Ok(node)
}

fn mapping_key(key: Value, origin: &Path) -> Result<Scalar, StructuredFileError> {
    match key {
        Value::String(s) => Ok(Scalar::String(s)),
        Value::Bool(b) => Ok(Scalar::Bool(b)),
        Value::Number(n) => Ok(Scalar::Number(n)),
        Value::Null => Ok(Scalar::Null),
        Value::Tagged(tagged) => mapping_key(tagged.value, origin),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err(UnsupportedMappingKey(Box::new(origin.to_path_buf())))
        }
    }
}
