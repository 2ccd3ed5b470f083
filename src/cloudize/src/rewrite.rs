use crate::error::RewriteError;
use crate::input::LogicalFileInput;
use cloudize_core::document::access::{get_deep, set_deep};
use cloudize_core::document::DocumentNode;

/// A bucket as seen from a workflow document, e.g. `gs://my-bucket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteBucket {
    scheme: String,
    name: String,
}

impl RemoteBucket {
    /// `scheme` is the URI scheme without `://`.
    pub fn new(scheme: impl Into<String>, name: impl Into<String>) -> Self {
        RemoteBucket {
            scheme: scheme.into(),
            name: name.into(),
        }
    }

    /// The bucket name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The URI of the object stored under `remote_key`.
    pub fn uri(&self, remote_key: &str) -> String {
        format!("{}://{}/{}", self.scheme, self.name, remote_key)
    }
}

/// Returns a copy of `original` in which every file input points at its
/// primary file's remote URI.
///
/// Records with a non-empty `path` get their `path` replaced; any other file
/// reference is replaced as a whole.
pub fn rewrite_document(
    original: &DocumentNode,
    file_inputs: &[LogicalFileInput],
    bucket: &RemoteBucket,
) -> Result<DocumentNode, RewriteError> {
    let mut rewritten = original.clone();
    for input in file_inputs {
        let document_path = input.document_path();
        let remote_key = input
            .primary()
            .remote_key()
            .ok_or_else(|| RewriteError::Unplanned(document_path.clone()))?;
        let uri = DocumentNode::string(bucket.uri(remote_key));

        let path_field = document_path.child("path");
        let target = match get_deep(&rewritten, path_field.steps()) {
            Some(value) if value.is_truthy() => path_field,
            _ => document_path.clone(),
        };
        set_deep(&mut rewritten, target.steps(), uri)
            .map_err(|err| RewriteError::SetPathFailed(target.clone(), err))?;
    }
    Ok(rewritten)
}
