//! Discovery of the files referenced by a workflow inputs document.
mod suffix;

pub use suffix::SuffixRule;

use crate::workflow::SecondaryFileSuffixes;
use cloudize_core::document::walk::visit;
use cloudize_core::document::{DocumentNode, NodePath, Scalar};
use cloudize_core::fs::path::{expand_relative, resolve};
use slog::{debug, warn, Logger};
use std::path::{Path, PathBuf};

/// One local file that needs to end up in the object store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalFile {
    local_path: PathBuf,
    remote_key: Option<String>,
}

impl PhysicalFile {
    /// `local_path` should be absolute; symlinks are resolved for the part of
    /// it that exists.
    pub fn new(local_path: &Path) -> Self {
        PhysicalFile {
            local_path: resolve(local_path),
            remote_key: None,
        }
    }

    /// Absolute, resolved local path.
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Object name in the store, once the namespace has been planned.
    pub fn remote_key(&self) -> Option<&str> {
        self.remote_key.as_deref()
    }

    pub(crate) fn set_remote_key(&mut self, remote_key: String) {
        self.remote_key = Some(remote_key);
    }
}

/// A file-valued input: the primary file plus the secondary files its input
/// declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalFileInput {
    primary: PhysicalFile,
    document_path: NodePath,
    secondaries: Vec<PhysicalFile>,
}

impl LogicalFileInput {
    /// Expands every suffix rule against `primary`, in declaration order.
    pub fn new(primary: &Path, document_path: NodePath, suffixes: &[SuffixRule]) -> Self {
        LogicalFileInput {
            primary: PhysicalFile::new(primary),
            document_path,
            secondaries: suffixes
                .iter()
                .map(|rule| PhysicalFile::new(&rule.apply(primary)))
                .collect(),
        }
    }

    /// The file the document names directly.
    pub fn primary(&self) -> &PhysicalFile {
        &self.primary
    }

    /// Where the input's value lives in the inputs document.
    pub fn document_path(&self) -> &NodePath {
        &self.document_path
    }

    /// Secondary files, in the order their suffixes were declared.
    pub fn secondaries(&self) -> &[PhysicalFile] {
        &self.secondaries
    }

    /// The primary file followed by the secondary files.
    pub fn physical_files(&self) -> impl Iterator<Item = &PhysicalFile> {
        std::iter::once(&self.primary).chain(self.secondaries.iter())
    }

    pub(crate) fn physical_files_mut(&mut self) -> impl Iterator<Item = &mut PhysicalFile> {
        std::iter::once(&mut self.primary).chain(self.secondaries.iter_mut())
    }
}

enum FileReference<'a> {
    /// A `class: File` record and its `path`, if it has a usable one.
    Record(Option<&'a str>),
    /// A string naming an existing regular file.
    Bare(&'a str),
}

fn classify<'a>(
    node: &'a DocumentNode,
    input_name: Option<&str>,
    base_path: &Path,
) -> Option<FileReference<'a>> {
    match node {
        DocumentNode::Map(map)
            if map.get("class").and_then(DocumentNode::as_str) == Some("File") =>
        {
            let path = map
                .get("path")
                .and_then(DocumentNode::as_str)
                .filter(|path| !path.is_empty());
            Some(FileReference::Record(path))
        }
        DocumentNode::Scalar(Scalar::String(value))
            if input_name != Some("path")
                && !value.is_empty()
                && expand_relative(Path::new(value), base_path).is_file() =>
        {
            Some(FileReference::Bare(value))
        }
        _ => None,
    }
}

/// Crawls `inputs` for file references.
///
/// A node is a file reference when it is a map with `class: File`, or a
/// string (not itself the `path` of a record) naming a regular file relative
/// to `base_path`. Results come in post-order: nested references
/// before the containers holding them.
pub fn parse_file_inputs(
    workflow: &impl SecondaryFileSuffixes,
    inputs: &DocumentNode,
    base_path: &Path,
    logger: &Logger,
) -> Vec<LogicalFileInput> {
    let mut file_inputs = vec![];
    visit(inputs, &mut |node, node_path| {
        let input_name = node_path.input_name();
        let path = match classify(node, input_name, base_path) {
            None => return,
            Some(FileReference::Bare(path)) => path,
            Some(FileReference::Record(Some(path))) => path,
            Some(FileReference::Record(None)) => {
                warn!(logger, "File at {} has no path. Skipping.", node_path);
                return;
            }
        };
        let primary = expand_relative(Path::new(path), base_path);
        let suffixes = input_name
            .map(|name| workflow.declared_suffixes(name))
            .unwrap_or_default();
        debug!(
            logger,
            "Found file input at {}: {} ({} secondary files)",
            node_path,
            primary.display(),
            suffixes.len()
        );
        file_inputs.push(LogicalFileInput::new(&primary, node_path.clone(), &suffixes));
    });
    file_inputs
}
