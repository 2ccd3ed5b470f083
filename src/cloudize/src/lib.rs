//! A library for moving the local files named by a workflow inputs document
//! into an object store, and rewriting the document to point at them.
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudize::{cloudize, CloudizeParams, GcsBucket, UploadNamespace};
//! use std::path::Path;
//! # fn not_main() -> Result<(), Box<dyn std::error::Error>> {
//! # let logger = slog::Logger::root(slog::Discard, slog::o!());
//! let store = GcsBucket::new("my-bucket", &logger)?;
//! let params = CloudizeParams {
//!     workflow_definition: Path::new("workflow.cwl"),
//!     workflow_inputs: Path::new("inputs.yaml"),
//!     output: Path::new("inputs_cloud.yaml"),
//!     namespace: &UploadNamespace::for_current_user()?,
//!     dry_run: false,
//! };
//! cloudize(&store, &params, &logger)?;
//! # Ok(())
//! # }
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links
)]

mod cloudize;
pub mod error;
pub mod input;
mod namespace;
mod rewrite;
pub mod storage;
mod upload;
mod workflow;

pub use cloudize::{cloudize, CloudizeParams, CloudizeReport};
pub use input::{parse_file_inputs, LogicalFileInput, PhysicalFile, SuffixRule};
pub use namespace::{plan_namespace, UploadNamespace};
pub use rewrite::{rewrite_document, RemoteBucket};
pub use storage::{GcsBucket, ObjectStore};
pub use upload::{upload_file_inputs, UploadSummary};
pub use workflow::{SecondaryFileSuffixes, WorkflowDefinition};
