use crate::error::CloudizeError;
use crate::input::{parse_file_inputs, LogicalFileInput};
use crate::namespace::{plan_namespace, UploadNamespace};
use crate::rewrite::rewrite_document;
use crate::storage::ObjectStore;
use crate::upload::{upload_file_inputs, UploadSummary};
use crate::workflow::WorkflowDefinition;
use cloudize_core::document::DocumentNode;
use cloudize_core::fs::path::resolve;
use cloudize_core::structured_file::{load_document, save_document};
use slog::{debug, info, Logger};
use std::path::{Path, PathBuf};

/// Everything a run needs besides the store.
#[derive(Debug)]
pub struct CloudizeParams<'a> {
    /// The `.cwl` file declaring the workflow's inputs.
    pub workflow_definition: &'a Path,
    /// The inputs document to rewrite. Relative file paths in it are relative
    /// to its directory.
    pub workflow_inputs: &'a Path,
    /// Where the rewritten inputs document goes.
    pub output: &'a Path,
    /// Prefix of every remote key.
    pub namespace: &'a UploadNamespace,
    /// Plan and rewrite, but upload nothing.
    pub dry_run: bool,
}

/// The outcome of a run.
#[derive(Debug)]
pub struct CloudizeReport {
    /// Every file input found, with remote keys assigned.
    pub file_inputs: Vec<LogicalFileInput>,
    /// The inputs document as written to the output path.
    pub rewritten: DocumentNode,
    /// The local directory that remote keys are relative to, if any file was found.
    pub shared_ancestor: Option<PathBuf>,
    /// What happened to each file.
    pub summary: UploadSummary,
}

/// Prepares a workflow's inputs for running in the cloud.
///
/// Finds the files the inputs document refers to, gives each a remote key,
/// writes a copy of the document that points at the remote objects, then
/// uploads the files. The rewritten document is saved before any upload
/// starts.
pub fn cloudize(
    store: &dyn ObjectStore,
    params: &CloudizeParams<'_>,
    logger: &Logger,
) -> Result<CloudizeReport, CloudizeError> {
    let inputs = load_document(params.workflow_inputs).map_err(CloudizeError::LoadInputsFailed)?;
    let workflow = WorkflowDefinition::load(params.workflow_definition)
        .map_err(CloudizeError::LoadWorkflowFailed)?;
    let base_path = resolve(match params.workflow_inputs.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    });
    debug!(logger, "Resolving file inputs relative to {}", base_path.display());

    let mut file_inputs = parse_file_inputs(&workflow, &inputs, &base_path, logger);
    let shared_ancestor = plan_namespace(&mut file_inputs, params.namespace)?;
    if let Some(ancestor) = &shared_ancestor {
        debug!(
            logger,
            "Mapping {} into {}",
            ancestor.display(),
            params.namespace.prefix()
        );
    }

    let rewritten = rewrite_document(&inputs, &file_inputs, &store.remote_bucket())?;
    save_document(params.output, &rewritten).map_err(CloudizeError::SaveOutputFailed)?;
    info!(logger, "Yaml dumped to {}", params.output.display());

    let summary = upload_file_inputs(store, &file_inputs, params.dry_run, logger)?;
    info!(logger, "Completed file upload process.");
    info!(
        logger,
        "{} uploaded, {} not uploaded (dry run), {} directories skipped, {} missing ({} bytes).",
        summary.uploaded,
        summary.dry_run,
        summary.skipped_directories,
        summary.missing,
        summary.bytes
    );

    Ok(CloudizeReport {
        file_inputs,
        rewritten,
        shared_ancestor,
        summary,
    })
}
