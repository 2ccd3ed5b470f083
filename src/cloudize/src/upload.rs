use crate::error::UploadError;
use crate::input::LogicalFileInput;
use crate::storage::ObjectStore;
use slog::{info, warn, Logger};

/// What happened to the physical files of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadSummary {
    /// Files sent to the store.
    pub uploaded: usize,
    /// Files that would have been sent, had this not been a dry run.
    pub dry_run: usize,
    /// Directories, which are never uploaded.
    pub skipped_directories: usize,
    /// Paths that are neither a file nor a directory.
    pub missing: usize,
    /// Total size of the files uploaded (or that would have been).
    pub bytes: u64,
}

/// Uploads every physical file of every input, one at a time, in discovery
/// order with each primary before its secondaries.
///
/// Directories and missing files are logged and skipped. With `dry_run` the
/// store is never called.
pub fn upload_file_inputs(
    store: &dyn ObjectStore,
    file_inputs: &[LogicalFileInput],
    dry_run: bool,
    logger: &Logger,
) -> Result<UploadSummary, UploadError> {
    let mut summary = UploadSummary::default();
    for file in file_inputs.iter().flat_map(|input| input.physical_files()) {
        let src = file.local_path();
        let dest = file
            .remote_key()
            .ok_or_else(|| UploadError::Unplanned(Box::new(src.to_path_buf())))?;

        match cloudize_core::fs::metadata(src) {
            Ok(metadata) if metadata.is_dir() => {
                info!(logger, "Source file {} is a directory. Skipping.", src.display());
                summary.skipped_directories += 1;
            }
            Ok(metadata) if metadata.is_file() => {
                info!(
                    logger,
                    "Uploading {} to {} ({} bytes)",
                    src.display(),
                    dest,
                    metadata.len()
                );
                if dry_run {
                    summary.dry_run += 1;
                } else {
                    store.upload(src, dest).map_err(|err| {
                        UploadError::UploadFailed(Box::new(src.to_path_buf()), err)
                    })?;
                    summary.uploaded += 1;
                }
                summary.bytes += metadata.len();
            }
            _ => {
                warn!(
                    logger,
                    "Could not find source file, potentially just a basepath: {}",
                    src.display()
                );
                summary.missing += 1;
            }
        }
    }
    Ok(summary)
}
