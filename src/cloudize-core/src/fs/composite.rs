use crate::error::fs::FsError;
use std::path::Path;

pub fn ensure_dir_exists(p: &Path) -> Result<(), FsError> {
    if !p.exists() {
        crate::fs::create_dir_all(p)
    } else {
        Ok(())
    }
}

/// An empty parent (a bare file name) refers to the current directory.
pub fn ensure_parent_dir_exists(d: &Path) -> Result<(), FsError> {
    let parent = crate::fs::parent(d)?;
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    ensure_dir_exists(&parent)
}
