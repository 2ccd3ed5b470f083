pub mod composite;
pub mod path;

use crate::error::fs::{
    CreateDirAllError, FsError, NoParentPathError, OpenFileError,
    ReadFileError, ReadMetadataError, WriteFileError,
};
use std::fs::{File, Metadata};
use std::path::{Path, PathBuf};

pub fn create_dir_all(path: &Path) -> Result<(), FsError> {
    std::fs::create_dir_all(path).map_err(|source| {
        CreateDirAllError {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

pub fn metadata(path: &Path) -> Result<Metadata, FsError> {
    std::fs::metadata(path).map_err(|source| {
        ReadMetadataError {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

pub fn open(path: &Path) -> Result<File, FsError> {
    File::open(path).map_err(|source| {
        OpenFileError {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

pub fn parent(path: &Path) -> Result<PathBuf, FsError> {
    match path.parent() {
        None => Err(NoParentPathError(path.to_path_buf()).into()),
        Some(parent) => Ok(parent.to_path_buf()),
    }
}

pub fn read(path: &Path) -> Result<Vec<u8>, ReadFileError> {
    std::fs::read(path).map_err(|source| ReadFileError {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<(), FsError> {
    std::fs::write(path.as_ref(), contents).map_err(|source| {
        WriteFileError {
            path: path.as_ref().to_path_buf(),
            source,
        }
        .into()
    })
}
