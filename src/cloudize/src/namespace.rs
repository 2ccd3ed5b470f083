use crate::error::PlanNamespaceError;
use crate::input::LogicalFileInput;
use cloudize_core::error::foundation::FoundationError;
use cloudize_core::foundation::{
    format_date, get_current_date, get_user_name, validate_user_name,
};
use cloudize_core::fs::path::{deepest_shared_ancestor, strip_ancestor};
use std::path::{Component, Path, PathBuf};
use time::Date;

/// The prefix every remote key of a run starts with:
/// `input_data/<user>/<YYYY-MM-DD>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadNamespace {
    prefix: String,
}

impl UploadNamespace {
    const SEGMENT: &'static str = "input_data";

    /// Namespace for `user` on `date`.
    pub fn new(user: &str, date: Date) -> Result<Self, FoundationError> {
        Ok(UploadNamespace {
            prefix: format!("{}/{}/{}", Self::SEGMENT, user, format_date(date)?),
        })
    }

    /// Namespace for the OS user, dated today.
    pub fn for_current_user() -> Result<Self, FoundationError> {
        Self::new(&get_user_name()?, get_current_date())
    }

    /// Namespace for an explicitly named user, dated today.
    pub fn with_user(user: String) -> Result<Self, FoundationError> {
        let user = validate_user_name(user)?;
        Self::new(&user, get_current_date())
    }

    /// The key prefix, without a trailing `/`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The remote key for a path relative to the shared ancestor. Components
    /// are always joined with `/`, whatever the local separator.
    pub fn key_for(&self, relative: &Path) -> String {
        let mut key = self.prefix.clone();
        for component in relative.components() {
            if let Component::Normal(part) = component {
                key.push('/');
                key.push_str(&part.to_string_lossy());
            }
        }
        key
    }
}

/// Assigns a remote key to every physical file of every input.
///
/// Keys are the file's path relative to the deepest directory shared by all
/// files, under `namespace`. Returns that directory, or `None` when there are
/// no files to plan.
pub fn plan_namespace(
    file_inputs: &mut [LogicalFileInput],
    namespace: &UploadNamespace,
) -> Result<Option<PathBuf>, PlanNamespaceError> {
    let local_paths: Vec<PathBuf> = file_inputs
        .iter()
        .flat_map(|input| input.physical_files())
        .map(|file| file.local_path().to_path_buf())
        .collect();
    let Some(first) = local_paths.first() else {
        return Ok(None);
    };
    let ancestor = deepest_shared_ancestor(&local_paths).ok_or_else(|| {
        let other = local_paths
            .iter()
            .find(|path| *path != first)
            .unwrap_or(first);
        PlanNamespaceError::NoSharedAncestor(Box::new(first.clone()), Box::new(other.clone()))
    })?;

    for file in file_inputs
        .iter_mut()
        .flat_map(|input| input.physical_files_mut())
    {
        let relative = strip_ancestor(file.local_path(), &ancestor).ok_or_else(|| {
            PlanNamespaceError::OutsideSharedAncestor {
                path: Box::new(file.local_path().to_path_buf()),
                ancestor: Box::new(ancestor.clone()),
            }
        })?;
        let key = namespace.key_for(relative);
        file.set_remote_key(key);
    }
    Ok(Some(ancestor))
}
