use std::ffi::OsString;
use std::path::{Path, PathBuf};

const STRIP_EXTENSION: char = '^';

/// How a secondary file is named from its primary file.
///
/// Each leading `^` in the declared suffix strips one extension from the
/// primary path; the rest of the suffix is then appended verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    strip_extensions: usize,
    suffix: String,
}

impl SuffixRule {
    /// Parses a suffix such as `.tbi`, `^.bai` or `^^.idx`.
    pub fn parse(declared: &str) -> Self {
        let tail = declared.trim_start_matches(STRIP_EXTENSION);
        SuffixRule {
            strip_extensions: declared.len() - tail.len(),
            suffix: tail.to_string(),
        }
    }

    /// Number of extensions removed before appending.
    pub fn strip_extensions(&self) -> usize {
        self.strip_extensions
    }

    /// The literal text appended after stripping.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The secondary file path for `primary`.
    pub fn apply(&self, primary: &Path) -> PathBuf {
        let mut base = primary.to_path_buf();
        for _ in 0..self.strip_extensions {
            base = match (base.parent(), base.file_stem()) {
                (Some(parent), Some(stem)) => parent.join(stem),
                _ => break,
            };
        }
        let mut name = OsString::from(base);
        name.push(&self.suffix);
        PathBuf::from(name)
    }
}
