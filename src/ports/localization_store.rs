//! Localization repository file access.
//!
//! This port provides file I/O scoped to the directory that mapping file
//! names resolve against. It does not know about DTD or properties syntax.

use crate::domain::AppError;

/// Port for reading DTD files and writing properties files.
///
/// All `path` arguments are relative to the store root.
/// Implementations must reject paths that escape the root boundary.
pub trait LocalizationStore {
    /// Check whether a file exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Create a new file with `content`, creating parent directories as needed.
    fn create_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Append `content` to an existing file.
    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Read a file if it exists.
    fn read_optional(&self, path: &str) -> Result<Option<String>, AppError> {
        if self.file_exists(path) { self.read_file(path).map(Some) } else { Ok(None) }
    }
}
