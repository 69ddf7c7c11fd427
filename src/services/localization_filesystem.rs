use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::ports::LocalizationStore;

/// Filesystem-based localization store rooted at `<repo>/<base_dir>`.
#[derive(Debug, Clone)]
pub struct FilesystemLocalizationStore {
    root: PathBuf,
}

impl FilesystemLocalizationStore {
    /// Create a store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, AppError> {
        resolve_within(&self.root, path)
    }
}

/// Join `path` onto `root`, rejecting absolute paths and `..` components.
pub(crate) fn resolve_within(root: &Path, path: &str) -> Result<PathBuf, AppError> {
    let relative = Path::new(path);
    let escapes = relative
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if escapes {
        return Err(AppError::PathEscapesRepository(path.to_string()));
    }
    Ok(root.join(relative))
}

impl LocalizationStore for FilesystemLocalizationStore {
    fn file_exists(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_file()).unwrap_or(false)
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full = self.resolve(path)?;
        Ok(fs::read_to_string(full)?)
    }

    fn create_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().write(true).create_new(true).open(&full)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full = self.resolve(path)?;
        let mut file = OpenOptions::new().append(true).open(&full)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}
