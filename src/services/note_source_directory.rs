use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::NoteSource;
use crate::services::localization_filesystem::resolve_within;

/// Reference properties read from a local directory (e.g. `locales/en-US`).
#[derive(Debug, Clone)]
pub struct DirectoryNoteSource {
    root: PathBuf,
}

impl DirectoryNoteSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl NoteSource for DirectoryNoteSource {
    fn fetch(&self, file: &str) -> Result<Option<String>, AppError> {
        let path = resolve_within(&self.root, file)?;
        if !path.is_file() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
