use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;

use crate::domain::AppError;
use crate::ports::LocalizationStore;

/// In-memory localization store for testing.
#[derive(Debug, Default)]
pub struct MemoryLocalizationStore {
    files: RefCell<BTreeMap<String, String>>,
    /// Files whose reads fail, to exercise per-entry failures.
    unreadable: RefCell<Vec<String>>,
}

impl MemoryLocalizationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
        self
    }

    pub fn with_unreadable(self, path: &str) -> Self {
        self.unreadable.borrow_mut().push(path.to_string());
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.files.borrow().clone()
    }
}

impl LocalizationStore for MemoryLocalizationStore {
    fn file_exists(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        if self.unreadable.borrow().iter().any(|p| p == path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied").into());
        }
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()).into())
    }

    fn create_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let mut files = self.files.borrow_mut();
        if files.contains_key(path) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, path.to_string()).into());
        }
        files.insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let mut files = self.files.borrow_mut();
        let existing = files
            .get_mut(path)
            .ok_or_else(|| AppError::from(io::Error::new(io::ErrorKind::NotFound, path.to_string())))?;
        existing.push_str(content);
        Ok(())
    }
}
