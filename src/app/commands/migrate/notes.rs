//! Reference note lookup with a per-run cache.

use std::collections::HashMap;

use crate::domain::{Note, PropertiesDocument};
use crate::ports::NoteSource;

/// Reference documents fetched during one run, keyed by destination file.
///
/// A failed or missing fetch is cached as `None` so each file is requested once.
#[derive(Debug, Default)]
pub struct NoteCache {
    documents: HashMap<String, Option<PropertiesDocument>>,
}

impl NoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note documenting `key` in the reference copy of `file`.
    pub fn lookup(&mut self, source: &dyn NoteSource, file: &str, key: &str) -> Option<Note> {
        if !self.documents.contains_key(file) {
            let document = match source.fetch(file) {
                Ok(content) => content.as_deref().map(PropertiesDocument::parse),
                Err(err) => {
                    eprintln!("⚠️  {}; using default note for {}", err, file);
                    None
                }
            };
            self.documents.insert(file.to_string(), document);
        }

        self.documents.get(file)?.as_ref()?.note_for(key)
    }

    /// Number of reference files requested so far.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
