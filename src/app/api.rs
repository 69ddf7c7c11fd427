//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::app::commands::migrate::{self, MigrateOptions, NoteCache};
use crate::app::config::{load_mappings, load_settings};
use crate::app::AppContext;
use crate::domain::{MigrationSettings, NotesLocation};
use crate::ports::NoteSource;
use crate::services::{
    DirectoryNoteSource, FilesystemLocalizationStore, HttpNoteSource, NoteRenderer,
};

pub use crate::domain::AppError;
pub use crate::domain::{EntryOutcome, EntryReport, MigrationReport};

/// Inputs for a migration run, as given on the command line.
#[derive(Debug, Clone)]
pub struct MigrateRequest {
    /// Localization repository clone.
    pub repository: PathBuf,
    /// Mapping file or directory of mapping files.
    pub config: PathBuf,
    /// Explicit settings file; `<repository>/migrate.toml` is used otherwise.
    pub settings: Option<PathBuf>,
    /// Overrides `migration.base_dir`.
    pub base_dir: Option<String>,
    /// Overrides `notes.from`.
    pub notes_from: Option<String>,
    pub dry_run: bool,
}

impl MigrateRequest {
    pub fn new(repository: impl Into<PathBuf>, config: impl Into<PathBuf>) -> Self {
        Self {
            repository: repository.into(),
            config: config.into(),
            settings: None,
            base_dir: None,
            notes_from: None,
            dry_run: false,
        }
    }
}

/// Migrate every mapping listed under `request.config` into `request.repository`.
pub fn migrate(request: MigrateRequest) -> Result<MigrationReport, AppError> {
    let repository = &request.repository;
    if !repository.is_dir() {
        return Err(AppError::RepositoryNotFound(repository.display().to_string()));
    }
    println!("path: [{}] is valid", repository.display());

    let settings = resolve_settings(&request)?;

    let mappings = load_mappings(&request.config)?;
    println!(
        "config: {} mapping(s) found at [{}]",
        mappings.mappings.len(),
        request.config.display()
    );

    let ctx = create_context(repository, settings)?;
    let options = MigrateOptions { dry_run: request.dry_run };
    let mut notes = NoteCache::new();
    migrate::execute(&ctx, &mappings, &options, &mut notes)
}

/// Layer CLI overrides on top of the settings file.
fn resolve_settings(request: &MigrateRequest) -> Result<MigrationSettings, AppError> {
    let mut settings = load_settings(request.settings.as_deref(), &request.repository)?;
    if let Some(base_dir) = &request.base_dir {
        settings.migration.base_dir = base_dir.clone();
    }
    if let Some(notes_from) = &request.notes_from {
        settings.notes.from = Some(notes_from.clone());
    }
    settings.validate()?;
    Ok(settings)
}

fn create_context(
    repository: &Path,
    settings: MigrationSettings,
) -> Result<AppContext<FilesystemLocalizationStore>, AppError> {
    let store = FilesystemLocalizationStore::new(repository.join(&settings.migration.base_dir));

    let notes: Option<Box<dyn NoteSource>> = match settings.notes.location()? {
        Some(NotesLocation::Directory(dir)) => {
            Some(Box::new(DirectoryNoteSource::new(repository.join(dir))))
        }
        Some(NotesLocation::Remote(url)) => {
            Some(Box::new(HttpNoteSource::new(url, settings.notes.timeout_secs)?))
        }
        None => None,
    };
    if let Some(source) = &notes {
        println!("notes: reading reference notes from [{}]", source.describe());
    }

    let renderer = NoteRenderer::new(&settings.migration.note_template)?;
    Ok(AppContext::new(store, notes, renderer, settings.migration.license_header))
}
