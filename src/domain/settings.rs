//! Migration settings loaded from `migrate.toml`.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;
use crate::domain::properties::DEFAULT_LICENSE_HEADER;

/// File name looked up in the repository root when `--settings` is not given.
pub const SETTINGS_FILE: &str = "migrate.toml";

/// Top-level settings document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MigrationSettings {
    #[serde(default)]
    pub migration: MigrationConfig,
    #[serde(default)]
    pub notes: NotesConfig,
}

impl MigrationSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        self.migration.validate()?;
        self.notes.validate()?;
        Ok(())
    }
}

/// Where mapping files resolve and what migrated entries look like.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MigrationConfig {
    /// Directory under the repository root that mapping file names resolve against.
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
    /// Header written at the top of newly created properties files.
    #[serde(default = "default_license_header")]
    pub license_header: String,
    /// Template for the note written above a migrated entry when no reference note exists.
    #[serde(default = "default_note_template")]
    pub note_template: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            license_header: default_license_header(),
            note_template: default_note_template(),
        }
    }
}

impl MigrationConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_base_dir(&self.base_dir)?;
        if self.note_template.trim().is_empty() {
            return Err(AppError::config_error("note_template must not be empty"));
        }
        Ok(())
    }
}

/// Reference properties used to carry localization notes over.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotesConfig {
    /// Directory or `http(s)` base URL holding reference properties files.
    #[serde(default)]
    pub from: Option<String>,
    /// Request timeout for remote references.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self { from: None, timeout_secs: default_timeout_secs() }
    }
}

impl NotesConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if let Some(from) = &self.from {
            NotesLocation::parse(from)?;
        }
        Ok(())
    }

    pub fn location(&self) -> Result<Option<NotesLocation>, AppError> {
        self.from.as_deref().map(NotesLocation::parse).transpose()
    }
}

/// Parsed form of `notes.from` / `--notes-from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesLocation {
    Directory(PathBuf),
    Remote(Url),
}

impl NotesLocation {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AppError::config_error("notes location must not be empty"));
        }

        if value.starts_with("http://") || value.starts_with("https://") {
            let mut url = Url::parse(value).map_err(|e| {
                AppError::config_error(format!("Invalid notes URL '{}': {}", value, e))
            })?;
            // Url::join replaces the last segment unless the base ends with '/'.
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            return Ok(NotesLocation::Remote(url));
        }

        if value.contains("://") {
            return Err(AppError::config_error(format!(
                "Unsupported notes location '{}': expected a directory or an http(s) URL",
                value
            )));
        }

        Ok(NotesLocation::Directory(PathBuf::from(value)))
    }
}

/// Parse and validate settings from TOML content.
pub fn parse_settings_content(content: &str) -> Result<MigrationSettings, AppError> {
    let settings: MigrationSettings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

fn validate_base_dir(base_dir: &str) -> Result<(), AppError> {
    let path = Path::new(base_dir);
    if path.is_absolute() {
        return Err(AppError::config_error(format!(
            "base_dir must be relative to the repository: {}",
            base_dir
        )));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(AppError::PathEscapesRepository(base_dir.to_string()));
    }
    Ok(())
}

fn default_base_dir() -> String {
    "devtools/client".to_string()
}

fn default_license_header() -> String {
    DEFAULT_LICENSE_HEADER.to_string()
}

fn default_note_template() -> String {
    "LOCALIZATION NOTE ({{ key }}): LOCALIZATION NOTE MISSING".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}
