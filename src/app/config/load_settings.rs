//! Settings loading from `migrate.toml`.

use std::fs;
use std::path::Path;

use crate::domain::settings::parse_settings_content;
use crate::domain::{AppError, MigrationSettings, SETTINGS_FILE};

/// Load settings from `explicit`, else from `<repo_root>/migrate.toml`, else defaults.
pub fn load_settings(
    explicit: Option<&Path>,
    repo_root: &Path,
) -> Result<MigrationSettings, AppError> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(AppError::config_error(format!(
                "settings: no file found at [{}]",
                path.display()
            )));
        }
        Some(path) => path.to_path_buf(),
        None => {
            let path = repo_root.join(SETTINGS_FILE);
            if !path.is_file() {
                return Ok(MigrationSettings::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)?;
    parse_settings_content(&content)
}
