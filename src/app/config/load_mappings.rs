//! Mapping file loading from a file or a directory of files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::mapping::parse_mappings;
use crate::domain::{AppError, MappingSet};

/// Load every mapping file at `config_path`.
///
/// A directory is scanned non-recursively; hidden files are ignored and the
/// rest are read in name order.
pub fn load_mappings(config_path: &Path) -> Result<MappingSet, AppError> {
    let files = mapping_files(config_path)?;

    let mut set = MappingSet::default();
    for file in files {
        let content = fs::read_to_string(&file)?;
        set.extend(parse_mappings(&content, &file.display().to_string()));
    }
    Ok(set)
}

/// Resolve `config_path` to the list of mapping files it designates.
pub fn mapping_files(config_path: &Path) -> Result<Vec<PathBuf>, AppError> {
    if config_path.is_file() {
        return Ok(vec![config_path.to_path_buf()]);
    }
    if !config_path.is_dir() {
        return Err(AppError::ConfigNotFound(config_path.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(config_path)? {
        let entry = entry?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if path.is_file() && !hidden {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(AppError::ConfigNotFound(config_path.display().to_string()));
    }
    Ok(files)
}
