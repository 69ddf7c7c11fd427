//! Mapping file syntax: `sourceFile:sourceKey = destFile:destKey`.

use std::fmt;

use thiserror::Error;

/// Reason a mapping line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("expected 'file:key = file:key'")]
    MissingAssignment,

    #[error("{side} side '{text}' is not of the form 'file:key'")]
    InvalidReference { side: &'static str, text: String },

    #[error("{side} key '{key}' contains whitespace, a separator or a leading comment marker")]
    InvalidKey { side: &'static str, key: String },
}

/// A `file:key` pair on either side of a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryRef {
    pub file: String,
    pub key: String,
}

impl EntryRef {
    fn parse(text: &str, side: &'static str) -> Result<Self, MappingError> {
        let invalid = || MappingError::InvalidReference { side, text: text.trim().to_string() };

        let (file, key) = text.split_once(':').ok_or_else(invalid)?;
        let (file, key) = (file.trim(), key.trim());
        if file.is_empty() || key.is_empty() || key.contains(':') {
            return Err(invalid());
        }
        if !is_plain_key(key) {
            return Err(MappingError::InvalidKey { side, key: key.to_string() });
        }
        Ok(Self { file: file.to_string(), key: key.to_string() })
    }
}

/// Keys are written unescaped, so they must read back as themselves.
fn is_plain_key(key: &str) -> bool {
    !key.starts_with(['#', '!'])
        && !key.chars().any(|c| c.is_whitespace() || matches!(c, '=' | ':' | '\\'))
}

impl fmt::Display for EntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.key)
    }
}

/// Where a mapping was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOrigin {
    pub file: String,
    pub line: usize,
}

impl fmt::Display for MappingOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One source DTD entity mapped onto one destination properties key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub source: EntryRef,
    pub destination: EntryRef,
    pub origin: MappingOrigin,
}

/// A line that could not be parsed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub origin: MappingOrigin,
    pub text: String,
    pub reason: MappingError,
}

/// Parse result for one mapping file.
#[derive(Debug, Clone, Default)]
pub struct MappingSet {
    pub mappings: Vec<Mapping>,
    pub skipped: Vec<SkippedLine>,
}

impl MappingSet {
    pub fn extend(&mut self, other: MappingSet) {
        self.mappings.extend(other.mappings);
        self.skipped.extend(other.skipped);
    }
}

/// Parse a single line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_mapping_line(line: &str) -> Result<Option<(EntryRef, EntryRef)>, MappingError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (before, after) = trimmed.split_once('=').ok_or(MappingError::MissingAssignment)?;
    let source = EntryRef::parse(before, "source")?;
    let destination = EntryRef::parse(after, "destination")?;
    Ok(Some((source, destination)))
}

/// Parse every line of a mapping file named `origin`.
pub fn parse_mappings(content: &str, origin: &str) -> MappingSet {
    let mut set = MappingSet::default();

    for (index, line) in content.lines().enumerate() {
        let origin = MappingOrigin { file: origin.to_string(), line: index + 1 };
        match parse_mapping_line(line) {
            Ok(Some((source, destination))) => {
                set.mappings.push(Mapping { source, destination, origin })
            }
            Ok(None) => {}
            Err(reason) => {
                set.skipped.push(SkippedLine { origin, text: line.trim().to_string(), reason })
            }
        }
    }

    set
}
