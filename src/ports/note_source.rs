use crate::domain::AppError;

/// Port for reference (en-US) properties files that carry localization notes.
pub trait NoteSource {
    /// Fetch the reference copy of a properties file. `Ok(None)` when absent.
    fn fetch(&self, file: &str) -> Result<Option<String>, AppError>;

    /// Human-readable location for messages.
    fn describe(&self) -> String;
}
