pub mod dtd;
pub mod error;
pub mod mapping;
pub mod properties;
pub mod report;
pub mod settings;

pub use dtd::{DtdDocument, DtdEntity, DtdError};
pub use error::AppError;
pub use mapping::{EntryRef, Mapping, MappingError, MappingOrigin, MappingSet, SkippedLine};
pub use properties::{IncomingEntry, MergePlan, Note, PropertiesDocument, PropertiesEntry};
pub use report::{EntryOutcome, EntryReport, MigrationReport};
pub use settings::{MigrationSettings, NotesLocation, SETTINGS_FILE};
