mod localization_store;
mod note_source;

pub use localization_store::LocalizationStore;
pub use note_source::NoteSource;
