mod memory_store;

pub use memory_store::MemoryLocalizationStore;
pub use static_note_source::StaticNoteSource;
