mod localization_filesystem;
mod note_renderer;
mod note_source_directory;
mod note_source_http;

pub use localization_filesystem::FilesystemLocalizationStore;
pub use note_renderer::NoteRenderer;
pub use note_source_directory::DirectoryNoteSource;
pub use note_source_http::HttpNoteSource;
