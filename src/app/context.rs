use crate::ports::{LocalizationStore, NoteSource};
use crate::services::NoteRenderer;

/// Application context holding dependencies for a migration run.
pub struct AppContext<S: LocalizationStore> {
    store: S,
    notes: Option<Box<dyn NoteSource>>,
    renderer: NoteRenderer,
    license_header: String,
}

impl<S: LocalizationStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(
        store: S,
        notes: Option<Box<dyn NoteSource>>,
        renderer: NoteRenderer,
        license_header: String,
    ) -> Self {
        Self { store, notes, renderer, license_header }
    }

    /// Get a reference to the localization store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reference note source, when one is configured.
    pub fn notes(&self) -> Option<&dyn NoteSource> {
        self.notes.as_deref()
    }

    pub fn renderer(&self) -> &NoteRenderer {
        &self.renderer
    }

    pub fn license_header(&self) -> &str {
        &self.license_header
    }
}
