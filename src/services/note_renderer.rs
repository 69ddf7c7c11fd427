//! Default localization notes rendered with minijinja.

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, EntryRef, Mapping, MappingOrigin, Note};

/// Renders the note written above entries that have no reference note.
#[derive(Debug)]
pub struct NoteRenderer {
    env: Environment<'static>,
    template: String,
}

impl NoteRenderer {
    /// Check `template` up front: syntax errors and unknown variables surface
    /// before any file is touched.
    pub fn new(template: &str) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        let renderer = Self { env, template: template.to_string() };
        renderer.check_syntax()?;
        renderer.render(&sample_mapping())?;
        Ok(renderer)
    }

    fn check_syntax(&self) -> Result<(), AppError> {
        // template_from_str borrows the source for the environment's lifetime.
        Environment::new()
            .template_from_str(&self.template)
            .map(|_| ())
            .map_err(|e| AppError::Template(e.to_string()))
    }

    pub fn render(&self, mapping: &Mapping) -> Result<Note, AppError> {
        let text = self
            .env
            .render_str(
                &self.template,
                context! {
                    key => &mapping.destination.key,
                    destination_file => &mapping.destination.file,
                    source_file => &mapping.source.file,
                    source_key => &mapping.source.key,
                },
            )
            .map_err(|e| AppError::Template(e.to_string()))?;
        Ok(Note::from_text(&text))
    }
}

fn sample_mapping() -> Mapping {
    Mapping {
        source: EntryRef { file: "sample.dtd".into(), key: "sample.label".into() },
        destination: EntryRef { file: "sample.properties".into(), key: "sample.label".into() },
        origin: MappingOrigin { file: "sample".into(), line: 1 },
    }
}
