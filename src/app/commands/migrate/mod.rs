//! Migrate DTD entities into properties files.

mod notes;

pub use notes::NoteCache;

use std::collections::HashMap;

use crate::app::AppContext;
use crate::domain::dtd::find_entity_value;
use crate::domain::properties::plan_merge;
use crate::domain::{
    AppError, EntryOutcome, EntryReport, IncomingEntry, Mapping, MappingSet, MergePlan,
    MigrationReport, Note,
};
use crate::ports::LocalizationStore;

/// Options for a migration run.
#[derive(Debug, Clone, Default)]
pub struct MigrateOptions {
    /// Compute outcomes without writing files.
    pub dry_run: bool,
}

/// Migrate every mapping in order.
///
/// Per-entry problems are recorded in the report. A mapping whose source DTD
/// file does not exist aborts the run; entries already written stay written.
pub fn execute<S: LocalizationStore>(
    ctx: &AppContext<S>,
    mappings: &MappingSet,
    options: &MigrateOptions,
    notes: &mut NoteCache,
) -> Result<MigrationReport, AppError> {
    for skipped in &mappings.skipped {
        eprintln!("⚠️  Skipping {}: {} ({})", skipped.origin, skipped.reason, skipped.text);
    }

    let mut report = MigrationReport {
        entries: Vec::with_capacity(mappings.mappings.len()),
        skipped_lines: mappings.skipped.clone(),
        dry_run: options.dry_run,
    };
    let mut staged = StagedWrites::default();

    for mapping in &mappings.mappings {
        let outcome = migrate_entry(ctx, mapping, options, notes, &mut staged)?;
        print_outcome(mapping, &outcome, options.dry_run);
        report.entries.push(EntryReport { mapping: mapping.clone(), outcome });
    }

    Ok(report)
}

fn migrate_entry<S: LocalizationStore>(
    ctx: &AppContext<S>,
    mapping: &Mapping,
    options: &MigrateOptions,
    notes: &mut NoteCache,
    staged: &mut StagedWrites,
) -> Result<EntryOutcome, AppError> {
    let store = ctx.store();
    let source = &mapping.source;
    let destination = &mapping.destination;

    if !store.file_exists(&source.file) {
        return Err(AppError::SourceFileNotFound(source.file.clone()));
    }

    let dtd = match store.read_file(&source.file) {
        Ok(content) => content,
        Err(err) => return Ok(failed(err)),
    };
    let value = match find_entity_value(&dtd, &source.key) {
        Ok(Some(value)) => value,
        Ok(None) => return Ok(EntryOutcome::MissingEntity),
        Err(source_err) => {
            return Ok(failed(AppError::Dtd { file: source.file.clone(), source: source_err }));
        }
    };

    let existing = match staged.read(store, &destination.file) {
        Ok(existing) => existing,
        Err(err) => return Ok(failed(err)),
    };
    let note = match resolve_note(ctx, mapping, notes) {
        Ok(note) => note,
        Err(err) => return Ok(failed(err)),
    };
    let entry = IncomingEntry { key: &destination.key, value: &value, note: &note };

    let outcome = match plan_merge(existing.as_deref(), &entry, ctx.license_header()) {
        MergePlan::Create { content } => {
            let written = if options.dry_run {
                staged.stage(&destination.file, content);
                Ok(())
            } else {
                store.create_file(&destination.file, &content)
            };
            match written {
                Ok(()) => EntryOutcome::Migrated { created_file: true },
                Err(err) => failed(err),
            }
        }
        MergePlan::Append { block } => {
            let written = if options.dry_run {
                let mut content = existing.unwrap_or_default();
                content.push_str(&block);
                staged.stage(&destination.file, content);
                Ok(())
            } else {
                store.append_file(&destination.file, &block)
            };
            match written {
                Ok(()) => EntryOutcome::Migrated { created_file: false },
                Err(err) => failed(err),
            }
        }
        MergePlan::AlreadyPresent => EntryOutcome::AlreadyMigrated,
        MergePlan::Conflict { existing, incoming } => EntryOutcome::Conflict { existing, incoming },
    };

    Ok(outcome)
}

/// Reference note for the destination key, else the rendered default.
fn resolve_note<S: LocalizationStore>(
    ctx: &AppContext<S>,
    mapping: &Mapping,
    notes: &mut NoteCache,
) -> Result<Note, AppError> {
    let destination = &mapping.destination;
    if let Some(source) = ctx.notes()
        && let Some(note) = notes.lookup(source, &destination.file, &destination.key)
    {
        return Ok(note);
    }
    ctx.renderer().render(mapping)
}

fn failed(err: AppError) -> EntryOutcome {
    EntryOutcome::Failed { reason: err.to_string() }
}

/// Destination contents a dry run would have written, so later entries see them.
#[derive(Debug, Default)]
struct StagedWrites {
    files: HashMap<String, String>,
}

impl StagedWrites {
    fn read<S: LocalizationStore>(&self, store: &S, path: &str) -> Result<Option<String>, AppError> {
        match self.files.get(path) {
            Some(content) => Ok(Some(content.clone())),
            None => store.read_optional(path),
        }
    }

    fn stage(&mut self, path: &str, content: String) {
        self.files.insert(path.to_string(), content);
    }
}

fn print_outcome(mapping: &Mapping, outcome: &EntryOutcome, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let source = &mapping.source;
    let destination = &mapping.destination;

    match outcome {
        EntryOutcome::Migrated { created_file } => {
            let created = if *created_file { " (new file)" } else { "" };
            println!("{}✅ {} -> {}{}", prefix, source, destination, created);
        }
        EntryOutcome::AlreadyMigrated => {
            println!("{}⏭️  {} already migrated", prefix, destination);
        }
        EntryOutcome::Conflict { existing, incoming } => {
            eprintln!(
                "{}⚠️  Conflict for {}: existing value '{}' differs from '{}', skipped",
                prefix, destination, existing, incoming
            );
        }
        EntryOutcome::MissingEntity => {
            eprintln!("{}❌ {}: entity not found ({})", prefix, source, mapping.origin);
        }
        EntryOutcome::Failed { reason } => {
            eprintln!("{}❌ {} -> {}: {}", prefix, source, destination, reason);
        }
    }
}
