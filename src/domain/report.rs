//! Per-entry outcomes and the run summary.

use crate::domain::mapping::{Mapping, SkippedLine};

/// What happened to one mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Entry appended; `created_file` when the destination did not exist yet.
    Migrated { created_file: bool },
    /// Destination already holds the same key and value.
    AlreadyMigrated,
    /// Destination holds the key with another value; nothing written.
    Conflict { existing: String, incoming: String },
    /// Source DTD has no such entity.
    MissingEntity,
    /// Entry could not be processed (unreadable or malformed file).
    Failed { reason: String },
}

impl EntryOutcome {
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            EntryOutcome::Conflict { .. } | EntryOutcome::MissingEntity | EntryOutcome::Failed { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub mapping: Mapping,
    pub outcome: EntryOutcome,
}

/// Result of a migration run.
#[derive(Debug, Clone, Default)]
pub struct MigrationReport {
    pub entries: Vec<EntryReport>,
    pub skipped_lines: Vec<SkippedLine>,
    pub dry_run: bool,
}

impl MigrationReport {
    pub fn migrated(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Migrated { .. }))
    }

    pub fn already_migrated(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::AlreadyMigrated))
    }

    pub fn conflicts(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Conflict { .. }))
    }

    pub fn failures(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::MissingEntity | EntryOutcome::Failed { .. }))
    }

    /// True when any entry needs operator attention.
    pub fn has_problems(&self) -> bool {
        self.entries.iter().any(|e| e.outcome.is_problem())
    }

    fn count(&self, predicate: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| predicate(&e.outcome)).count()
    }
}
