//! l10n-migrate: move localized strings from DTD files into properties files.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{MigrateRequest, migrate};
pub use domain::{AppError, EntryOutcome, EntryReport, MigrationReport};
