//! Filesystem-backed configuration loaders.
//!
//! Pure parsing of mapping lines and settings lives in `domain::mapping`
//! and `domain::settings`.

mod load_mappings;
mod load_settings;

pub use load_mappings::{load_mappings, mapping_files};
pub use load_settings::load_settings;
