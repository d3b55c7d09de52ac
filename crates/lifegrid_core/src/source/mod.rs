//! Normalized notes-source configuration seam.
//!
//! # Responsibility
//! - Define the single record shape every third-party notes integration
//!   adapter must produce.
//!
//! # Invariants
//! - The engine consumes only this normalized record; it never inspects
//!   foreign plugin object shapes directly.

use crate::model::week_start::WeekStartDay;
use serde::{Deserialize, Serialize};

/// Normalized configuration one notes-source adapter resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotesSourceConfig {
    /// Week-start day the source indexes its notes with.
    pub week_start_day: WeekStartDay,
    /// Filename pattern, plain or with `{{date:FORMAT}}` segments.
    pub file_name_pattern: String,
    /// Folder the source keeps weekly notes in.
    pub folder_path: String,
    /// Optional template applied when the host creates a new note.
    pub template_path: Option<String>,
}

/// Adapter over one third-party notes integration or a user-configured
/// folder.
///
/// Each integration gets its own adapter; resolution happens in the host
/// layer where the foreign settings objects live.
pub trait NotesSourceAdapter {
    /// Resolves the integration's current settings into the normalized
    /// record.
    fn resolve_config(&self) -> NotesSourceConfig;
}
