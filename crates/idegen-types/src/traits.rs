//! Core trait definitions for idegen abstractions.

use std::path::{Path, PathBuf};
use serde_json::Value;
use crate::IdeKind;
use crate::errors::Result;

/// Decision for a destination file that already exists with different content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictAction {
    /// Replace the destination file
    Overwrite,
    /// Leave the destination file untouched
    Skip,
}

/// Which groups of user preferences to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceSet {
    /// External tool definitions
    pub tools: bool,
    /// File and code templates
    pub file_templates: bool,
}

impl PreferenceSet {
    /// Every preference group.
    pub fn all() -> Self {
        Self {
            tools: true,
            file_templates: true,
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        !self.tools && !self.file_templates
    }
}

/// Trait for supported IDEs.
///
/// One implementation per IDE; adapters hold their configuration and host
/// context and never consult global state.
pub trait IdeAdapter: Send + Sync {
    /// Which IDE this adapter drives.
    fn kind(&self) -> IdeKind;

    /// Find the IDE executable.
    ///
    /// Returns `None` when the IDE is not installed; that is an expected
    /// outcome, not an error.
    fn locate_executable(&self) -> Option<PathBuf>;

    /// Generate IDE project files under `destination`.
    ///
    /// `context` is merged over the adapter's default template context.
    /// Returns the directory holding the generated files.
    fn create_project(&self, destination: &Path, context: &Value) -> Result<PathBuf>;

    /// Directory where the IDE keeps per-user settings.
    fn user_preferences(&self) -> PathBuf;

    /// Install bundled preferences into the user's settings directory.
    ///
    /// `on_conflict` decides for every destination file that exists with
    /// different content. Returns the number of files written.
    fn copy_preferences(
        &self,
        set: PreferenceSet,
        on_conflict: &mut dyn FnMut(&Path) -> ConflictAction,
    ) -> Result<usize>;

    /// Open a project location in the IDE.
    fn open(&self, location: &Path) -> Result<()>;
}
