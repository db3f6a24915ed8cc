// src/types.rs

use std::path::PathBuf;
use std::sync::Mutex;

use crate::workspace::WorkspaceFile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkspaceOrigin {
    Bundled,
    File(PathBuf),
}

impl WorkspaceOrigin {
    pub fn label(&self) -> String {
        match self {
            WorkspaceOrigin::Bundled => "(bundled sample)".to_string(),
            WorkspaceOrigin::File(p) => p
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| p.display().to_string()),
        }
    }
}

pub struct AppState {
    /// Seed for new drafting sessions.
    pub workspace: Mutex<WorkspaceFile>,
    pub workspace_origin: Mutex<WorkspaceOrigin>,

    // set at startup when the configured workspace could not be used
    pub startup_warning: Mutex<Option<String>>,
}
