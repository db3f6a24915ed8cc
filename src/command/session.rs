// src/command/session.rs

use crate::command_state::{lock_origin, lock_workspace, replace_workspace};
use crate::draft::DraftSession;
use crate::error::AppResult;
use crate::types::{AppState, WorkspaceOrigin};
use crate::workspace::load_workspace_path;
use chrono::Utc;
use std::path::Path;

/// Start a fresh drafting session from the current seed workspace.
pub fn open_session(state: &AppState) -> AppResult<DraftSession> {
    let ws = lock_workspace(state)?;
    Ok(DraftSession::from_workspace(&ws, Utc::now()))
}

/// Load a workspace file and make it the seed for new sessions.
/// On failure the current seed is kept.
pub fn load_workspace_file(path: &Path, state: &AppState) -> AppResult<()> {
    let ws = load_workspace_path(path)?;
    tracing::info!(path = %path.display(), "workspace replaced");
    replace_workspace(state, ws, WorkspaceOrigin::File(path.to_path_buf()))
}

pub fn workspace_label(state: &AppState) -> String {
    lock_origin(state)
        .map(|o| o.label())
        .unwrap_or_else(|_| "(unavailable)".to_string())
}

// ======================================================
// Unit Tests
// ======================================================
