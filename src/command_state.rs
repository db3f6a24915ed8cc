// src/command_state.rs

use crate::{
    error::{AppError, AppResult},
    types::{AppState, WorkspaceOrigin},
    workspace::WorkspaceFile,
};
use std::sync::MutexGuard;

// ======================================================
// locking helpers
// ======================================================

pub fn lock_workspace(state: &AppState) -> AppResult<MutexGuard<'_, WorkspaceFile>> {
    state
        .workspace
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_origin(state: &AppState) -> AppResult<MutexGuard<'_, WorkspaceOrigin>> {
    state
        .workspace_origin
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

// ======================================================
// workspace swap
// ======================================================

/// Replace the seed workspace. Open sessions are unaffected; the next session
/// starts from the new seed.
pub fn replace_workspace(
    state: &AppState,
    ws: WorkspaceFile,
    origin: WorkspaceOrigin,
) -> AppResult<()> {
    *lock_workspace(state)? = ws;
    *lock_origin(state)? = origin;
    Ok(())
}

// ======================================================
// startup warning
// ======================================================

pub fn take_startup_warning(state: &AppState) -> Option<String> {
    state
        .startup_warning
        .lock()
        .ok()
        .and_then(|mut g| g.take())
}

// ======================================================
// Unit Tests
// ======================================================
