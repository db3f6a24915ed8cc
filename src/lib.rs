// src/lib.rs

pub mod command;
pub mod command_state;
pub mod context;
pub mod draft;
pub mod error;
pub mod types;
pub mod workspace;

use crate::context::AppCtx;
use crate::error::AppResult;
use crate::types::{AppState, WorkspaceOrigin};
use std::sync::Mutex;

/// Build app state from the context. A configured workspace that fails to load
/// falls back to the bundled sample and leaves a startup warning for the UI.
pub fn init_state(ctx: &AppCtx) -> AppResult<AppState> {
    let mut startup_warning = None;

    let (workspace, origin) = match &ctx.workspace_path {
        Some(path) => match workspace::load_workspace_path(path) {
            Ok(ws) => {
                tracing::info!(path = %path.display(), "workspace loaded");
                (ws, WorkspaceOrigin::File(path.clone()))
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "workspace load failed; using bundled sample");
                startup_warning = Some(format!(
                    "Could not load {}: {e}. Using the bundled sample.",
                    path.display()
                ));
                (workspace::default_workspace()?, WorkspaceOrigin::Bundled)
            }
        },
        None => (workspace::default_workspace()?, WorkspaceOrigin::Bundled),
    };

    Ok(AppState {
        workspace: Mutex::new(workspace),
        workspace_origin: Mutex::new(origin),
        startup_warning: Mutex::new(startup_warning),
    })
}

impl AppState {
    pub fn new_for_tests() -> AppResult<Self> {
        crate::init_state(&AppCtx::new(None, true))
    }
}
