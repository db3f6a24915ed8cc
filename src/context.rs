// src/context.rs

use directories::ProjectDirs;
use std::path::PathBuf;

pub const APP_QUALIFIER: &str = "org";
pub const APP_ORG: &str = "patentor";
pub const APP_ID: &str = "patentor-drafting";

pub const WORKSPACE_FILE_NAME: &str = "workspace.json5";

pub const ENV_DEBUG: &str = "PATENTOR_DEBUG";
pub const ENV_WORKSPACE: &str = "PATENTOR_WORKSPACE";

#[derive(Debug, Clone)]
pub struct AppCtx {
    /// Workspace file to seed drafts from; `None` means the bundled default.
    pub workspace_path: Option<PathBuf>,
    pub debug_ui: bool,
}

impl AppCtx {
    pub fn new(workspace_path: Option<PathBuf>, debug_ui: bool) -> Self {
        Self {
            workspace_path,
            debug_ui,
        }
    }

    /// Resolve from the environment: `PATENTOR_WORKSPACE` wins, then
    /// `<config dir>/workspace.json5` if it exists.
    pub fn from_env() -> Self {
        let debug_ui = std::env::var(ENV_DEBUG)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let workspace_path = std::env::var_os(ENV_WORKSPACE)
            .map(PathBuf::from)
            .or_else(|| {
                config_workspace_path().filter(|p| p.is_file())
            });

        Self::new(workspace_path, debug_ui)
    }
}

/// <config dir>/workspace.json5
pub fn config_workspace_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_ID)
        .map(|p| p.config_dir().join(WORKSPACE_FILE_NAME))
}
