// src/command/mod.rs

pub mod export;
pub mod session;

// --- Public façade ---

pub use export::{draft_json, preview_text};
pub use session::{load_workspace_file, open_session, workspace_label};
