// src/workspace/file.rs

use crate::draft::barcode::validate_code39;
use crate::draft::{Document, Publication, Suggestion};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Bundled workspace used when no file is configured.
pub const DEFAULT_WORKSPACE_JSON5: &str = include_str!("../../assets/default_workspace.json5");

/// Top-level JSON5 workspace file: seed draft, suggestion catalog, filing
/// deadline and publication header.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceFile {
    pub workspace_id: Option<String>,
    pub deadline_utc: DateTime<Utc>,
    pub publication: Publication,
    #[serde(default)]
    pub document: Document,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Workspace parse error: {0}")]
    Parse(#[from] json5::Error),
    #[error("Workspace validation error: {0}")]
    Validation(String),
}

/// Parse a JSON5 workspace string.
pub fn parse_workspace_str(s: &str) -> Result<WorkspaceFile, ConfigError> {
    let ws: WorkspaceFile = json5::from_str(s)?;
    validate_workspace(&ws)?;
    Ok(ws)
}

/// Load a JSON5 workspace from disk.
pub fn load_workspace_path(path: impl AsRef<Path>) -> Result<WorkspaceFile, ConfigError> {
    let s = fs::read_to_string(path)?;
    parse_workspace_str(&s)
}

pub fn default_workspace() -> Result<WorkspaceFile, ConfigError> {
    parse_workspace_str(DEFAULT_WORKSPACE_JSON5)
}

/// Structural checks the type system does not already enforce.
pub fn validate_workspace(ws: &WorkspaceFile) -> Result<(), ConfigError> {
    if let Some(id) = &ws.workspace_id {
        if id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "workspace_id must be non-empty when present".to_string(),
            ));
        }
    }

    if ws.publication.pub_no.trim().is_empty() {
        return Err(ConfigError::Validation(
            "publication.pub_no must be non-empty".to_string(),
        ));
    }

    if let Err(e) = validate_code39(&ws.publication.barcode) {
        return Err(ConfigError::Validation(format!("publication.barcode: {e}")));
    }

    let mut ids = BTreeSet::new();
    for (i, s) in ws.suggestions.iter().enumerate() {
        if !ids.insert(s.id) {
            return Err(ConfigError::Validation(format!(
                "suggestions[{i}].id must be unique; duplicate found for {}",
                s.id
            )));
        }
        if s.text.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "suggestions[{i}].text must be non-empty"
            )));
        }
    }

    Ok(())
}

// ======================================================
// Unit Tests
// ======================================================
