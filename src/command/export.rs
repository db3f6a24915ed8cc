// src/command/export.rs

//! Clipboard exports. Nothing here writes to disk.

use crate::draft::DraftSession;
use crate::error::AppResult;

/// Pretty JSON of the current draft (same field names as the workspace file).
pub fn draft_json(session: &DraftSession) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(session.document())?)
}

pub fn preview_text(session: &DraftSession) -> String {
    session.preview().to_plain_text()
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::default_workspace;
    use chrono::Utc;
    use serde_json::Value as JsonValue;

    #[test]
    fn draft_json_uses_workspace_field_names() {
        let ws = default_workspace().unwrap();
        let s = DraftSession::from_workspace(&ws, Utc::now());
        let v: JsonValue = serde_json::from_str(&draft_json(&s).unwrap()).unwrap();

        assert!(v.get("abstract").is_some());
        assert!(v.get("abstract_text").is_none());
        assert_eq!(v["claims"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn preview_text_reflects_edits() {
        let ws = default_workspace().unwrap();
        let mut s = DraftSession::from_workspace(&ws, Utc::now());
        s.append_claim("A new claim.");
        assert!(preview_text(&s).contains("4. A new claim."));
    }
}
