// tests/common/mod.rs

#![allow(dead_code)]

use patentor_drafting_lib::{context::AppCtx, types::AppState};
use std::path::{Path, PathBuf};

pub const DEADLINE: &str = "2025-12-31T23:59:59Z";

pub struct TestEnv {
    // Keep tempdir alive for the duration of the test.
    _td: tempfile::TempDir,

    pub state: AppState,
    ctx: AppCtx,
    workspace_path: PathBuf,
}

impl TestEnv {
    pub fn ctx(&self) -> &AppCtx {
        &self.ctx
    }
    pub fn workspace_path(&self) -> &Path {
        &self.workspace_path
    }
}

/// Workspace with three claims and one suggestion per target section.
pub fn sample_workspace_json5() -> String {
    format!(
        r#"
{{
  workspace_id: "it_sample",
  deadline_utc: "{DEADLINE}",
  publication: {{ pub_no: "US 2025/0000042 A1", pub_date: "Jun. 1, 2025", barcode: "US20250000042A1" }},
  document: {{
    title: "Widget",
    inventors: "A. Inventor, B. Inventor",
    assignee: "Widget Co.",
    abstract: "A widget.",
    background: "Widgets exist.",
    summary: "",
    brief_description: "",
    detailed_description: "",
    claims: ["A widget.", "The widget of claim 1, being blue.", "The widget of claim 1, being round."],
  }},
  suggestions: [
    {{ id: 10, section: "Claims", text: "foo" }},
    {{ id: 11, section: "Abstract", text: "A better widget." }},
    {{ id: 12, section: "Background", text: "Widgets have long existed." }},
  ],
}}
"#
    )
}

/// Writes the sample workspace to a temp file and initializes state from it.
pub fn setup_from_file(contents: &str) -> TestEnv {
    let td = tempfile::tempdir().expect("tempdir");
    let workspace_path = td.path().join("workspace.json5");
    std::fs::write(&workspace_path, contents).expect("write workspace");

    let ctx = AppCtx::new(Some(workspace_path.clone()), false);
    let state = patentor_drafting_lib::init_state(&ctx).expect("init_state");

    TestEnv {
        _td: td,
        state,
        ctx,
        workspace_path,
    }
}

pub fn setup_sample() -> TestEnv {
    setup_from_file(&sample_workspace_json5())
}
