// tests/workspace_loading.rs

mod common;

use patentor_drafting_lib::command;
use patentor_drafting_lib::command_state::take_startup_warning;
use patentor_drafting_lib::draft::DocField;
use patentor_drafting_lib::error::{AppError, UserMsgKind};
use patentor_drafting_lib::workspace::ConfigError;

#[test]
fn configured_workspace_seeds_sessions() {
    let env = common::setup_sample();
    assert!(env.ctx().workspace_path.is_some());
    assert_eq!(command::workspace_label(&env.state), "workspace.json5");
    assert_eq!(take_startup_warning(&env.state), None);

    let s = command::open_session(&env.state).expect("open_session");
    assert_eq!(s.document().field(DocField::Title), "Widget");
    assert_eq!(s.visible_suggestions().count(), 3);
}

#[test]
fn broken_workspace_falls_back_to_bundled_sample() {
    let env = common::setup_from_file("{ deadline_utc: ");
    assert_eq!(command::workspace_label(&env.state), "(bundled sample)");

    let warn = take_startup_warning(&env.state).expect("startup warning");
    assert!(warn.contains("workspace.json5"));

    let s = command::open_session(&env.state).expect("open_session");
    assert_eq!(s.document().claim_count(), 3);
}

#[test]
fn loading_replaces_seed_for_next_session_only() {
    let env = common::setup_from_file(&common::sample_workspace_json5().replace("Widget\"", "Gadget\""));
    let mut open = command::open_session(&env.state).expect("open_session");
    open.append_claim("kept in this session");

    std::fs::write(env.workspace_path(), common::sample_workspace_json5()).unwrap();
    command::load_workspace_file(env.workspace_path(), &env.state).expect("load");

    assert_eq!(open.document().claim_count(), 4);
    let next = command::open_session(&env.state).expect("open_session");
    assert_eq!(next.document().field(DocField::Title), "Widget");
}

#[test]
fn invalid_replacement_reports_validation_error() {
    let env = common::setup_sample();
    let dup = common::sample_workspace_json5().replace("id: 11", "id: 10");
    std::fs::write(env.workspace_path(), dup).unwrap();

    let err = command::load_workspace_file(env.workspace_path(), &env.state).unwrap_err();
    assert!(matches!(err, AppError::Config(ConfigError::Validation(_))));
    assert_eq!(err.user_msg().kind, UserMsgKind::Error);

    // previous seed still in place
    let s = command::open_session(&env.state).expect("open_session");
    assert_eq!(s.visible_suggestions().count(), 3);
}

#[test]
fn draft_json_round_trips_through_workspace_shape() {
    let env = common::setup_sample();
    let mut s = command::open_session(&env.state).expect("open_session");
    s.accept_suggestion(10).unwrap();

    let json = command::draft_json(&s).expect("draft_json");
    let ws = format!(
        r#"{{ deadline_utc: "{}", publication: {{ pub_no: "X", pub_date: "Y", barcode: "X1" }}, document: {json} }}"#,
        common::DEADLINE
    );
    let reloaded = patentor_drafting_lib::workspace::parse_workspace_str(&ws).expect("parse");
    assert_eq!(&reloaded.document, s.document());
}
