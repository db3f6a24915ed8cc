// src/main.rs

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use patentor_drafting_lib::context::AppCtx;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("patentor_drafting_lib=info,patentor_drafting=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    init_tracing();

    let ctx = AppCtx::from_env();
    tracing::info!(
        workspace = ?ctx.workspace_path,
        debug_ui = ctx.debug_ui,
        "starting patentor drafting"
    );

    let state = patentor_drafting_lib::init_state(&ctx).expect("failed to init app state");
    let state = Arc::new(state);
    let ctx = Arc::new(ctx);

    eframe::run_native(
        "Patentor: Patent Drafting Workspace",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(ui::UiApp::new(state.clone(), ctx.clone())))),
    )
}
