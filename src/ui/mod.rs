// src/ui/mod.rs

pub mod nav;
pub mod panel_about;
pub mod panel_drafting;

pub mod message;
pub mod route_policy;
pub mod widgets;

use eframe::egui;
use std::sync::Arc;

use message::PanelMsgState;
use nav::LeftNav;
use panel_about::AboutPanel;
use panel_drafting::DraftingPanel;
use patentor_drafting_lib::command;
use patentor_drafting_lib::command_state::take_startup_warning;
use patentor_drafting_lib::context::AppCtx;
use patentor_drafting_lib::types::AppState;
use route_policy::{clears_messages, session_policy, SessionPolicy};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Drafting,
    About,
}

pub struct UiApp {
    state: Arc<AppState>,
    ctx: Arc<AppCtx>,

    route: Route,
    prev_route: Route,

    nav: LeftNav,
    drafting: DraftingPanel,
    about: AboutPanel,
    startup_warn: PanelMsgState,
}

impl UiApp {
    pub fn new(state: Arc<AppState>, ctx: Arc<AppCtx>) -> Self {
        let route = Route::Drafting;

        let mut drafting = DraftingPanel::new();
        drafting.open(state.as_ref());

        let mut startup_warn = PanelMsgState::default();
        if let Some(w) = take_startup_warning(state.as_ref()) {
            startup_warn.set_warn(w);
        }

        Self {
            state,
            ctx,
            route,
            prev_route: route,
            nav: LeftNav::new(),
            drafting,
            about: AboutPanel::new(),
            startup_warn,
        }
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Route transition hooks
        if self.route != self.prev_route {
            if clears_messages(self.prev_route, self.route) {
                self.drafting.clear_messages();
                self.startup_warn.clear();
            }

            match session_policy(self.prev_route, self.route) {
                SessionPolicy::Open => self.drafting.open(self.state.as_ref()),
                SessionPolicy::Close => self.drafting.close(),
                SessionPolicy::Keep => {}
            }

            self.prev_route = self.route;
        }

        // Nav (pure view)
        self.nav.ui(ctx, &mut self.route);

        // Panels
        egui::CentralPanel::default().show(ctx, |ui| {
            self.startup_warn.show(ui, self.ctx.debug_ui);

            match self.route {
                Route::Drafting => self.drafting.ui(ui, self.state.as_ref(), &self.ctx),
                Route::About => {
                    let label = command::workspace_label(self.state.as_ref());
                    self.about.ui(ui, &label);
                }
            }
        });
    }
}
