// src/ui/nav.rs

use crate::ui::Route;
use eframe::egui;

pub struct LeftNav;

impl LeftNav {
    pub fn new() -> Self {
        Self
    }

    /// Pure view: mutates route on click
    pub fn ui(&mut self, ctx: &egui::Context, route: &mut Route) {
        egui::SidePanel::left("left_nav")
            .resizable(false)
            .min_width(160.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(egui::RichText::new("Patentor").strong().size(18.0));
                ui.separator();

                nav_btn(ui, route, Route::Drafting, "Drafting");
                nav_btn(ui, route, Route::About, "About");
            });
    }
}

fn nav_btn(ui: &mut egui::Ui, route: &mut Route, target: Route, label: &str) {
    let selected = *route == target;
    if ui.selectable_label(selected, label).clicked() {
        *route = target;
    }
}
