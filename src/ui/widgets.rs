// src/ui/widgets.rs

use eframe::egui;
use patentor_drafting_lib::draft::{module_width, Element};

pub fn panel_title(ui: &mut egui::Ui, title: &str) {
    ui.heading(title);
}

pub fn copy_icon_button(ui: &mut egui::Ui, enabled: bool, hover: &str) -> bool {
    ui.add_enabled(enabled, egui::Button::new("⧉"))
        .on_hover_text(hover)
        .clicked()
}

/// Expand/collapse row for one section. Returns true when clicked.
pub fn section_header(ui: &mut egui::Ui, label: &str, expanded: bool) -> bool {
    let arrow = if expanded { "▾" } else { "▸" };
    ui.add_sized(
        [ui.available_width(), 24.0],
        egui::SelectableLabel::new(expanded, format!("{arrow} {label}")),
    )
    .clicked()
}

/// Paint bar/space elements scaled to `size`, black on white.
pub fn barcode(ui: &mut egui::Ui, elements: &[Element], size: egui::Vec2) -> egui::Response {
    let (rect, resp) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);

    let unit = rect.width() / module_width(elements).max(1) as f32;
    let mut x = rect.left();
    for e in elements {
        let w = f32::from(e.width) * unit;
        if e.bar {
            let bar = egui::Rect::from_min_size(egui::pos2(x, rect.top()), egui::vec2(w, rect.height()));
            painter.rect_filled(bar, 0.0, egui::Color32::BLACK);
        }
        x += w;
    }

    resp
}

pub fn ui_notice(ui: &mut egui::Ui, body: &str) {
    // Bright "attention" yellow; readable in dark and light mode.
    let accent = egui::Color32::from_rgb(255, 215, 90);

    let stroke = egui::Stroke::new(1.5, accent);
    let fill = egui::Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 48);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .stroke(stroke)
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("Notice")
                    .size(18.0)
                    .strong()
                    .color(accent),
            );
            ui.add_space(4.0);
            ui.label(body);
        });
}
