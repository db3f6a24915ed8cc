// src/ui/panel_drafting.rs

use crate::ui::message::PanelMsgState;
use crate::ui::widgets;
use chrono::Utc;
use eframe::egui;
use patentor_drafting_lib::command;
use patentor_drafting_lib::context::AppCtx;
use patentor_drafting_lib::draft::{
    encode_code39, ChatMessage, DocField, DraftError, DraftSession, Preview, Role, Section, TICK,
};
use patentor_drafting_lib::error::AppError;
use patentor_drafting_lib::types::AppState;
use std::time::Instant;

const CHAT_HINT: &str = "Ask me to research, improve, or generate patent content...";

const QUICK_ACTIONS: [(&str, &str); 3] = [
    ("Improve Claims", "Improve the language of my claims."),
    ("Generate Abstract", "Generate an abstract for this invention."),
    ("Prior Art Search", "Search for prior art related to this invention."),
];

enum SuggestionAction {
    Accept(u32),
    Dismiss(u32),
}

pub struct DraftingPanel {
    msg: PanelMsgState,

    // Owned by the drafting view; dropped when the user navigates away.
    session: Option<DraftSession>,

    chat_input: String,
}

impl DraftingPanel {
    pub fn new() -> Self {
        Self {
            msg: PanelMsgState::default(),
            session: None,
            chat_input: String::new(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn open(&mut self, state: &AppState) {
        self.chat_input.clear();
        match command::open_session(state) {
            Ok(s) => self.session = Some(s),
            Err(e) => {
                self.session = None;
                self.msg.from_app_error(&e);
            }
        }
    }

    pub fn close(&mut self) {
        if self.session.take().is_some() {
            tracing::info!("drafting session closed");
        }
        self.chat_input.clear();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, ctx: &AppCtx) {
        if self.ui_toolbar(ui, state) {
            // workspace swapped: restart from the new seed
            self.open(state);
        }

        ui.add_space(6.0);
        self.msg.show(ui, ctx.debug_ui);
        ui.add_space(6.0);

        let Some(session) = self.session.as_mut() else {
            ui.label("No draft is open.");
            return;
        };

        // Time-driven state. Repaints are only requested while this view is
        // shown, so leaving it stops the refresh.
        session.tick(Utc::now(), Instant::now());
        let mut repaint_in = TICK;
        if let Some(d) = session.assistant().next_due_in(Instant::now()) {
            repaint_in = repaint_in.min(d);
        }
        ui.ctx().request_repaint_after(repaint_in);

        let msg = &mut self.msg;
        let chat_input = &mut self.chat_input;

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                Self::ui_header(ui, msg, session);
                ui.add_space(8.0);

                ui.columns(2, |cols| {
                    Self::ui_assistant(&mut cols[0], msg, chat_input, session);
                    cols[0].add_space(8.0);
                    Self::ui_suggestions(&mut cols[0], msg, session);

                    Self::ui_preview(&mut cols[1], &session.preview());
                });

                ui.add_space(12.0);
                ui.separator();
                Self::ui_sections(ui, msg, session);
            });
    }

    /// Returns true when a new workspace was loaded.
    fn ui_toolbar(&mut self, ui: &mut egui::Ui, state: &AppState) -> bool {
        let mut loaded = false;

        widgets::panel_title(ui, "Patent Drafting Workspace");
        ui.horizontal(|ui| {
            ui.label("Workspace:");
            ui.monospace(command::workspace_label(state));

            if ui.small_button("Browse").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON5", &["json5"])
                    .add_filter("JSON", &["json"])
                    .pick_file()
                {
                    match command::load_workspace_file(&path, state) {
                        Ok(()) => {
                            self.msg.set_success("Workspace loaded. Started a new draft.");
                            loaded = true;
                        }
                        Err(e) => self.msg.from_app_error(&e),
                    }
                }
            }
        });

        loaded
    }

    fn ui_header(ui: &mut egui::Ui, msg: &mut PanelMsgState, session: &DraftSession) {
        ui.horizontal(|ui| {
            ui.label("Patent Filing Deadline:");
            ui.label(
                egui::RichText::new(session.remaining().display())
                    .monospace()
                    .color(ui.visuals().error_fg_color),
            );

            ui.separator();

            if ui.button("Save Draft").clicked() {
                msg.set_info("Drafts are kept only for this session. Use Copy JSON to keep a copy.");
            }

            if widgets::copy_icon_button(ui, true, "Copy preview text") {
                ui.ctx().copy_text(command::preview_text(session));
                msg.set_success("Preview copied.");
            }

            if ui.button("Copy JSON").clicked() {
                match command::draft_json(session) {
                    Ok(s) => {
                        ui.ctx().copy_text(s);
                        msg.set_success("Draft JSON copied.");
                    }
                    Err(e) => msg.from_app_error(&e),
                }
            }
        });

        if session.countdown().is_expired() {
            ui.add_space(6.0);
            widgets::ui_notice(ui, "The filing deadline has passed.");
        }
    }

    fn ui_assistant(
        ui: &mut egui::Ui,
        msg: &mut PanelMsgState,
        chat_input: &mut String,
        session: &mut DraftSession,
    ) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("AI Research & Drafting Assistant");
            ui.small("Research prior art, improve claims, generate content");
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("chat_scroll")
                .max_height(280.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for m in session.assistant().messages() {
                        chat_bubble(ui, m);
                    }
                    if session.assistant().is_typing() {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.small("typing…");
                        });
                    }
                });

            ui.separator();

            let mut to_send: Option<String> = None;

            ui.horizontal_wrapped(|ui| {
                for (label, prompt) in QUICK_ACTIONS {
                    if ui.small_button(label).clicked() {
                        to_send = Some(prompt.to_string());
                    }
                }
            });

            ui.horizontal(|ui| {
                let resp = ui.add(
                    egui::TextEdit::multiline(&mut *chat_input)
                        .hint_text(CHAT_HINT)
                        .desired_rows(2)
                        .desired_width(ui.available_width() - 60.0),
                );

                let enter = resp.has_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);

                if ui.button("Send").clicked() || enter {
                    to_send = Some(std::mem::take(chat_input));
                }
            });

            if let Some(text) = to_send {
                match session.send_message(&text, Instant::now()) {
                    Ok(()) => {}
                    // nothing typed: not worth a message
                    Err(DraftError::EmptyMessage) => {}
                    Err(e) => msg.from_app_error(&AppError::from(e)),
                }
            }
        });
    }

    fn ui_suggestions(ui: &mut egui::Ui, msg: &mut PanelMsgState, session: &mut DraftSession) {
        let mut action = None;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("AI Suggestions");
            ui.add_space(4.0);

            let mut any = false;
            for s in session.visible_suggestions() {
                any = true;
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.small(s.section.label().to_uppercase());
                    ui.label(&s.text);
                    ui.horizontal(|ui| {
                        if ui.button("Accept").clicked() {
                            action = Some(SuggestionAction::Accept(s.id));
                        }
                        if ui.button("Dismiss").clicked() {
                            action = Some(SuggestionAction::Dismiss(s.id));
                        }
                    });
                });
            }

            if !any {
                ui.small("No suggestions.");
            }
        });

        let res = match action {
            Some(SuggestionAction::Accept(id)) => session.accept_suggestion(id),
            Some(SuggestionAction::Dismiss(id)) => session.dismiss_suggestion(id),
            None => Ok(()),
        };
        if let Err(e) = res {
            msg.from_app_error(&AppError::from(e));
        }
    }

    fn ui_preview(ui: &mut egui::Ui, preview: &Preview) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            let h = &preview.header;

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.strong(h.heading);
                    ui.monospace(h.country);
                    ui.monospace(h.kind);
                });

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.small(&h.pub_no);
                    ui.small(&h.pub_date);
                    match encode_code39(&h.barcode) {
                        Ok(els) => {
                            widgets::barcode(ui, &els, egui::vec2(200.0, 48.0));
                        }
                        Err(e) => {
                            ui.small(format!("(barcode unavailable: {e})"));
                        }
                    }
                });
            });

            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("preview_scroll")
                .max_height(520.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.small("(54)");
                        ui.strong(preview.title().to_uppercase());
                    });
                    ui.add_space(6.0);

                    for line in preview.front_page.iter().skip(1) {
                        ui.label(format!("{} {}: {}", line.code, line.label, line.text));
                    }

                    for s in &preview.sections {
                        ui.add_space(8.0);
                        ui.strong(s.heading);
                        for p in &s.paragraphs {
                            ui.horizontal_wrapped(|ui| {
                                ui.strong(p.tag());
                                ui.label(&p.text);
                            });
                        }
                    }

                    ui.add_space(8.0);
                    ui.strong(patentor_drafting_lib::draft::CLAIMS_HEADING);
                    ui.label(patentor_drafting_lib::draft::CLAIMS_PREAMBLE);
                    for c in &preview.claims {
                        ui.horizontal_wrapped(|ui| {
                            ui.strong(format!("{}.", c.number));
                            ui.label(&c.text);
                        });
                    }
                });
        });
    }

    fn ui_sections(ui: &mut egui::Ui, msg: &mut PanelMsgState, session: &mut DraftSession) {
        ui.heading("Patent Sections");
        ui.add_space(6.0);

        for section in Section::ALL {
            let expanded = session.visibility().is_expanded(section);
            if widgets::section_header(ui, section.label(), expanded) {
                session.toggle_section(section);
            }

            if !session.visibility().is_expanded(section) {
                continue;
            }

            ui.indent(section.key(), |ui| {
                for &field in section.fields() {
                    field_editor(ui, session, field);
                }

                if section == Section::Claims {
                    claims_editor(ui, msg, session);
                }
            });
            ui.add_space(4.0);
        }
    }
}

fn chat_bubble(ui: &mut egui::Ui, m: &ChatMessage) {
    let (layout, fill) = match m.role {
        Role::User => (
            egui::Layout::right_to_left(egui::Align::TOP),
            ui.visuals().selection.bg_fill,
        ),
        Role::Assistant => (
            egui::Layout::left_to_right(egui::Align::TOP),
            ui.visuals().faint_bg_color,
        ),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::NONE
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::same(6))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);
                ui.label(&m.content);
            });
    });
}

fn field_editor(ui: &mut egui::Ui, session: &mut DraftSession, field: DocField) {
    let mut buf = session.document().field(field).to_string();
    let hint = format!("Enter {}", field.label().to_lowercase());

    if is_title_block_field(field) {
        ui.small(field.label());
    }

    let resp = if field.is_single_line() {
        ui.add(
            egui::TextEdit::singleline(&mut buf)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        )
    } else {
        ui.add(
            egui::TextEdit::multiline(&mut buf)
                .hint_text(hint)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        )
    };

    if resp.changed() {
        session.set_field(field, buf);
    }
}

fn is_title_block_field(field: DocField) -> bool {
    Section::Title.fields().contains(&field)
}

fn claims_editor(ui: &mut egui::Ui, msg: &mut PanelMsgState, session: &mut DraftSession) {
    for i in 0..session.document().claim_count() {
        let mut buf = session.document().claims()[i].clone();
        let number = i + 1;

        let changed = ui
            .horizontal(|ui| {
                ui.monospace(format!("{number}."));
                ui.add(
                    egui::TextEdit::multiline(&mut buf)
                        .hint_text(format!("Enter claim {number}"))
                        .desired_rows(2)
                        .desired_width(f32::INFINITY),
                )
                .changed()
            })
            .inner;

        if changed {
            if let Err(e) = session.set_claim_at(i, buf) {
                msg.from_app_error(&AppError::from(e));
            }
        }
    }

    if ui.button("+ Add Claim").clicked() {
        session.append_claim("");
    }
}
