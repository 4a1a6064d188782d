//! View rendering (tab bar, port tables, toolbar, status bar)

use super::App;
use crate::constants::APP_VERSION;
use crate::theme;
use crate::types::*;
use crate::ui::components::{default_badge, section_header, tab_button};
use eframe::egui;

const COLUMN_HEADERS: [&str; 5] = ["Port", "Read Value", "Write", "Read", "Default"];
const TOOLBAR_HEIGHT: f32 = 40.0;

impl App {
    pub(crate) fn render_tab_bar(&mut self, ctx: &egui::Context) {
        let mut clicked = None;
        egui::TopBottomPanel::top("tab_bar")
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin { left: 16, right: 16, top: 12, bottom: 0 }),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
                    for tab in TabLabel::ALL {
                        if tab_button(ui, tab.as_str(), tab == self.active_tab) {
                            clicked = Some(tab);
                        }
                    }
                });
            });
        if let Some(tab) = clicked {
            self.select_tab(tab);
        }
    }

    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(theme::STATUS_BAR_HEIGHT)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_STATUS)
                    .inner_margin(egui::Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let color = match self.activity.back().map(|e| e.notice.kind) {
                        Some(NoticeKind::Error) => theme::STATUS_ERROR,
                        _ => theme::TEXT_MUTED,
                    };
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&self.status_message)
                                .size(theme::FONT_SMALL + 1.0)
                                .color(color),
                        )
                        .truncate()
                        .selectable(false),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("v{}", APP_VERSION))
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                        if ui
                            .add(egui::Button::new(egui_phosphor::regular::LIST_BULLETS).frame(false))
                            .on_hover_text("Activity log")
                            .clicked()
                        {
                            self.show_activity_log = !self.show_activity_log;
                        }
                    });
                });
            });
    }

    /// Header, optional CIMA controls, port table and toolbar for one tab
    pub(crate) fn render_port_tab(&mut self, ui: &mut egui::Ui, label: TabLabel) {
        section_header(ui, self.tab(label).label.as_str());
        ui.add_space(theme::SPACING_SM);

        let is_cima = label == TabLabel::Cima;
        if is_cima {
            self.render_cima_controls(ui);
            ui.add_space(theme::SPACING_SM);
        }

        let writes_enabled = self.writes_enabled(label);
        let mut table_height = ui.available_height() - TOOLBAR_HEIGHT - theme::SPACING_LG;
        if is_cima {
            // Leave room for the MVM header, or for the whole panel when open
            table_height -= 32.0;
            if self.mvm_expanded {
                table_height *= 0.4;
            }
        }

        let mut actions = Vec::new();
        theme::table_frame().show(ui, |ui| {
            self.render_port_table(ui, label, table_height.max(120.0), writes_enabled, &mut actions);
        });

        ui.add_space(theme::SPACING_MD);
        if let Some(bulk) = self.render_toolbar(ui, writes_enabled) {
            self.handle_bulk_action(label, bulk);
        }
        for action in actions {
            self.handle_row_action(label, action);
        }

        if is_cima {
            ui.add_space(theme::SPACING_MD);
            self.render_mvm_panel(ui);
        }
    }

    fn render_port_table(
        &mut self,
        ui: &mut egui::Ui,
        label: TabLabel,
        max_height: f32,
        writes_enabled: bool,
        actions: &mut Vec<RowAction>,
    ) {
        use egui_extras::{Column, TableBuilder};

        let rows = &mut self.tab_mut(label).rows;

        TableBuilder::new(ui)
            .id_salt(("ports", label))
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .max_scroll_height(max_height)
            .min_scrolled_height(0.0)
            .auto_shrink([false, true])
            .column(Column::remainder().at_least(180.0).clip(true))
            .column(Column::exact(110.0))
            .column(Column::exact(theme::WRITE_FIELD_WIDTH + 100.0))
            .column(Column::exact(90.0))
            .column(Column::exact(110.0))
            .header(theme::HEADER_HEIGHT, |mut header| {
                for title in COLUMN_HEADERS {
                    header.col(|ui| {
                        ui.painter().rect_filled(ui.max_rect(), 0.0, theme::BG_HEADER);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(title)
                                    .size(theme::FONT_LABEL)
                                    .strong()
                                    .color(theme::TEXT_SECONDARY),
                            )
                            .selectable(false),
                        );
                    });
                }
            })
            .body(|mut body| {
                for (idx, row) in rows.iter_mut().enumerate() {
                    body.row(theme::ROW_HEIGHT, |mut tr| {
                        tr.col(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(&row.port.name)
                                        .size(theme::FONT_BODY)
                                        .color(theme::TEXT_SECONDARY),
                                )
                                .truncate(),
                            );
                        });
                        tr.col(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(&row.read_value)
                                        .monospace()
                                        .color(theme::TEXT_PRIMARY),
                                )
                                .selectable(true),
                            );
                        });
                        tr.col(|ui| {
                            let edit = ui.add(
                                egui::TextEdit::singleline(&mut row.write_input)
                                    .hint_text("enter value")
                                    .horizontal_align(egui::Align::Center)
                                    .desired_width(theme::WRITE_FIELD_WIDTH),
                            );
                            let submitted =
                                edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                            let clicked = ui
                                .add_enabled(
                                    writes_enabled,
                                    theme::button_primary(egui_phosphor::regular::UPLOAD_SIMPLE),
                                )
                                .on_hover_text(format!("Write {}", row.port.name))
                                .on_disabled_hover_text("Invalid mask")
                                .clicked();
                            if clicked || (submitted && writes_enabled) {
                                actions.push(RowAction::Write(idx));
                            }
                        });
                        tr.col(|ui| {
                            if ui
                                .add(theme::button_secondary(format!(
                                    "{} Read",
                                    egui_phosphor::regular::DOWNLOAD_SIMPLE
                                )))
                                .on_hover_text(format!("Read {}", row.port.name))
                                .clicked()
                            {
                                actions.push(RowAction::Read(idx));
                            }
                        });
                        tr.col(|ui| {
                            default_badge(ui, &row.default_text());
                        });
                    });
                }
            });
    }

    /// Read All / Write All / Check HADC, right-aligned
    fn render_toolbar(&self, ui: &mut egui::Ui, writes_enabled: bool) -> Option<BulkAction> {
        let mut action = None;
        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), TOOLBAR_HEIGHT),
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui
                    .add(theme::button_accent("Check HADC"))
                    .on_hover_text("Check HADC status")
                    .clicked()
                {
                    action = Some(BulkAction::CheckHadc);
                }
                if ui
                    .add_enabled(writes_enabled, theme::button_primary("Write All"))
                    .on_hover_text("Write all values (frontend only)")
                    .clicked()
                {
                    action = Some(BulkAction::WriteAll);
                }
                if ui
                    .add(theme::button_secondary("Read All"))
                    .on_hover_text("Read all ports (frontend only)")
                    .clicked()
                {
                    action = Some(BulkAction::ReadAll);
                }
            },
        );
        action
    }
}
