//! CIMA tab extras: index/mask bar and the MVM entry panel

use super::App;
use crate::cima::{is_valid_mask, sum_text, MVM_HEADERS};
use crate::constants::CIMA_INDEX_MAX;
use crate::theme;
use eframe::egui;
use tracing::{debug, info};

impl App {
    pub(crate) fn render_cima_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut index = self.cima.index;
            ui.add(
                egui::DragValue::new(&mut index)
                    .range(0..=CIMA_INDEX_MAX)
                    .prefix("CIMA idx: "),
            )
            .on_hover_text("Single CIMA index (0-63).");
            if index != self.cima.index {
                self.cima.set_index(index);
                debug!(index = self.cima.index, "CIMA index changed");
            }

            let mask_resp = ui
                .add(
                    egui::TextEdit::singleline(&mut self.cima.mask)
                        .hint_text("64'h0000_0000_0000_0001")
                        .desired_width(220.0),
                )
                .on_hover_text("Optional 64'h bitmask; if provided, overrides index on writes (frontend only).");

            let valid = is_valid_mask(&self.cima.mask);
            if mask_resp.changed() {
                debug!(mask = %self.cima.mask, valid, "CIMA mask edited");
            }
            if !valid {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Invalid mask").strong().color(theme::STATUS_ERROR),
                    )
                    .selectable(false),
                );
            }
        });
    }

    pub(crate) fn render_mvm_panel(&mut self, ui: &mut egui::Ui) {
        let icon = if self.mvm_expanded {
            egui_phosphor::regular::CARET_DOWN
        } else {
            egui_phosphor::regular::CARET_RIGHT
        };
        let toggle = ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{} CIMA_MVM", icon))
                    .size(theme::FONT_BODY + 2.0)
                    .strong()
                    .color(theme::TEXT_SECONDARY),
            )
            .selectable(false)
            .sense(egui::Sense::click()),
        );
        if toggle.clicked() {
            self.mvm_expanded = !self.mvm_expanded;
        }
        if !self.mvm_expanded {
            return;
        }

        ui.horizontal(|ui| {
            ui.label("Target CIMA:");
            ui.add(egui::DragValue::new(&mut self.cima.mvm.target_cima).range(0..=CIMA_INDEX_MAX));
        });

        let grid_height = (ui.available_height() - 80.0).max(120.0);
        theme::table_frame().show(ui, |ui| {
            self.render_mvm_grid(ui, grid_height);
        });

        let check = self.cima.mvm.check();
        ui.horizontal(|ui| {
            ui.label(format!("Sum B = {}", sum_text(check.sum_b)));
            ui.label(format!("Sum D = {}", sum_text(check.sum_d)));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let color = if check.valid { theme::STATUS_SUCCESS } else { theme::STATUS_ERROR };
                ui.add(
                    egui::Label::new(egui::RichText::new(check.status).strong().color(color))
                        .selectable(false),
                );
            });
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(check.valid, theme::button_accent("DO_MVM")).clicked() {
                let summary = self.cima.mvm.summary();
                info!(
                    target_cima = summary.target_cima,
                    mode = summary.mode.label(),
                    sum_b = ?summary.sum_b,
                    sum_d = ?summary.sum_d,
                    "DO_MVM requested"
                );
                self.cima.summary = Some(summary);
            }
        });
    }

    fn render_mvm_grid(&mut self, ui: &mut egui::Ui, max_height: f32) {
        use egui_extras::{Column, TableBuilder};

        let cells = &mut self.cima.mvm.cells;
        TableBuilder::new(ui)
            .id_salt("mvm_grid")
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .max_scroll_height(max_height)
            .auto_shrink([false, true])
            .column(Column::remainder().at_least(120.0))
            .columns(Column::exact(130.0), MVM_HEADERS.len() - 1)
            .header(theme::HEADER_HEIGHT, |mut header| {
                for title in MVM_HEADERS {
                    header.col(|ui| {
                        ui.painter().rect_filled(ui.max_rect(), 0.0, theme::BG_HEADER);
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for row in cells.iter_mut() {
                    body.row(theme::ROW_HEIGHT - 6.0, |mut tr| {
                        for cell in row.iter_mut() {
                            tr.col(|ui| {
                                ui.add(
                                    egui::TextEdit::singleline(cell)
                                        .desired_width(ui.available_width() - theme::SPACING_SM),
                                );
                            });
                        }
                    });
                }
            });
    }
}
