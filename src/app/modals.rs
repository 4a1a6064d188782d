//! Overlays: DO_MVM summary modal, activity log window, toast notification

use super::App;
use crate::constants::{TOAST_FADE_SECS, TOAST_VISIBLE_SECS};
use crate::theme;
use crate::types::NoticeKind;
use crate::utils::format_time;
use eframe::egui;
use std::time::Instant;

impl App {
    pub(crate) fn render_mvm_summary(&mut self, ctx: &egui::Context) {
        let Some(summary) = self.cima.summary.clone() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("mvm_summary_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(340.0);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("DO_MVM Summary").size(theme::FONT_TITLE - 2.0).strong(),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);
                ui.separator();
                ui.add_space(theme::SPACING_SM);
                for line in summary.lines() {
                    ui.label(line);
                }
                ui.add_space(theme::SPACING_LG);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(theme::button_accent("OK")).clicked()
                })
                .inner
            });

        if modal.inner || modal.should_close() {
            self.cima.summary = None;
        }
    }

    pub(crate) fn render_activity_log(&mut self, ctx: &egui::Context) {
        if !self.show_activity_log {
            return;
        }
        let mut open = true;
        egui::Window::new("Activity")
            .open(&mut open)
            .default_size([460.0, 300.0])
            .collapsible(false)
            .show(ctx, |ui| {
                if self.activity.is_empty() {
                    ui.label(egui::RichText::new("No actions yet").color(theme::TEXT_DIM));
                    return;
                }
                egui::ScrollArea::vertical().stick_to_bottom(true).show(ui, |ui| {
                    for entry in &self.activity {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(format_time(&entry.at))
                                    .monospace()
                                    .color(theme::TEXT_DIM),
                            );
                            let color = match entry.notice.kind {
                                NoticeKind::Info => theme::TEXT_SECONDARY,
                                NoticeKind::Error => theme::STATUS_ERROR,
                            };
                            ui.label(egui::RichText::new(&entry.notice.message).color(color));
                        });
                    }
                });
            });
        if !open {
            self.show_activity_log = false;
        }
    }

    /// Bottom-right of the central panel, 3s visible then fade, paused on hover
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(notice), Some(panel_rect)) = (self.toast.clone(), self.central_panel_rect) else {
            return;
        };
        let total_duration = TOAST_VISIBLE_SECS + TOAST_FADE_SECS;
        let margin = 12.0;
        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
        let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
        let alpha = if elapsed > TOAST_VISIBLE_SECS {
            (total_duration - elapsed) / TOAST_FADE_SECS
        } else {
            1.0
        };
        let border = match notice.kind {
            NoticeKind::Info => theme::ACCENT,
            NoticeKind::Error => theme::STATUS_ERROR,
        };

        let response = egui::Area::new(egui::Id::new("action_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme::with_alpha(theme::BG_ELEVATED, 0.9 * alpha))
                    .stroke(egui::Stroke::new(1.0, theme::with_alpha(border, 0.4 * alpha)))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&notice.message)
                                .color(theme::with_alpha(theme::TEXT_PRIMARY, alpha)),
                        );
                    });
            });

        // Pause timer while hovering
        if response.response.hovered() {
            self.toast_start = Some(Instant::now());
        }

        if elapsed >= total_duration {
            self.toast = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
