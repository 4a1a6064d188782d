//! Reusable UI components
//!
//! Standalone widgets shared by the tab views and the window chrome.

use crate::theme;
use eframe::egui;

/// Rounded pill showing a port's default value
pub fn default_badge(ui: &mut egui::Ui, text: &str) -> egui::Response {
    egui::Frame::new()
        .fill(theme::BG_BADGE)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(10, 3))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .size(theme::FONT_LABEL)
                        .strong()
                        .color(theme::TEXT_SECONDARY),
                )
                .selectable(false),
            )
        })
        .inner
}

/// Large title at the top of each tab
pub fn section_header(ui: &mut egui::Ui, title: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(title)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_SECONDARY),
        )
        .selectable(false),
    );
}

/// Top-rounded tab button. Returns true if clicked.
pub fn tab_button(ui: &mut egui::Ui, label: &str, selected: bool) -> bool {
    let font = egui::FontId::proportional(theme::FONT_BODY);
    let text_w = ui.fonts(|f| {
        f.layout_no_wrap(label.to_string(), font.clone(), theme::TEXT_MUTED).rect.width()
    });
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(text_w + 2.0 * theme::SPACING_XL, theme::TAB_HEIGHT),
        egui::Sense::click(),
    );

    if ui.is_rect_visible(rect) {
        let base = if selected { theme::BG_BADGE } else { theme::BG_TAB };
        let fill = if selected { base } else { theme::hover_fill(&response, base) };
        let radius = egui::CornerRadius { nw: 10, ne: 10, sw: 0, se: 0 };
        ui.painter().rect_filled(rect, radius, fill);
        if selected {
            let underline = egui::Rect::from_min_max(
                egui::pos2(rect.left() + 6.0, rect.bottom() - 2.0),
                egui::pos2(rect.right() - 6.0, rect.bottom()),
            );
            ui.painter().rect_filled(underline, 1.0, theme::ACCENT);
        }
        let color = if selected { theme::TEXT_PRIMARY } else { theme::TEXT_MUTED };
        ui.painter().text(rect.center(), egui::Align2::CENTER_CENTER, label, font, color);
    }
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    response.clicked()
}
