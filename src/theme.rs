//! Centralized theme constants for the control panel
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x1e, 0x22, 0x2a); // window
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x26, 0x2b, 0x34); // alternate rows, buttons
pub const BG_TABLE: Color32 = Color32::from_rgb(0x18, 0x1b, 0x21);
pub const BG_INPUT: Color32 = Color32::from_rgb(0x1a, 0x1e, 0x26);
pub const BG_HEADER: Color32 = Color32::from_rgb(0x22, 0x27, 0x34); // table header
pub const BG_BADGE: Color32 = Color32::from_rgb(0x2c, 0x33, 0x42); // default badge, selected tab
pub const BG_TAB: Color32 = Color32::from_rgb(0x24, 0x2a, 0x36);
pub const BG_STATUS: Color32 = Color32::from_rgb(0x20, 0x25, 0x32);

// =============================================================================
// COLORS - Accent (Sky)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x63, 0xb3, 0xed);
pub const ACCENT_TEXT: Color32 = Color32::from_rgb(0x0e, 0x11, 0x16); // text on accent fill

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe6, 0xe8, 0xeb);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xcf, 0xd5, 0xde);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0xb9, 0xc0, 0xcc); // placeholders

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x2b, 0x30, 0x40); // grid lines
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3a, 0x3f, 0x4b);

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xff, 0x6b, 0x6b);

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_PRIMARY: Color32 = Color32::from_rgb(0x2a, 0x33, 0x42);
pub const BTN_SECONDARY: Color32 = Color32::from_rgb(0x24, 0x2b, 0x37);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const ROW_HEIGHT: f32 = 34.0;
pub const HEADER_HEIGHT: f32 = 32.0;
pub const TAB_HEIGHT: f32 = 34.0;
pub const STATUS_BAR_HEIGHT: f32 = 26.0;
pub const WRITE_FIELD_WIDTH: f32 = 120.0;

// =============================================================================
// CORNER RADIUS / STROKE
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 8.0;
pub const RADIUS_LARGE: f32 = 12.0;
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT,
            stroke: egui::Stroke::new(STROKE_DEFAULT, Color32::BLACK),
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_TABLE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_BADGE,
                weak_bg_fill: BG_BADGE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BG_HEADER,
                weak_bg_fill: BG_HEADER,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_BADGE,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: true,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
        window_corner_radius: egui::CornerRadius::same(12),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(14.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Rounded table container
pub fn table_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_TABLE)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_SM as i8))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(20))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Primary action (Write All)
pub fn button_primary(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).strong())
        .fill(BTN_PRIMARY)
        .corner_radius(RADIUS_DEFAULT)
}

/// Secondary action (Read All, row Read)
pub fn button_secondary(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).strong())
        .fill(BTN_SECONDARY)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent action (Check HADC, DO_MVM)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).strong().color(ACCENT_TEXT))
        .fill(ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Returns fill color for a custom-painted widget given its interaction state.
pub fn hover_fill(response: &egui::Response, base_fill: Color32) -> Color32 {
    if response.is_pointer_button_down_on() {
        lighten(base_fill, 0.06)
    } else if response.hovered() {
        lighten(base_fill, 0.12)
    } else {
        base_fill
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

/// Same color at the given opacity (0.0..=1.0)
pub fn with_alpha(c: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), (255.0 * alpha.clamp(0.0, 1.0)) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_toward_white() {
        let c = lighten(Color32::from_rgb(0, 100, 255), 0.5);
        assert_eq!(c, Color32::from_rgb(127, 177, 255));
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(with_alpha(ACCENT, 2.0).a(), 255);
        assert_eq!(with_alpha(ACCENT, -1.0).a(), 0);
    }
}
