//! App module - contains the main application state and logic

mod actions;
mod cima;
mod modals;
mod views;

use crate::cima::{MvmGrid, MvmSummary};
use crate::constants::CIMA_INDEX_MAX;
use crate::hardware::{PortIo, StubPortIo};
use crate::ports::{sample_tables, Port, PortTable};
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Instant;

// ============================================================================
// TAB STATE
// ============================================================================

/// Render state for one port row
pub struct PortRow {
    pub port: Port,
    /// Text in the Read Value column; starts as the default
    pub read_value: String,
    /// Pending text in the Write field
    pub write_input: String,
}

impl PortRow {
    pub fn new(port: Port) -> Self {
        Self {
            read_value: port.default.to_string(),
            write_input: String::new(),
            port,
        }
    }

    pub fn default_text(&self) -> String {
        self.port.default.to_string()
    }
}

pub struct PortTab {
    pub label: TabLabel,
    pub rows: Vec<PortRow>,
}

impl PortTab {
    pub fn new(label: TabLabel, table: &PortTable) -> Self {
        Self {
            label,
            rows: table.iter().cloned().map(PortRow::new).collect(),
        }
    }
}

/// Extra controls on the CIMA tab
#[derive(Default)]
pub struct CimaState {
    pub index: u8,
    pub mask: String,
    pub mvm: MvmGrid,
    pub summary: Option<MvmSummary>,
}

impl CimaState {
    pub fn set_index(&mut self, index: u8) {
        self.index = index.min(CIMA_INDEX_MAX);
    }
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) tabs: Vec<PortTab>,
    pub(crate) active_tab: TabLabel,
    pub(crate) io: Box<dyn PortIo>,
    pub(crate) cima: CimaState,
    pub(crate) mvm_expanded: bool,
    // Status bar + activity log
    pub(crate) status_message: String,
    pub(crate) activity: VecDeque<ActivityEntry>,
    pub(crate) show_activity_log: bool,
    // Toast notification
    pub(crate) toast: Option<Notice>,
    pub(crate) toast_start: Option<Instant>,
    // Central panel rect for toast positioning
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Window tracking
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: Option<PathBuf>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let mut app = Self::with_io(settings, Box::new(StubPortIo));
        app.data_dir = Some(data_dir);
        app
    }

    /// Build the app state without a window. `data_dir` stays unset so nothing is saved.
    pub fn with_io(settings: Settings, io: Box<dyn PortIo>) -> Self {
        let tabs = sample_tables()
            .iter()
            .map(|(label, table)| PortTab::new(*label, table))
            .collect();

        Self {
            tabs,
            active_tab: settings.last_tab,
            io,
            cima: CimaState::default(),
            mvm_expanded: settings.mvm_expanded,
            status_message: "Ready".to_string(),
            activity: VecDeque::new(),
            show_activity_log: settings.show_activity_log,
            toast: None,
            toast_start: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir: None,
        }
    }

    pub fn save_settings(&self) {
        let Some(data_dir) = &self.data_dir else {
            return;
        };
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            last_tab: self.active_tab,
            mvm_expanded: self.mvm_expanded,
            show_activity_log: self.show_activity_log,
        };
        settings.save(data_dir);
    }

    pub fn tab(&self, label: TabLabel) -> &PortTab {
        &self.tabs[label.index()]
    }

    pub fn tab_mut(&mut self, label: TabLabel) -> &mut PortTab {
        &mut self.tabs[label.index()]
    }

    pub fn select_tab(&mut self, label: TabLabel) {
        if self.active_tab != label {
            tracing::debug!(tab = %label, "Tab selected");
            self.active_tab = label;
        }
    }

    /// Render one frame. Split from `eframe::App::update` so it can run headless.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.render_tab_bar(ctx);
        self.render_status_bar(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                self.central_panel_rect = Some(ui.max_rect());
                let label = self.active_tab;
                self.render_port_tab(ui, label);
            });

        self.render_mvm_summary(ctx);
        self.render_activity_log(ctx);
        self.render_toast(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use egui::epaint::Shape;

    fn stub_app() -> App {
        App::with_io(Settings::default(), Box::new(StubPortIo))
    }

    fn collect_text(shape: &Shape, out: &mut Vec<String>) {
        match shape {
            Shape::Text(text) => out.push(text.galley.text().to_owned()),
            Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_text(s, out)),
            _ => {}
        }
    }

    /// Render one headless frame and return every painted text run
    fn render(app: &mut App, ctx: &egui::Context) -> Vec<String> {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1400.0, 1000.0))),
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| app.ui(ctx));
        let mut texts = Vec::new();
        for clipped in &output.shapes {
            collect_text(&clipped.shape, &mut texts);
        }
        texts
    }

    fn count(texts: &[String], needle: &str) -> usize {
        texts.iter().filter(|t| t.as_str() == needle).count()
    }

    #[test]
    fn window_shows_the_five_tabs() {
        let mut app = stub_app();
        let ctx = egui::Context::default();
        let texts = render(&mut app, &ctx);
        for tab in TabLabel::ALL {
            assert!(count(&texts, tab.as_str()) >= 1, "missing tab {}", tab);
        }
        assert_eq!(count(&texts, "CIMA_MVM"), 0);
        assert_eq!(count(&texts, "Ready"), 1);
    }

    #[test]
    fn every_tab_renders_one_row_per_port() {
        let mut app = stub_app();
        let ctx = egui::Context::default();
        for tab in TabLabel::ALL {
            app.select_tab(tab);
            let texts = render(&mut app, &ctx);
            for row in &app.tab(tab).rows {
                assert_eq!(count(&texts, &row.port.name), 1, "{} on {}", row.port.name, tab);
            }
            // Read Value and Default both show the placeholder
            assert_eq!(count(&texts, "N/A"), 2 * app.tab(tab).rows.len());
        }
    }

    #[test]
    fn write_on_buck0_leaves_values_and_shows_notice() {
        let mut app = stub_app();
        let ctx = egui::Context::default();
        app.select_tab(TabLabel::Buck0);
        render(&mut app, &ctx);

        app.handle_row_action(TabLabel::Buck0, crate::types::RowAction::Write(0));
        let texts = render(&mut app, &ctx);

        assert_eq!(count(&texts, "N/A"), 2 * app.tab(TabLabel::Buck0).rows.len());
        let expected = "[BUCK0] Write BUCK_PORB = <empty> (frontend only).";
        assert!(count(&texts, expected) >= 1, "status bar should show the notice");
        assert_eq!(app.toast.as_ref().map(|n| n.message.as_str()), Some(expected));
    }

    #[test]
    fn cima_tab_shows_mvm_panel_when_expanded() {
        let mut app = App::with_io(
            Settings { last_tab: TabLabel::Cima, mvm_expanded: true, ..Default::default() },
            Box::new(StubPortIo),
        );
        let ctx = egui::Context::default();
        let texts = render(&mut app, &ctx);
        assert!(texts.iter().any(|t| t.ends_with("CIMA_MVM")));
        assert_eq!(count(&texts, "Sum B = 0"), 1);
        assert_eq!(count(&texts, crate::cima::STATUS_NEED_TOTAL), 1);
    }

    #[test]
    fn invalid_mask_is_flagged() {
        let mut app = stub_app();
        app.select_tab(TabLabel::Cima);
        app.cima.mask = "nope".into();
        let ctx = egui::Context::default();
        let texts = render(&mut app, &ctx);
        assert_eq!(count(&texts, "Invalid mask"), 1);
    }

    #[test]
    fn cima_index_is_clamped() {
        let mut cima = CimaState::default();
        cima.set_index(200);
        assert_eq!(cima.index, CIMA_INDEX_MAX);
    }
}
