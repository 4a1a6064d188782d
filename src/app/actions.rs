//! Port actions: the Write/Read handlers behind every control

use super::App;
use crate::cima::is_valid_mask;
use crate::constants::ACTIVITY_LOG_CAPACITY;
use crate::hardware::PortIoError;
use crate::types::*;
use std::time::Instant;
use tracing::{info, warn};

impl App {
    /// Writes are blocked on the CIMA tab while the mask is malformed.
    pub fn writes_enabled(&self, tab: TabLabel) -> bool {
        tab != TabLabel::Cima || is_valid_mask(&self.cima.mask)
    }

    pub fn handle_row_action(&mut self, tab: TabLabel, action: RowAction) {
        let notice = match action {
            RowAction::Write(row) => self.write_row(tab, row),
            RowAction::Read(row) => self.read_row(tab, row),
        };
        if let Some(notice) = notice {
            self.push_notice(notice);
        }
    }

    pub fn handle_bulk_action(&mut self, tab: TabLabel, action: BulkAction) {
        let notice = match action {
            BulkAction::ReadAll => self.read_all(tab),
            BulkAction::WriteAll => self.write_all(tab),
            BulkAction::CheckHadc => match self.io.check_hadc(tab) {
                Ok(msg) => Notice::info(msg),
                Err(e) => io_error_notice(tab, &e),
            },
        };
        self.push_notice(notice);
    }

    fn write_row(&mut self, tab: TabLabel, row: usize) -> Option<Notice> {
        if !self.writes_enabled(tab) {
            return Some(Notice::error(format!("[{}] Invalid mask, write skipped.", tab)));
        }
        let (name, value) = {
            let r = self.tab(tab).rows.get(row)?;
            (r.port.name.clone(), r.write_input.trim().to_string())
        };
        Some(match self.io.write(tab, &name, &value) {
            Ok(msg) => Notice::info(msg),
            Err(e) => io_error_notice(tab, &e),
        })
    }

    fn read_row(&mut self, tab: TabLabel, row: usize) -> Option<Notice> {
        let name = self.tab(tab).rows.get(row)?.port.name.clone();
        Some(match self.io.read(tab, &name) {
            Ok(Some(value)) => {
                let text = value.to_string();
                self.tab_mut(tab).rows[row].read_value = text.clone();
                Notice::info(format!("[{}] Read {} = {}", tab, name, text))
            }
            Ok(None) => Notice::info(format!("[{}] Read {} (frontend only).", tab, name)),
            Err(e) => io_error_notice(tab, &e),
        })
    }

    fn read_all(&mut self, tab: TabLabel) -> Notice {
        let names: Vec<String> = self.tab(tab).rows.iter().map(|r| r.port.name.clone()).collect();
        for (i, name) in names.iter().enumerate() {
            match self.io.read(tab, name) {
                Ok(Some(value)) => self.tab_mut(tab).rows[i].read_value = value.to_string(),
                Ok(None) => {}
                Err(e) => return io_error_notice(tab, &e),
            }
        }
        Notice::info(format!("[{}] Read all (frontend only).", tab))
    }

    fn write_all(&mut self, tab: TabLabel) -> Notice {
        if !self.writes_enabled(tab) {
            return Notice::error(format!("[{}] Invalid mask, write skipped.", tab));
        }
        let pending: Vec<(String, String)> = self
            .tab(tab)
            .rows
            .iter()
            .map(|r| (r.port.name.clone(), r.write_input.trim().to_string()))
            .collect();
        for (name, value) in &pending {
            if let Err(e) = self.io.write(tab, name, value) {
                return io_error_notice(tab, &e);
            }
        }
        Notice::info(format!("[{}] Wrote all (frontend only).", tab))
    }

    /// Surface a notice: toast, status bar, activity log.
    pub fn push_notice(&mut self, notice: Notice) {
        match notice.kind {
            NoticeKind::Info => info!(notice = %notice.message, "Port action"),
            NoticeKind::Error => warn!(notice = %notice.message, "Port action failed"),
        }
        self.status_message = notice.message.clone();
        if self.activity.len() >= ACTIVITY_LOG_CAPACITY {
            self.activity.pop_front();
        }
        self.activity.push_back(ActivityEntry { at: chrono::Local::now(), notice: notice.clone() });
        self.toast = Some(notice);
        self.toast_start = Some(Instant::now());
    }
}

fn io_error_notice(tab: TabLabel, err: &PortIoError) -> Notice {
    Notice::error(format!("[{}] {}", tab, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{PortIo, StubPortIo};
    use crate::ports::PortValue;
    use crate::settings::Settings;

    fn stub_app() -> App {
        App::with_io(Settings::default(), Box::new(StubPortIo))
    }

    fn read_values(app: &App, tab: TabLabel) -> Vec<String> {
        app.tab(tab).rows.iter().map(|r| r.read_value.clone()).collect()
    }

    /// Driver that returns a fixed value and can be told to fail
    struct FakeIo {
        value: Option<PortValue>,
        fail: bool,
    }

    impl PortIo for FakeIo {
        fn write(&mut self, _tab: TabLabel, port: &str, _value: &str) -> Result<String, PortIoError> {
            if self.fail {
                return Err(PortIoError::Rejected { port: port.to_string(), reason: "locked".into() });
            }
            Ok(format!("wrote {}", port))
        }

        fn read(&mut self, _tab: TabLabel, _port: &str) -> Result<Option<PortValue>, PortIoError> {
            if self.fail {
                return Err(PortIoError::Unavailable("no board".into()));
            }
            Ok(self.value.clone())
        }

        fn check_hadc(&mut self, _tab: TabLabel) -> Result<String, PortIoError> {
            Ok("hadc ok".into())
        }
    }

    #[test]
    fn row_counts_and_initial_values() {
        let app = stub_app();
        assert_eq!(app.tabs.len(), 5);
        for tab in TabLabel::ALL {
            let rows = &app.tab(tab).rows;
            assert_eq!(rows.len(), crate::constants::PORTS_SAMPLE.len());
            for row in rows {
                assert_eq!(row.read_value, row.default_text());
                assert_eq!(row.read_value, "N/A");
            }
        }
    }

    #[test]
    fn write_does_not_change_read_value() {
        let mut app = stub_app();
        app.tab_mut(TabLabel::Buck0).rows[0].write_input = "0x1".into();
        let before = read_values(&app, TabLabel::Buck0);

        app.handle_row_action(TabLabel::Buck0, RowAction::Write(0));

        assert_eq!(read_values(&app, TabLabel::Buck0), before);
        let toast = app.toast.clone().unwrap();
        assert_eq!(toast.kind, NoticeKind::Info);
        assert_eq!(toast.message, "[BUCK0] Write BUCK_PORB = 0x1 (frontend only).");
        assert_eq!(app.status_message, toast.message);
    }

    #[test]
    fn read_does_not_change_read_value() {
        let mut app = stub_app();
        let before = read_values(&app, TabLabel::Board);
        app.handle_row_action(TabLabel::Board, RowAction::Read(3));
        assert_eq!(read_values(&app, TabLabel::Board), before);
        assert_eq!(
            app.status_message,
            "[Board] Read BUCK_CAL_REFBAND_H<1:0> (frontend only)."
        );
    }

    #[test]
    fn out_of_range_row_is_ignored() {
        let mut app = stub_app();
        app.handle_row_action(TabLabel::Buck1, RowAction::Write(99));
        assert!(app.toast.is_none());
        assert_eq!(app.status_message, "Ready");
    }

    #[test]
    fn bulk_actions_report_per_tab() {
        let mut app = stub_app();
        app.handle_bulk_action(TabLabel::Functions, BulkAction::ReadAll);
        assert_eq!(app.status_message, "[Functions] Read all (frontend only).");
        app.handle_bulk_action(TabLabel::Functions, BulkAction::WriteAll);
        assert_eq!(app.status_message, "[Functions] Wrote all (frontend only).");
        app.handle_bulk_action(TabLabel::Buck1, BulkAction::CheckHadc);
        assert_eq!(app.status_message, "[BUCK1] Checking HADC... (placeholder)");
        assert_eq!(read_values(&app, TabLabel::Functions), vec!["N/A"; 8]);
        assert_eq!(app.activity.len(), 3);
    }

    #[test]
    fn tabs_keep_independent_state() {
        let mut app = stub_app();
        app.tab_mut(TabLabel::Buck0).rows[2].write_input = "5".into();
        app.select_tab(TabLabel::Cima);
        app.tab_mut(TabLabel::Cima).rows[2].write_input = "7".into();
        app.select_tab(TabLabel::Buck0);
        assert_eq!(app.tab(TabLabel::Buck0).rows[2].write_input, "5");
        assert_eq!(app.tab(TabLabel::Cima).rows[2].write_input, "7");
        assert!(app.tab(TabLabel::Buck1).rows[2].write_input.is_empty());
    }

    #[test]
    fn invalid_mask_blocks_cima_writes_only() {
        let mut app = stub_app();
        app.cima.mask = "64'hZZ".into();
        assert!(!app.writes_enabled(TabLabel::Cima));
        assert!(app.writes_enabled(TabLabel::Buck0));

        app.handle_bulk_action(TabLabel::Cima, BulkAction::WriteAll);
        assert_eq!(app.toast.as_ref().unwrap().kind, NoticeKind::Error);

        app.cima.mask = "64'h0000_0001".into();
        app.handle_row_action(TabLabel::Cima, RowAction::Write(0));
        assert_eq!(app.toast.as_ref().unwrap().kind, NoticeKind::Info);
    }

    #[test]
    fn driver_values_and_errors() {
        let io = FakeIo { value: Some(PortValue::Number(1.8)), fail: false };
        let mut app = App::with_io(Settings::default(), Box::new(io));
        app.handle_row_action(TabLabel::Buck0, RowAction::Read(5));
        assert_eq!(app.tab(TabLabel::Buck0).rows[5].read_value, "1.8");
        assert_eq!(app.tab(TabLabel::Buck0).rows[4].read_value, "N/A");

        let io = FakeIo { value: None, fail: true };
        let mut app = App::with_io(Settings::default(), Box::new(io));
        app.handle_row_action(TabLabel::Buck0, RowAction::Write(0));
        let toast = app.toast.clone().unwrap();
        assert_eq!(toast.kind, NoticeKind::Error);
        assert_eq!(toast.message, "[BUCK0] BUCK_PORB rejected: locked");
        app.handle_bulk_action(TabLabel::Buck0, BulkAction::ReadAll);
        assert_eq!(app.status_message, "[BUCK0] hardware unavailable: no board");
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut app = stub_app();
        for _ in 0..(ACTIVITY_LOG_CAPACITY + 5) {
            app.handle_row_action(TabLabel::Buck0, RowAction::Read(0));
        }
        assert_eq!(app.activity.len(), ACTIVITY_LOG_CAPACITY);
    }
}
