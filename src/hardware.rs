//! Hardware access seam
//!
//! Every Write/Read control goes through [`PortIo`]. The shipped
//! [`StubPortIo`] performs no I/O and only reports what it would have done,
//! so the panel can be exercised without a board attached.

use crate::ports::PortValue;
use crate::types::TabLabel;
use thiserror::Error;
use tracing::debug;

/// Errors a hardware driver can report back to the panel
// StubPortIo never fails; real drivers construct these
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Error)]
pub enum PortIoError {
    /// No transport is connected
    #[error("hardware unavailable: {0}")]
    Unavailable(String),

    /// The target refused the operation
    #[error("{port} rejected: {reason}")]
    Rejected { port: String, reason: String },
}

/// Transport used by the port table controls
pub trait PortIo {
    /// Write `value` to `port`. Returns a short description of what happened.
    fn write(&mut self, tab: TabLabel, port: &str, value: &str) -> Result<String, PortIoError>;

    /// Read `port`. `None` means the driver has no value to report.
    fn read(&mut self, tab: TabLabel, port: &str) -> Result<Option<PortValue>, PortIoError>;

    /// Check the HADC status for a tab's subsystem.
    fn check_hadc(&mut self, tab: TabLabel) -> Result<String, PortIoError>;
}

/// Frontend-only driver: acknowledges everything, touches nothing
#[derive(Debug, Default)]
pub struct StubPortIo;

impl PortIo for StubPortIo {
    fn write(&mut self, tab: TabLabel, port: &str, value: &str) -> Result<String, PortIoError> {
        debug!(tab = %tab, port, value, "Stub write");
        let shown = if value.is_empty() { "<empty>" } else { value };
        Ok(format!("[{}] Write {} = {} (frontend only).", tab, port, shown))
    }

    fn read(&mut self, tab: TabLabel, port: &str) -> Result<Option<PortValue>, PortIoError> {
        debug!(tab = %tab, port, "Stub read");
        Ok(None)
    }

    fn check_hadc(&mut self, tab: TabLabel) -> Result<String, PortIoError> {
        debug!(tab = %tab, "Stub HADC check");
        Ok(format!("[{}] Checking HADC... (placeholder)", tab))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_write_reports_action() {
        let mut io = StubPortIo;
        let msg = io.write(TabLabel::Buck0, "VREF_EN", "1").unwrap();
        assert_eq!(msg, "[BUCK0] Write VREF_EN = 1 (frontend only).");
        let msg = io.write(TabLabel::Board, "ADC_IN0", "").unwrap();
        assert!(msg.contains("<empty>"));
    }

    #[test]
    fn stub_read_has_no_value() {
        let mut io = StubPortIo;
        assert!(io.read(TabLabel::Cima, "ADC_IN1").unwrap().is_none());
    }

    #[test]
    fn error_messages() {
        let err = PortIoError::Rejected { port: "VREF_EN".into(), reason: "locked".into() };
        assert_eq!(err.to_string(), "VREF_EN rejected: locked");
        assert_eq!(
            PortIoError::Unavailable("no board".into()).to_string(),
            "hardware unavailable: no board"
        );
    }
}
