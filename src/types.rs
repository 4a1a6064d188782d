//! Common types and data structures

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level tabs, one per hardware subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabLabel {
    Buck0,
    Buck1,
    Cima,
    Board,
    Functions,
}

impl TabLabel {
    /// Tabs in display order
    pub const ALL: [TabLabel; 5] = [
        TabLabel::Buck0,
        TabLabel::Buck1,
        TabLabel::Cima,
        TabLabel::Board,
        TabLabel::Functions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TabLabel::Buck0 => "BUCK0",
            TabLabel::Buck1 => "BUCK1",
            TabLabel::Cima => "CIMA",
            TabLabel::Board => "Board",
            TabLabel::Functions => "Functions",
        }
    }

    pub fn index(self) -> usize {
        match self {
            TabLabel::Buck0 => 0,
            TabLabel::Buck1 => 1,
            TabLabel::Cima => 2,
            TabLabel::Board => 3,
            TabLabel::Functions => 4,
        }
    }
}

impl fmt::Display for TabLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Feedback produced by a port action, shown as a toast and in the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// Timestamped entry in the activity log
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub at: DateTime<Local>,
    pub notice: Notice,
}

/// Row-level action requested from the port table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Write(usize),
    Read(usize),
}

/// Toolbar action requested from the bottom of a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    ReadAll,
    WriteAll,
    CheckHadc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_are_the_fixed_five_in_order() {
        let labels: Vec<&str> = TabLabel::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(labels, ["BUCK0", "BUCK1", "CIMA", "Board", "Functions"]);
    }

    #[test]
    fn tab_index_matches_position() {
        for (i, tab) in TabLabel::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }
}
