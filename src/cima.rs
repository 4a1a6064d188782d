//! CIMA helpers: bitmask validation and MVM grid rules

use crate::constants::{MVM_ROWS, MVM_TOTAL};
use regex::Regex;
use std::num::IntErrorKind;
use std::sync::LazyLock;

static MASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^64'h[0-9A-Fa-f_]{1,19}$").expect("static mask pattern"));

/// An empty mask means "use the index"; anything else must be a 64'h literal.
pub fn is_valid_mask(mask: &str) -> bool {
    mask.is_empty() || MASK_RE.is_match(mask)
}

/// Column layout of the MVM grid
pub const MVM_HEADERS: [&str; 5] = [
    "ACT VAL",
    "No rows (ACT)",
    "WT VAL (WT0)",
    "No rows (WT0)",
    "WT1 (ADC weights)",
];

const COL_B: usize = 1;
const COL_D: usize = 3;
const COL_WT1: usize = 4;

pub const STATUS_OK: &str = "OK";
pub const STATUS_NEED_WT1: &str = "Invalid: WT1 required when D > 0";
pub const STATUS_NEED_TOTAL: &str = "Needs total 576 in exactly one of B or D (the other must be 0).";

/// Blank or non-integer cells count as zero. `None` is an integer too large to hold.
fn cell_int(cell: &str) -> Option<i128> {
    match cell.trim().parse::<i128>() {
        Ok(n) => Some(n),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => None,
        Err(_) => Some(0),
    }
}

fn is_positive(cell: &str) -> bool {
    match cell_int(cell) {
        Some(n) => n > 0,
        None => !cell.trim_start().starts_with('-'),
    }
}

/// Column sum for display; an out-of-range sum can never be the required total.
pub fn sum_text(sum: Option<i128>) -> String {
    match sum {
        Some(n) => n.to_string(),
        None => "out of range".to_string(),
    }
}

/// Which operand column carries the 576 rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MvmMode {
    Act,
    Wt0,
}

impl MvmMode {
    pub fn label(self) -> &'static str {
        match self {
            MvmMode::Act => "B (ACT)",
            MvmMode::Wt0 => "D (WT0)",
        }
    }
}

/// Editable 16x5 MVM entry grid
#[derive(Debug, Clone)]
pub struct MvmGrid {
    pub cells: [[String; 5]; MVM_ROWS],
    pub target_cima: u8,
}

impl Default for MvmGrid {
    fn default() -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| String::new())),
            target_cima: 0,
        }
    }
}

/// Result of checking the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MvmCheck {
    pub sum_b: Option<i128>,
    pub sum_d: Option<i128>,
    pub valid: bool,
    pub status: &'static str,
}

/// Data shown in the DO_MVM dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MvmSummary {
    pub target_cima: u8,
    pub mode: MvmMode,
    pub sum_b: Option<i128>,
    pub sum_d: Option<i128>,
    pub rows_b: usize,
    pub rows_d: usize,
}

impl MvmGrid {
    /// Sum of one column, `None` once it leaves the representable range
    fn column_sum(&self, col: usize) -> Option<i128> {
        self.cells
            .iter()
            .try_fold(0i128, |acc, row| acc.checked_add(cell_int(&row[col])?))
    }

    pub fn sums(&self) -> (Option<i128>, Option<i128>) {
        (self.column_sum(COL_B), self.column_sum(COL_D))
    }

    pub fn check(&self) -> MvmCheck {
        let (sum_b, sum_d) = self.sums();
        let total = Some(MVM_TOTAL);
        let total_ok = (sum_b == total && sum_d == Some(0)) || (sum_d == total && sum_b == Some(0));
        let (valid, status) = if !total_ok {
            (false, STATUS_NEED_TOTAL)
        } else if self
            .cells
            .iter()
            .any(|row| is_positive(&row[COL_D]) && row[COL_WT1].trim().is_empty())
        {
            (false, STATUS_NEED_WT1)
        } else {
            (true, STATUS_OK)
        };
        MvmCheck { sum_b, sum_d, valid, status }
    }

    pub fn summary(&self) -> MvmSummary {
        let (sum_b, sum_d) = self.sums();
        let positive = |col: usize| self.cells.iter().filter(|row| is_positive(&row[col])).count();
        MvmSummary {
            target_cima: self.target_cima,
            mode: if sum_b == Some(MVM_TOTAL) { MvmMode::Act } else { MvmMode::Wt0 },
            sum_b,
            sum_d,
            rows_b: positive(COL_B),
            rows_d: positive(COL_D),
        }
    }
}

impl MvmSummary {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Selected CIMA index: {}", self.target_cima),
            format!("Active mode: {}", self.mode.label()),
            format!("Sum B: {}", sum_text(self.sum_b)),
            format!("Sum D: {}", sum_text(self.sum_d)),
            format!("Rows with non-zero B entries: {}", self.rows_b),
            format!("Rows with non-zero D entries: {}", self.rows_d),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_validation() {
        assert!(is_valid_mask(""));
        assert!(is_valid_mask("64'h0000_0000_0000_0001"));
        assert!(is_valid_mask("64'hDEADbeef"));
        assert!(!is_valid_mask("64'h"));
        assert!(!is_valid_mask("32'h0001"));
        assert!(!is_valid_mask("64'h0000_0000_0000_0000_0"));
        assert!(!is_valid_mask("64'hXYZ"));
        assert!(!is_valid_mask(" 64'h1"));
    }

    #[test]
    fn empty_grid_needs_total() {
        let check = MvmGrid::default().check();
        assert_eq!((check.sum_b, check.sum_d), (Some(0), Some(0)));
        assert!(!check.valid);
        assert_eq!(check.status, STATUS_NEED_TOTAL);
    }

    #[test]
    fn act_mode_valid() {
        let mut grid = MvmGrid::default();
        grid.cells[0][1] = "500".into();
        grid.cells[1][1] = " 76 ".into();
        grid.cells[2][1] = "junk".into();
        let check = grid.check();
        assert_eq!(check.sum_b, Some(576));
        assert!(check.valid);
        assert_eq!(check.status, STATUS_OK);

        grid.target_cima = 7;
        let summary = grid.summary();
        assert_eq!(summary.mode, MvmMode::Act);
        assert_eq!(summary.rows_b, 2);
        assert_eq!(summary.rows_d, 0);
        assert_eq!(summary.lines()[0], "Selected CIMA index: 7");
        assert_eq!(summary.lines()[1], "Active mode: B (ACT)");
    }

    #[test]
    fn wt0_mode_requires_wt1() {
        let mut grid = MvmGrid::default();
        grid.cells[3][3] = "576".into();
        let check = grid.check();
        assert!(!check.valid);
        assert_eq!(check.status, STATUS_NEED_WT1);

        grid.cells[3][4] = "0x3f".into();
        let check = grid.check();
        assert!(check.valid);
        assert_eq!(grid.summary().mode, MvmMode::Wt0);
    }

    #[test]
    fn both_columns_populated_is_invalid() {
        let mut grid = MvmGrid::default();
        grid.cells[0][1] = "576".into();
        grid.cells[0][3] = "1".into();
        grid.cells[0][4] = "w".into();
        assert_eq!(grid.check().status, STATUS_NEED_TOTAL);
    }

    #[test]
    fn huge_entries_do_not_wrap_to_total() {
        let mut grid = MvmGrid::default();
        grid.cells[0][1] = i64::MAX.to_string();
        grid.cells[1][1] = i64::MAX.to_string();
        grid.cells[2][1] = "578".into();
        let check = grid.check();
        assert_eq!(check.sum_b, Some(2 * i64::MAX as i128 + 578));
        assert!(!check.valid);
        assert_eq!(check.status, STATUS_NEED_TOTAL);
    }

    #[test]
    fn sum_past_i128_is_out_of_range() {
        let mut grid = MvmGrid::default();
        grid.cells[0][3] = i128::MAX.to_string();
        grid.cells[1][3] = "1".into();
        grid.cells[2][1] = "999999999999999999999999999999999999999999".into();
        let check = grid.check();
        assert_eq!((check.sum_b, check.sum_d), (None, None));
        assert_eq!(check.status, STATUS_NEED_TOTAL);

        let summary = grid.summary();
        assert_eq!((summary.rows_b, summary.rows_d), (1, 2));
        assert_eq!(summary.lines()[2], "Sum B: out of range");
    }
}
