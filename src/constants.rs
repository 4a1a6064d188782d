//! Application constants and configuration

pub const APP_NAME: &str = "AnalogTeam Control Panel";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder shown for values nobody has read or configured yet
pub const PLACEHOLDER_VALUE: &str = "N/A";

/// Port names shown on every tab until real per-subsystem tables exist
pub const PORTS_SAMPLE: &[&str] = &[
    "BUCK_PORB",
    "BUCK_RSTB",
    "BUCK_ASYNC_RSTB",
    "BUCK_CAL_REFBAND_H<1:0>",
    "BUCK_CAL_REFCODE_H<9:0>",
    "VREF_EN",
    "ADC_IN0",
    "ADC_IN1",
];

/// Highest addressable CIMA macro index
pub const CIMA_INDEX_MAX: u8 = 63;

/// Rows in the MVM entry grid
pub const MVM_ROWS: usize = 16;
/// Required row total for the active operand column
pub const MVM_TOTAL: i128 = 576;

/// Activity log entries kept in memory
pub const ACTIVITY_LOG_CAPACITY: usize = 200;

pub const TOAST_VISIBLE_SECS: f32 = 3.0;
pub const TOAST_FADE_SECS: f32 = 0.5;
