//! TUI spacing and sizing constants.
//!
//! Use these when building layout or rendering so padding and spacing
//! stay uniform across the main screen, history drawer and logs.

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Left indent for list rows in the history drawer (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Minimum height for dynamic components (e.g. the history drawer).
pub const MIN_COMPONENT_HEIGHT: u16 = 3;

/// Maximum height of popups as fraction of terminal height (0.0–1.0).
pub const POPUP_MAX_HEIGHT_PERCENT: f32 = 0.6;

/// Narrowest swatch that still fits a `#RRGGBB` label with a space either side.
pub const SWATCH_MIN_WIDTH: u16 = 9;

/// Gap between adjacent swatches (columns).
pub const SWATCH_GAP: u16 = 1;

/// Max trace lines kept for the logs screen (older lines dropped).
pub const MAX_TRACE_LINES: usize = 2000;
