//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]**: Split the screen into header, swatches, detail line, footer.
//! - **[panel]**: Bordered panel with inner padded rect (history drawer, logs).
//! - **[style]**: Map palette colors to ratatui [Style](ratatui::style::Style).
//! - **[head]**: Header strip layout and styled header line.
//! - **[input]**: Prompt box block and content line.
//! - **[shortcut]**: Shortcut hint line (below the prompt).
//! - **[swatch]**: One palette slot: fill, hex label, lock marker, index.

mod head;
mod input;
mod panel;
mod shortcut;
mod split;
mod style;
mod swatch;

pub use head::{HEADER_STATUS_READY, HEADER_TITLE, HeadLayout, HeaderTone, block_for_head, header_line, render_header};
pub use input::{INPUT_ICON, INPUT_PADDING_H, INPUT_PLACEHOLDER, block_for_input_bordered, input_line};
pub use panel::{PanelLayout, block_for_panel};
pub use shortcut::{shortcut_hint, shortcut_inner_rect, shortcut_line};
pub use split::{DETAIL_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, MainSplits, bottom_drawer, main_splits, vertical_split};
pub use style::{
    background_style, border_focused_style, border_style, danger_style, hex_to_color, rgb_to_color,
    selected_row_style, success_style, swatch_label_style, swatch_style, text_muted_style, text_style,
    warning_style,
};
pub use swatch::{LOCK_MARKER, UNLOCK_MARKER, render_swatch, swatch_lines};
