//! hexvibe-tui: terminal UI for HexVibe.
//!
//! Theming in `theme`; layout pieces in `layouts`; key bindings in [keymap];
//! state and view in [state] and [view]. Run with [run_tui].

pub mod keymap;
pub mod layouts;
pub mod run;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use keymap::{Action, resolve};
pub use run::{TuiOptions, run_tui};
pub use state::{Focus, Screen, SessionStorage, TuiState};
pub use view::draw as draw_view;
