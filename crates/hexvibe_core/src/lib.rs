pub mod color;
pub mod db;
pub mod error;
pub mod export;
pub mod history;
pub mod palette;
pub mod session;
pub mod settings;
pub mod storage;

pub use color::{HarmonyRule, HexColor, Hsl, Rgb, contrast_color, generate_harmony, luma, random_hex};
pub use error::{HexVibeError, Result};
pub use export::PaletteExport;
pub use history::{HistoryStore, SavedPalette};
pub use palette::{PaletteSlot, PaletteState};
pub use session::{AiApplied, AiOutcome, AiRequestState, PaletteSession};
pub use settings::Appearance;
pub use storage::{MemoryStorage, SqliteStorage, Storage};
