//! Chrome color constants for the CLI and TUI.
//!
//! Colors follow the Tailwind slate and indigo scales.
//! Defined as (R, G, B) tuples for use with any terminal color library.

/// Light theme
pub mod light {
    /// Background: #f8fafc (slate-50)
    pub const BACKGROUND: (u8, u8, u8) = (248, 250, 252);
    /// Panel surface: #ffffff
    pub const SURFACE: (u8, u8, u8) = (255, 255, 255);
    /// Foreground text: #1e293b (slate-800)
    pub const FOREGROUND: (u8, u8, u8) = (30, 41, 59);
    /// Muted foreground: #64748b (slate-500)
    pub const MUTED_FG: (u8, u8, u8) = (100, 116, 139);
    /// Border: #e2e8f0 (slate-200)
    pub const BORDER: (u8, u8, u8) = (226, 232, 240);
    /// Primary / accent: #4f46e5 (indigo-600)
    pub const PRIMARY: (u8, u8, u8) = (79, 70, 229);
    /// Danger: #ef4444
    pub const DANGER: (u8, u8, u8) = (239, 68, 68);
    /// Success: #22c55e
    pub const SUCCESS: (u8, u8, u8) = (34, 197, 94);
    /// Warning (AI loading): #f59e0b (amber-500)
    pub const WARNING: (u8, u8, u8) = (245, 158, 11);
}

/// Dark theme
pub mod dark {
    /// Background: #020617 (slate-950)
    pub const BACKGROUND: (u8, u8, u8) = (2, 6, 23);
    /// Panel surface: #0f172a (slate-900)
    pub const SURFACE: (u8, u8, u8) = (15, 23, 42);
    /// Foreground text: #ffffff
    pub const FOREGROUND: (u8, u8, u8) = (255, 255, 255);
    /// Muted foreground: #94a3b8 (slate-400)
    pub const MUTED_FG: (u8, u8, u8) = (148, 163, 184);
    /// Border: #1e293b (slate-800)
    pub const BORDER: (u8, u8, u8) = (30, 41, 59);
    /// Primary / accent: #6366f1 (indigo-500)
    pub const PRIMARY: (u8, u8, u8) = (99, 102, 241);
    /// Danger: #ef4444
    pub const DANGER: (u8, u8, u8) = (239, 68, 68);
    /// Success: #22c55e
    pub const SUCCESS: (u8, u8, u8) = (34, 197, 94);
    /// Warning (AI loading): #f59e0b (amber-500)
    pub const WARNING: (u8, u8, u8) = (245, 158, 11);
}
