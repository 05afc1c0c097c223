pub mod contrast;
pub mod convert;
pub mod harmony;
pub mod random;

pub use contrast::{LUMA_THRESHOLD, contrast_color, luma};
pub use convert::{HexColor, Hsl, Rgb, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use harmony::{HarmonyRule, MAX_HARMONY_COLORS, generate_harmony};
pub use random::{random_hex, random_palette};
