use rand::Rng;

use super::convert::{HexColor, Rgb};

/// Uniform over all 16,777,216 colors.
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen()).to_hex()
}

/// `count` independent random colors.
pub fn random_palette<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<HexColor> {
    (0..count).map(|_| random_hex(rng)).collect()
}
