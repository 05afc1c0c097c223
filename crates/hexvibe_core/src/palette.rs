//! Fixed-size palette of lockable slots.
//!
//! Every operation is a reducer: it takes `&self` and returns a new
//! [PaletteState], so callers can keep or drop the previous value freely.

use rand::Rng;
use serde::{Deserialize, Serialize};

use hexvibe_constant::app::PALETTE_SIZE;

use crate::color::{HarmonyRule, HexColor, generate_harmony, random_hex};
use crate::error::{HexVibeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteSlot {
    pub hex: HexColor,
    pub locked: bool,
}

impl PaletteSlot {
    pub fn unlocked(hex: HexColor) -> Self {
        Self { hex, locked: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteState {
    slots: Vec<PaletteSlot>,
}

impl PaletteState {
    /// `PALETTE_SIZE` random, unlocked slots.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            slots: (0..PALETTE_SIZE).map(|_| PaletteSlot::unlocked(random_hex(rng))).collect(),
        }
    }

    /// Unlocked slots, one per color, in order.
    pub fn from_colors(colors: impl IntoIterator<Item = HexColor>) -> Self {
        Self {
            slots: colors.into_iter().map(PaletteSlot::unlocked).collect(),
        }
    }

    pub fn slots(&self) -> &[PaletteSlot] {
        &self.slots
    }

    pub fn colors(&self) -> Vec<HexColor> {
        self.slots.iter().map(|s| s.hex).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<&PaletteSlot> {
        self.slots.get(index)
    }

    pub fn locked_count(&self) -> usize {
        self.slots.iter().filter(|s| s.locked).count()
    }

    pub fn toggle_lock(&self, index: usize) -> Result<PaletteState> {
        let len = self.slots.len();
        let mut next = self.clone();
        let slot = next
            .slots
            .get_mut(index)
            .ok_or(HexVibeError::SlotOutOfRange { index, len })?;
        slot.locked = !slot.locked;
        Ok(next)
    }

    /// Fresh random color for every unlocked slot.
    pub fn regenerate<R: Rng + ?Sized>(&self, rng: &mut R) -> PaletteState {
        self.map_unlocked(|_, _| Some(random_hex(rng)))
    }

    /// First locked slot's color, else slot 0.
    pub fn harmony_base(&self) -> Option<HexColor> {
        self.slots
            .iter()
            .find(|s| s.locked)
            .or_else(|| self.slots.first())
            .map(|s| s.hex)
    }

    /// Index-aligned harmony; slots past the harmony's length get random colors.
    pub fn apply_harmony<R: Rng + ?Sized>(&self, rule: HarmonyRule, rng: &mut R) -> PaletteState {
        let Some(base) = self.harmony_base() else {
            return self.clone();
        };
        let harmony = generate_harmony(&base, rule);
        self.map_unlocked(|i, _| Some(harmony.get(i).copied().unwrap_or_else(|| random_hex(rng))))
    }

    /// Index-aligned AI colors. Slots with no matching color keep their value.
    pub fn apply_ai_colors(&self, colors: &[HexColor]) -> PaletteState {
        self.map_unlocked(|i, _| colors.get(i).copied())
    }

    /// Saved colors resized to `PALETTE_SIZE`, all unlocked.
    pub fn with_loaded_colors<R: Rng + ?Sized>(colors: &[HexColor], rng: &mut R) -> PaletteState {
        let slots = (0..PALETTE_SIZE)
            .map(|i| PaletteSlot::unlocked(colors.get(i).copied().unwrap_or_else(|| random_hex(rng))))
            .collect();
        Self { slots }
    }

    /// Replacement for each unlocked slot; `None` keeps the current color.
    fn map_unlocked<F>(&self, mut replace: F) -> PaletteState
    where
        F: FnMut(usize, &PaletteSlot) -> Option<HexColor>,
    {
        let slots = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                if slot.locked {
                    return *slot;
                }
                PaletteSlot {
                    hex: replace(i, slot).unwrap_or(slot.hex),
                    locked: false,
                }
            })
            .collect();
        PaletteState { slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    fn fixed() -> PaletteState {
        PaletteState::from_colors(["#111111", "#222222", "#333333", "#444444", "#555555"].map(hex))
    }

    #[test]
    fn random_has_fixed_size_all_unlocked() {
        let p = PaletteState::random(&mut rng());
        assert_eq!(p.len(), PALETTE_SIZE);
        assert_eq!(p.locked_count(), 0);
    }

    #[test]
    fn toggle_lock_is_pure() {
        let p = fixed();
        let locked = p.toggle_lock(2).unwrap();
        assert!(!p.slots()[2].locked);
        assert!(locked.slots()[2].locked);
        assert!(!locked.toggle_lock(2).unwrap().slots()[2].locked);
    }

    #[test]
    fn toggle_lock_out_of_range() {
        let err = fixed().toggle_lock(5).unwrap_err();
        assert!(matches!(err, HexVibeError::SlotOutOfRange { index: 5, len: 5 }));
    }

    #[test]
    fn regenerate_keeps_locked_slots() {
        let p = fixed().toggle_lock(0).unwrap().toggle_lock(3).unwrap();
        let mut r = rng();
        for _ in 0..20 {
            let next = p.regenerate(&mut r);
            assert_eq!(next.slots()[0], p.slots()[0]);
            assert_eq!(next.slots()[3], p.slots()[3]);
            assert_eq!(next.len(), PALETTE_SIZE);
        }
    }

    #[test]
    fn regenerate_changes_unlocked_slots() {
        let p = fixed();
        let next = p.regenerate(&mut rng());
        assert_ne!(next.colors(), p.colors());
    }

    #[test]
    fn harmony_base_prefers_first_locked() {
        let p = fixed();
        assert_eq!(p.harmony_base(), Some(hex("#111111")));
        let p = p.toggle_lock(3).unwrap().toggle_lock(4).unwrap();
        assert_eq!(p.harmony_base(), Some(hex("#444444")));
    }

    #[test]
    fn harmony_from_unlocked_base() {
        let p = PaletteState::from_colors(["#FF0000", "#000000", "#000000", "#000000", "#000000"].map(hex));
        let next = p.apply_harmony(HarmonyRule::Complementary, &mut rng());
        assert_eq!(next.colors(), generate_harmony(&hex("#FF0000"), HarmonyRule::Complementary));
    }

    #[test]
    fn harmony_skips_locked_and_keeps_flags() {
        let p = PaletteState::from_colors(["#000000", "#FF0000", "#000000", "#000000", "#ABCDEF"].map(hex))
            .toggle_lock(1)
            .unwrap()
            .toggle_lock(4)
            .unwrap();
        let expected = generate_harmony(&hex("#FF0000"), HarmonyRule::Triadic);
        let next = p.apply_harmony(HarmonyRule::Triadic, &mut rng());

        assert_eq!(next.slots()[0], PaletteSlot::unlocked(expected[0]));
        assert_eq!(next.slots()[1], p.slots()[1]);
        assert_eq!(next.slots()[2].hex, expected[2]);
        assert_eq!(next.slots()[3].hex, expected[3]);
        assert_eq!(next.slots()[4], p.slots()[4]);
        assert_eq!(next.locked_count(), 2);
    }

    #[test]
    fn ai_colors_pad_by_keeping_current() {
        let p = fixed().toggle_lock(1).unwrap();
        let next = p.apply_ai_colors(&[hex("#AAAAAA"), hex("#BBBBBB"), hex("#CCCCCC")]);
        assert_eq!(
            next.colors(),
            ["#AAAAAA", "#222222", "#CCCCCC", "#444444", "#555555"].map(hex).to_vec()
        );
        assert!(next.slots()[1].locked);
    }

    #[test]
    fn ai_colors_ignore_extras() {
        let colors: Vec<HexColor> = (0..8).map(|i| hex(&format!("#0000{:02X}", i))).collect();
        let next = fixed().apply_ai_colors(&colors);
        assert_eq!(next.colors(), colors[..PALETTE_SIZE].to_vec());
    }

    #[test]
    fn loaded_colors_resize_and_unlock() {
        let mut r = rng();
        let short = PaletteState::with_loaded_colors(&[hex("#010101"), hex("#020202")], &mut r);
        assert_eq!(short.len(), PALETTE_SIZE);
        assert_eq!(short.colors()[..2], [hex("#010101"), hex("#020202")]);
        assert_eq!(short.locked_count(), 0);

        let long: Vec<HexColor> = (0..7).map(|i| hex(&format!("#{:02X}0000", i))).collect();
        let loaded = PaletteState::with_loaded_colors(&long, &mut r);
        assert_eq!(loaded.colors(), long[..PALETTE_SIZE].to_vec());
    }
}
