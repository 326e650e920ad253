//! Falling-glyph rain: per-column drop positions and their motion.
//!
//! Each terminal column owns one drop. A drop is a head row plus a short
//! trail above it; every tick moves it one row down, and once it has fallen
//! a few rows past the bottom edge it restarts at the top. Columns move in
//! lockstep but start at random phases, which is what makes the effect look
//! unsynchronised.
//!
//! Structure:
//! - Constants: glyph set and drop geometry
//! - Types: [`Rain`] (offsets) and [`Shade`] (what a cell shows)
//! - Pure functions: advance, cell classification
//! - Randomness is always injected as `&mut impl Rng`

use rand::Rng;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Characters a lit cell may show. ASCII only, so indexing bytes is safe.
pub const GLYPHS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%&*";

/// Rows of dim trail drawn above the head.
pub const TRAIL_LEN: u32 = 2;

/// Rows a drop keeps falling below the bottom edge before it wraps to 0.
pub const OVERSHOOT: u32 = 3;

// ============================================================================
// TYPES
// ============================================================================

/// What a single cell of the rain layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// Leading edge of a drop: bright glyph.
    Bright,
    /// Within [`TRAIL_LEN`] rows above the head: dim glyph.
    Dim,
    /// Nothing.
    Blank,
}

/// Column offsets for the rain effect, one per terminal column.
///
/// Invariant: every offset lies in `[0, height + OVERSHOOT]` for the height
/// last passed to [`Rain::seeded`], [`Rain::reseed`] or [`Rain::advance`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rain {
    offsets: Vec<u32>,
}

impl Rain {
    /// Create `width` columns, each starting at a random row in `[0, height)`.
    pub fn seeded(width: u16, height: u16, rng: &mut impl Rng) -> Self {
        let mut rain = Rain::default();
        rain.reseed(width, height, rng);
        rain
    }

    /// Throw away all columns and start `width` fresh ones.
    ///
    /// A zero height is treated as one row.
    pub fn reseed(&mut self, width: u16, height: u16, rng: &mut impl Rng) {
        let height = height.max(1);
        self.offsets = (0..width)
            .map(|_| u32::from(rng.random_range(0..height)))
            .collect();
    }

    /// Move every drop down one row, wrapping past `height + OVERSHOOT`.
    pub fn advance(&mut self, height: u16) {
        let limit = u32::from(height) + OVERSHOOT;
        for offset in &mut self.offsets {
            *offset = if *offset + 1 > limit { 0 } else { *offset + 1 };
        }
    }

    /// Current offsets, left to right.
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    pub fn width(&self) -> usize {
        self.offsets.len()
    }

    /// Classify a cell. Columns outside the rain are always empty.
    pub fn cell(&self, col: u16, row: u16) -> Shade {
        let Some(&head) = self.offsets.get(usize::from(col)) else {
            return Shade::Blank;
        };

        let row = u32::from(row);
        if row == head {
            Shade::Bright
        } else if row < head && row + TRAIL_LEN >= head {
            Shade::Dim
        } else {
            Shade::Blank
        }
    }
}

/// Pick a glyph uniformly from [`GLYPHS`].
pub fn random_glyph(rng: &mut impl Rng) -> char {
    let bytes = GLYPHS.as_bytes();
    char::from(bytes[rng.random_range(0..bytes.len())])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn rain_from(offsets: Vec<u32>) -> Rain {
        Rain { offsets }
    }

    #[test]
    fn seeded_has_one_offset_per_column_within_height() {
        let rain = Rain::seeded(120, 40, &mut rng());
        assert_eq!(rain.width(), 120);
        assert!(rain.offsets().iter().all(|&o| o < 40));
    }

    #[test]
    fn reseed_replaces_length_and_range() {
        let mut rng = rng();
        let mut rain = Rain::seeded(80, 24, &mut rng);
        rain.reseed(10, 3, &mut rng);
        assert_eq!(rain.width(), 10);
        assert!(rain.offsets().iter().all(|&o| o < 3));
    }

    #[test]
    fn reseed_with_zero_height_puts_drops_on_row_zero() {
        let mut rain = Rain::default();
        rain.reseed(5, 0, &mut rng());
        assert_eq!(rain.offsets(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn reseed_with_zero_width_is_empty() {
        let rain = Rain::seeded(0, 24, &mut rng());
        assert_eq!(rain.width(), 0);
    }

    #[test]
    fn advance_moves_each_column_down_one_row() {
        let mut rain = rain_from(vec![0, 5, 10]);
        rain.advance(24);
        assert_eq!(rain.offsets(), &[1, 6, 11]);
    }

    #[test]
    fn advance_wraps_after_overshoot() {
        // height 10: offsets may reach 13, then wrap on the next step
        let mut rain = rain_from(vec![12, 13]);
        rain.advance(10);
        assert_eq!(rain.offsets(), &[13, 0]);
    }

    #[test]
    fn advance_keeps_offsets_in_bounds_forever() {
        let mut rain = Rain::seeded(30, 8, &mut rng());
        for _ in 0..200 {
            rain.advance(8);
            assert!(rain.offsets().iter().all(|&o| o <= 8 + OVERSHOOT));
        }
    }

    #[test]
    fn advance_does_not_overflow_at_max_height() {
        let deepest = u32::from(u16::MAX) + OVERSHOOT;
        let mut rain = rain_from(vec![deepest - 1, deepest]);
        rain.advance(u16::MAX);
        assert_eq!(rain.offsets(), &[deepest, 0]);
    }

    #[test]
    fn cell_head_and_trail() {
        let rain = rain_from(vec![5]);
        assert_eq!(rain.cell(0, 5), Shade::Bright);
        assert_eq!(rain.cell(0, 4), Shade::Dim);
        assert_eq!(rain.cell(0, 3), Shade::Dim);
        assert_eq!(rain.cell(0, 2), Shade::Blank);
        assert_eq!(rain.cell(0, 6), Shade::Blank);
    }

    #[test]
    fn cell_near_top_has_short_trail() {
        let rain = rain_from(vec![1]);
        assert_eq!(rain.cell(0, 0), Shade::Dim);
        assert_eq!(rain.cell(0, 1), Shade::Bright);
    }

    #[test]
    fn cell_outside_columns_is_empty() {
        let rain = rain_from(vec![0]);
        assert_eq!(rain.cell(3, 0), Shade::Blank);
    }

    #[test]
    fn random_glyph_comes_from_glyph_set() {
        let mut rng = rng();
        for _ in 0..500 {
            assert!(GLYPHS.contains(random_glyph(&mut rng)));
        }
    }
}
