//! The monetary value ladder.
//!
//! Gem values move along a fixed, strictly increasing sequence of rungs
//! (in silver pieces). "Stepping" a gem up or down means moving to the
//! neighbouring rung, and every gem is confined to a [`ValueBand`] of rungs
//! around its starting value.
//!
//! All lookups are pure functions of the value. Zero and negative values
//! are accepted and sit "below the smallest rung".

use serde::{Deserialize, Serialize};

/// The ladder rungs in silver pieces, smallest first.
pub const RUNGS: [i64; 18] = [
    1,
    5,
    10,
    20,
    100,
    200,
    1_000,
    2_000,
    10_000,
    20_000,
    100_000,
    200_000,
    500_000,
    1_000_000,
    2_000_000,
    5_000_000,
    10_000_000,
    20_000_000,
];

/// Smallest rung.
pub const BOTTOM_RUNG: i64 = RUNGS[0];

/// Largest rung.
pub const TOP_RUNG: i64 = RUNGS[RUNGS.len() - 1];

/// Greatest rung `<= value`, or `None` below the smallest rung.
#[must_use]
pub fn floor(value: i64) -> Option<i64> {
    index_of(value).map(|i| RUNGS[i])
}

/// Ordinal of the floor rung, or `None` below the smallest rung.
#[must_use]
pub fn index_of(value: i64) -> Option<usize> {
    RUNGS.iter().rposition(|&r| r <= value)
}

/// Smallest rung strictly greater than `value`, saturating at the top rung.
#[must_use]
pub fn next_up(value: i64) -> i64 {
    RUNGS
        .iter()
        .copied()
        .find(|&r| r > value)
        .unwrap_or(TOP_RUNG)
}

/// Greatest rung strictly less than `value`, saturating at the bottom rung.
#[must_use]
pub fn next_down(value: i64) -> i64 {
    RUNGS
        .iter()
        .copied()
        .rev()
        .find(|&r| r < value)
        .unwrap_or(BOTTOM_RUNG)
}

/// The rung just below `value`'s floor rung, or 0 when there is none.
///
/// Used to report what a ruined gem was worth one step down.
#[must_use]
pub fn rung_below_floor(value: i64) -> i64 {
    match index_of(value) {
        Some(i) if i > 0 => RUNGS[i - 1],
        _ => 0,
    }
}

/// Clamp `value` into `[lo, hi]` as `max(lo, min(value, hi))`.
#[must_use]
pub fn clamp(value: i64, lo: i64, hi: i64) -> i64 {
    lo.max(value.min(hi))
}

/// Inclusive range of rungs a single gem's value is held within.
///
/// Derived once from the gem's base value before appraisal; every later
/// adjustment to that gem is clamped into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueBand {
    pub min: i64,
    pub max: i64,
}

impl ValueBand {
    /// Create a band from explicit bounds.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Band spanning `below` rungs under and `above` rungs over the floor
    /// rung of `base`, clamped to the ladder ends.
    ///
    /// Returns `None` when `base` is below the smallest rung; such gems are
    /// not band-limited.
    ///
    /// ```
    /// use gem_appraisal::ladder::ValueBand;
    ///
    /// let band = ValueBand::around(1_000, 5, 7).unwrap();
    /// assert_eq!(band.min, 5);
    /// assert_eq!(band.max, 1_000_000);
    /// ```
    #[must_use]
    pub fn around(base: i64, below: usize, above: usize) -> Option<Self> {
        let start = index_of(base)?;
        let lo = start.saturating_sub(below);
        let hi = (start + above).min(RUNGS.len() - 1);
        Some(Self::new(RUNGS[lo], RUNGS[hi]))
    }

    /// Clamp a value into this band.
    #[must_use]
    pub fn clamp(&self, value: i64) -> i64 {
        clamp(value, self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Clamp into an optional band; no band leaves the value alone.
#[must_use]
pub fn clamp_to(band: Option<&ValueBand>, value: i64) -> i64 {
    match band {
        Some(b) => b.clamp(value),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ladder_strictly_increasing() {
        assert!(RUNGS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_floor() {
        assert_eq!(floor(0), None);
        assert_eq!(floor(-5), None);
        assert_eq!(floor(1), Some(1));
        assert_eq!(floor(4), Some(1));
        assert_eq!(floor(1_000), Some(1_000));
        assert_eq!(floor(1_999), Some(1_000));
        assert_eq!(floor(i64::MAX), Some(TOP_RUNG));
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of(0), None);
        assert_eq!(index_of(1), Some(0));
        assert_eq!(index_of(20_000), Some(9));
        assert_eq!(index_of(25_000_000), Some(17));
    }

    #[test]
    fn test_next_up() {
        assert_eq!(next_up(0), 1);
        assert_eq!(next_up(1), 5);
        assert_eq!(next_up(1_500), 2_000);
        assert_eq!(next_up(TOP_RUNG), TOP_RUNG);
    }

    #[test]
    fn test_next_down() {
        assert_eq!(next_down(5), 1);
        assert_eq!(next_down(1_500), 1_000);
        assert_eq!(next_down(1), BOTTOM_RUNG);
        assert_eq!(next_down(0), BOTTOM_RUNG);
    }

    #[test]
    fn test_rung_below_floor() {
        assert_eq!(rung_below_floor(20_000), 10_000);
        assert_eq!(rung_below_floor(25_000), 10_000);
        assert_eq!(rung_below_floor(1), 0);
        assert_eq!(rung_below_floor(0), 0);
    }

    #[test]
    fn test_band_around() {
        let band = ValueBand::around(20_000, 5, 7).unwrap();
        assert_eq!(band, ValueBand::new(100, 10_000_000));

        // Clamped at both ends of the ladder
        let low = ValueBand::around(5, 5, 7).unwrap();
        assert_eq!(low.min, 1);
        assert_eq!(low.max, 10_000);
        let high = ValueBand::around(TOP_RUNG, 5, 7).unwrap();
        assert_eq!(high.max, TOP_RUNG);

        assert_eq!(ValueBand::around(0, 5, 7), None);
    }

    #[test]
    fn test_clamp_to_optional_band() {
        let band = ValueBand::new(10, 100);
        assert_eq!(clamp_to(Some(&band), 500), 100);
        assert_eq!(clamp_to(Some(&band), 1), 10);
        assert_eq!(clamp_to(None, 500), 500);
    }

    proptest! {
        #[test]
        fn prop_clamp_within_bounds(v in -1_000_000_i64..100_000_000, a in 0_i64..50_000_000, b in 0_i64..50_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let c = clamp(v, lo, hi);
            prop_assert!(lo <= c && c <= hi);
        }

        #[test]
        fn prop_next_up_exceeds_value(v in -100_i64..30_000_000) {
            let up = next_up(floor(v).unwrap_or(v));
            prop_assert!(up > v || up == TOP_RUNG);
        }

        #[test]
        fn prop_next_down_below_value(v in -100_i64..30_000_000) {
            let down = next_down(v);
            prop_assert!(down < v || down == BOTTOM_RUNG);
        }

        #[test]
        fn prop_band_contains_floor(v in 1_i64..30_000_000) {
            let band = ValueBand::around(v, 5, 7).unwrap();
            prop_assert!(band.contains(floor(v).unwrap()));
        }
    }
}
