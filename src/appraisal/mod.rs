//! Appraisal: perturbing a gem's base value by its quality.
//!
//! The appraiser rolls a d10 and applies the outcome:
//!
//! | Roll | Effect                                   | Roll again? |
//! |------|------------------------------------------|-------------|
//! | 1    | one rung up                              | yes         |
//! | 2    | ×2, "Excellent"                          | no          |
//! | 3    | +10..=60 %, "Good (+r%)"                 | no          |
//! | 4-8  | unchanged, "Average"                     | no          |
//! | 9    | −10..=40 %, "Flawed (-r%)"               | no          |
//! | 10   | one rung down, "Inferior (stepped down)" | yes         |
//!
//! Every intermediate value is clamped into the gem's [`ValueBand`] when
//! one is given. Rolls of 1 and 10 repeat indefinitely in principle; in
//! practice the ladder (or band) saturates and further steps are no-ops.

pub mod quality;

pub use quality::Quality;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::DiceSource;
use crate::ladder::{self, ValueBand};

/// Appraisal die.
pub const APPRAISAL_DIE: u32 = 10;

/// One appraisal roll and where it left the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppraisalStep {
    pub roll: u32,
    pub quality: Quality,
    pub value: i64,
}

/// Result of an appraisal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appraisal {
    /// Value before appraisal.
    pub base_value: i64,
    /// Value after appraisal.
    pub value: i64,
    /// Final quality.
    pub quality: Quality,
    /// Every roll, in order.
    pub steps: SmallVec<[AppraisalStep; 4]>,
}

impl Appraisal {
    /// A pass-through for gems that were not appraised.
    #[must_use]
    pub fn unappraised(base_value: i64) -> Self {
        Self {
            base_value,
            value: base_value,
            quality: Quality::Unappraised,
            steps: SmallVec::new(),
        }
    }

    /// The d10 rolls, in order.
    pub fn rolls(&self) -> impl Iterator<Item = u32> + '_ {
        self.steps.iter().map(|s| s.roll)
    }

    #[must_use]
    pub fn was_appraised(&self) -> bool {
        self.quality != Quality::Unappraised
    }
}

/// Scale `value` by `(100 + pct) / 100`, rounded to the nearest piece.
///
/// Saturates at the `i64` limits.
pub(crate) fn scale_percent(value: i64, pct: i64) -> i64 {
    let scaled = (i128::from(value) * i128::from(100 + pct) + 50).div_euclid(100);
    i64::try_from(scaled).unwrap_or(if scaled < 0 { i64::MIN } else { i64::MAX })
}

/// Appraise a gem of `base` value, keeping it within `band`.
///
/// ```
/// use gem_appraisal::appraisal::{adjust_value, Quality};
/// use gem_appraisal::core::ScriptedDice;
///
/// let mut dice = ScriptedDice::new([2]);
/// let result = adjust_value(1_000, None, &mut dice);
/// assert_eq!(result.value, 2_000);
/// assert_eq!(result.quality, Quality::Excellent);
/// ```
pub fn adjust_value(base: i64, band: Option<&ValueBand>, rng: &mut dyn DiceSource) -> Appraisal {
    let mut value = base;
    let mut steps = SmallVec::new();

    let quality = loop {
        let roll = rng.roll(APPRAISAL_DIE);
        let quality = match roll {
            1 => {
                value = ladder::next_up(value);
                Quality::SteppedUp
            }
            2 => {
                value = value.saturating_mul(2);
                Quality::Excellent
            }
            3 => {
                let bonus_pct = rng.roll_range(10, 60);
                value = scale_percent(value, i64::from(bonus_pct));
                Quality::Good { bonus_pct }
            }
            9 => {
                let penalty_pct = rng.roll_range(10, 40);
                value = scale_percent(value, -i64::from(penalty_pct));
                Quality::Flawed { penalty_pct }
            }
            10 => {
                value = ladder::next_down(value);
                Quality::SteppedDown
            }
            _ => Quality::Average,
        };
        value = ladder::clamp_to(band, value);
        debug!(roll, value, %quality, "appraisal roll");
        steps.push(AppraisalStep { roll, quality, value });

        if !quality.rerolls() {
            break quality;
        }
    };

    Appraisal {
        base_value: base,
        value,
        quality,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GemRng, ScriptedDice};

    fn appraise(base: i64, band: Option<ValueBand>, script: &[u32]) -> Appraisal {
        let mut dice = ScriptedDice::new(script.iter().copied());
        let result = adjust_value(base, band.as_ref(), &mut dice);
        assert!(dice.is_exhausted(), "script not fully consumed");
        result
    }

    #[test]
    fn test_average() {
        let result = appraise(1_000, None, &[4]);
        assert_eq!(result.value, 1_000);
        assert_eq!(result.quality.to_string(), "Average");
        assert_eq!(result.rolls().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_excellent_doubles() {
        let result = appraise(1_000, None, &[2]);
        assert_eq!(result.value, 2_000);
        assert_eq!(result.quality.to_string(), "Excellent");
    }

    #[test]
    fn test_good_bonus() {
        let result = appraise(1_000, None, &[3, 25]);
        assert_eq!(result.value, 1_250);
        assert_eq!(result.quality, Quality::Good { bonus_pct: 25 });
        // Percent draw is not a d10 roll
        assert_eq!(result.rolls().count(), 1);
    }

    #[test]
    fn test_flawed_penalty_rounds() {
        // 155 * 0.67 = 103.85 -> 104
        let result = appraise(155, None, &[9, 33]);
        assert_eq!(result.value, 104);
        assert_eq!(result.quality.to_string(), "Flawed (-33%)");
    }

    #[test]
    fn test_step_up_then_settle() {
        let result = appraise(1_000, None, &[1, 1, 6]);
        assert_eq!(result.value, 10_000);
        assert_eq!(result.quality, Quality::Average);
        assert_eq!(result.rolls().collect::<Vec<_>>(), vec![1, 1, 6]);
        assert_eq!(result.steps[0].quality, Quality::SteppedUp);
        assert_eq!(result.steps[1].value, 10_000);
    }

    #[test]
    fn test_step_down_then_double() {
        let result = appraise(1_500, None, &[10, 2]);
        assert_eq!(result.value, 2_000);
        assert_eq!(result.steps[0].quality, Quality::SteppedDown);
        assert_eq!(result.steps[0].value, 1_000);
    }

    #[test]
    fn test_band_caps_doubling() {
        let band = ValueBand::new(100, 1_500);
        let result = appraise(1_000, Some(band), &[2]);
        assert_eq!(result.value, 1_500);
    }

    #[test]
    fn test_band_floors_step_down() {
        let band = ValueBand::new(1_000, 1_000_000);
        let result = appraise(1_000, Some(band), &[10, 10, 9, 40]);
        // Stuck at the band floor, then -40% clamped back up
        assert_eq!(result.value, 1_000);
        assert_eq!(result.quality, Quality::Flawed { penalty_pct: 40 });
    }

    #[test]
    fn test_top_rung_saturates() {
        let result = appraise(20_000_000, None, &[1, 1, 1, 5]);
        assert_eq!(result.value, 20_000_000);
    }

    #[test]
    fn test_unappraised() {
        let result = Appraisal::unappraised(300);
        assert_eq!(result.value, 300);
        assert!(!result.was_appraised());
        assert_eq!(result.rolls().count(), 0);
    }

    #[test]
    fn test_many_seeds_terminate_in_band() {
        for seed in 0..500 {
            let mut rng = GemRng::new(seed);
            let base = 20_000;
            let band = ValueBand::around(base, 5, 7).unwrap();
            let result = adjust_value(base, Some(&band), &mut rng);
            assert!(band.contains(result.value));
            assert!(!result.quality.rerolls());
            assert_eq!(result.steps.last().map(|s| s.quality), Some(result.quality));
        }
    }

    #[test]
    fn test_scale_percent() {
        assert_eq!(scale_percent(1_000, 10), 1_100);
        assert_eq!(scale_percent(1_000, -40), 600);
        assert_eq!(scale_percent(15, 10), 17); // 16.5 rounds up
        assert_eq!(scale_percent(i64::MAX, 60), i64::MAX);
        assert_eq!(scale_percent(i64::MIN, 60), i64::MIN);
    }

    #[test]
    fn test_huge_base_saturates() {
        let huge = i64::MAX / 2 + 1;

        let excellent = appraise(huge, None, &[2]);
        assert_eq!(excellent.value, i64::MAX);

        let good = appraise(huge, None, &[3, 60]);
        assert_eq!(good.value, i64::MAX);

        let flawed = appraise(huge, None, &[9, 10]);
        assert!(flawed.value < huge);
    }
}
