//! Dice sources for the engines.
//!
//! Every roll the engines make goes through a single [`DiceSource`]
//! supplied by the caller. Two implementations ship with the crate:
//!
//! - [`GemRng`]: seeded ChaCha8 stream, deterministic and checkpointable
//! - [`ScriptedDice`]: replays a fixed list of values, for tests and replays
//!
//! ```
//! use gem_appraisal::core::{DiceSource, GemRng};
//!
//! let mut a = GemRng::new(42);
//! let mut b = GemRng::new(42);
//!
//! // Same seed, same rolls
//! assert_eq!(a.roll(20), b.roll(20));
//! ```

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniformly distributed integer rolls.
///
/// The engines only ever ask for inclusive ranges, so implementing
/// `roll_range` is enough.
pub trait DiceSource {
    /// Roll an integer in `low..=high`.
    fn roll_range(&mut self, low: u32, high: u32) -> u32;

    /// Roll a single die with `sides` faces (`1..=sides`).
    fn roll(&mut self, sides: u32) -> u32 {
        self.roll_range(1, sides)
    }

    /// Roll percentile dice (`1..=100`).
    fn percentile(&mut self) -> u32 {
        self.roll(100)
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).roll_range(low, high)
    }
}

/// Deterministic seeded dice.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
/// Context streams let a caller keep catalog rolls separate from
/// appraisal rolls without disturbing either sequence.
#[derive(Clone, Debug)]
pub struct GemRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GemRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GemRngState {
        GemRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GemRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GemRng {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..=high)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Dice that replay a fixed sequence.
///
/// Each scripted value is clamped into the requested range. Once the
/// script runs out every roll returns the range's low end and
/// [`ScriptedDice::is_exhausted`] reports `true`.
///
/// ```
/// use gem_appraisal::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([4, 12]);
/// assert_eq!(dice.roll(10), 4);
/// assert_eq!(dice.roll(12), 12);
/// assert!(dice.is_exhausted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    script: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedDice {
    /// Create dice that will return `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: values.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of values consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        match self.script.pop_front() {
            Some(value) => {
                self.consumed += 1;
                value.clamp(low, high.max(low))
            }
            None => low,
        }
    }
}
