//! Appraisal quality labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Quality assigned by an appraisal roll.
///
/// `SteppedUp` and `SteppedDown` only appear mid-appraisal: both call for
/// another roll, so a finished appraisal always ends on one of the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    /// Rolled a 1: moved one rung up, roll again.
    SteppedUp,
    /// Rolled a 2: value doubled.
    Excellent,
    /// Rolled a 3: value raised by `bonus_pct` percent.
    Good { bonus_pct: u32 },
    /// Rolled 4-8: no change.
    Average,
    /// Rolled a 9: value lowered by `penalty_pct` percent.
    Flawed { penalty_pct: u32 },
    /// Rolled a 10: moved one rung down, roll again.
    SteppedDown,
    /// No appraisal was made.
    Unappraised,
}

impl Quality {
    /// Whether this outcome calls for another roll.
    #[must_use]
    pub const fn rerolls(self) -> bool {
        matches!(self, Quality::SteppedUp | Quality::SteppedDown)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::SteppedUp => f.write_str("Flawless (stepped up)"),
            Quality::Excellent => f.write_str("Excellent"),
            Quality::Good { bonus_pct } => write!(f, "Good (+{}%)", bonus_pct),
            Quality::Average => f.write_str("Average"),
            Quality::Flawed { penalty_pct } => write!(f, "Flawed (-{}%)", penalty_pct),
            Quality::SteppedDown => f.write_str("Inferior (stepped down)"),
            Quality::Unappraised => f.write_str("Average (unappraised)"),
        }
    }
}
