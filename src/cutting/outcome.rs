//! Cutting results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::format_sp;
use crate::skill::CutterSkill;

/// What a single cutting attempt did to the gem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptResult {
    Improved,
    NoChange,
    Ruined,
}

impl fmt::Display for AttemptResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AttemptResult::Improved => "Gem improved! (+100%)",
            AttemptResult::NoChange => "No change.",
            AttemptResult::Ruined => "Gem ruined!",
        })
    }
}

/// Overall verdict of a cutting session, as reported to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutVerdict {
    /// The gem was already at or above the cap; nothing was attempted.
    CapExceeded { cap_sp: i64 },
    /// Result of the last attempt.
    Attempt(AttemptResult),
    /// A Superb session stopped because the gem reached the cap.
    CapReached,
    /// The gem was never appraised, so it could not be cut.
    NotAppraised,
    /// The gem was appraised but the owner chose not to cut.
    Declined,
}

impl fmt::Display for CutVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutVerdict::CapExceeded { cap_sp } => write!(
                f,
                "Cutting not permitted for gems valued at {} or more.",
                format_sp(*cap_sp)
            ),
            CutVerdict::Attempt(result) => result.fmt(f),
            CutVerdict::CapReached => {
                f.write_str("Further cutting not permitted: gem has reached the cutting cap.")
            }
            CutVerdict::NotAppraised => f.write_str("Cutting not permitted (no appraisal)."),
            CutVerdict::Declined => f.write_str("No gemcutting performed after appraisal."),
        }
    }
}

/// One attempt of a Superb cutter's session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperbStep {
    /// 1-based position of the gem in its batch.
    pub gem_index: usize,
    pub gem_name: String,
    /// 1-based attempt number within this session.
    pub attempt: usize,
    pub roll: u32,
    pub result: AttemptResult,
    /// Gem value after this attempt.
    pub value: i64,
    pub cap_reached: bool,
    pub die_size: u32,
}

impl SuperbStep {
    /// Whether the session must end after this attempt.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.result == AttemptResult::Ruined || self.cap_reached
    }
}

impl fmt::Display for SuperbStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Superb cut] d{}={}: {}; current value: {}",
            self.die_size,
            self.roll,
            self.result,
            format_sp(self.value)
        )
    }
}

/// Result of handing a gem to a cutter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuttingOutcome {
    /// Whether any attempt was made.
    pub performed: bool,
    pub verdict: CutVerdict,
    /// Skill used, if a cutter was involved.
    pub skill: Option<CutterSkill>,
    /// The last cutting die rolled.
    pub die_roll: Option<u32>,
    /// For a ruined gem, the rung below its pre-ruin floor rung; else 0.
    pub ruined_prev_rung: i64,
    /// Every attempt of a Superb session, in order. Empty for other tiers.
    pub superb_steps: Vec<SuperbStep>,
    pub final_value: i64,
}

impl CuttingOutcome {
    /// An outcome where no attempt was made and the value is untouched.
    #[must_use]
    pub fn not_performed(verdict: CutVerdict, skill: Option<CutterSkill>, value: i64) -> Self {
        Self {
            performed: false,
            verdict,
            skill,
            die_roll: None,
            ruined_prev_rung: 0,
            superb_steps: Vec::new(),
            final_value: value,
        }
    }

    #[must_use]
    pub fn is_ruined(&self) -> bool {
        self.verdict == CutVerdict::Attempt(AttemptResult::Ruined)
    }
}
