//! Cutter skill tiers and how a cutter's tier is determined.
//!
//! A tier is either rolled on percentile dice (plus a race bonus, capped at
//! 100) or declared outright. Each tier fixes the die used for cutting
//! attempts: the three lower tiers cut with a d12, Superb with a d20.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AppraisalError, DiceSource, Result};

/// Skill tiers, lowest ability first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillTier {
    Shaky,
    Fair,
    Good,
    Superb,
}

impl SkillTier {
    /// All tiers in ascending order.
    pub const ALL: [SkillTier; 4] = [
        SkillTier::Shaky,
        SkillTier::Fair,
        SkillTier::Good,
        SkillTier::Superb,
    ];

    /// Die rolled for each cutting attempt at this tier.
    #[must_use]
    pub const fn die_size(self) -> u32 {
        match self {
            SkillTier::Superb => 20,
            _ => 12,
        }
    }

    /// Tier for a modified percentile total.
    ///
    /// 01-30 Shaky, 31-60 Fair, 61-90 Good, 91-100 Superb.
    #[must_use]
    pub const fn from_percentile(total: u32) -> Self {
        match total {
            0..=30 => SkillTier::Shaky,
            31..=60 => SkillTier::Fair,
            61..=90 => SkillTier::Good,
            _ => SkillTier::Superb,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SkillTier::Shaky => "Shaky",
            SkillTier::Fair => "Fair",
            SkillTier::Good => "Good",
            SkillTier::Superb => "Superb",
        }
    }

    /// Superb cutters keep cutting until told to stop.
    #[must_use]
    pub const fn is_open_ended(self) -> bool {
        matches!(self, SkillTier::Superb)
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillTier {
    type Err = AppraisalError;

    fn from_str(s: &str) -> Result<Self> {
        SkillTier::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppraisalError::UnknownSkillTier(s.to_string()))
    }
}

/// The percentile roll behind a rolled tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRoll {
    /// The d100 as rolled.
    pub raw: u32,
    /// Race bonus added to the roll.
    pub bonus: u32,
    /// `raw + bonus`, capped at 100. This is what the tier was read from.
    pub total: u32,
}

/// A resolved skill tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutterSkill {
    pub tier: SkillTier,
    /// `None` when the tier was declared rather than rolled.
    pub roll: Option<SkillRoll>,
}

impl CutterSkill {
    /// A declared tier, no roll involved.
    #[must_use]
    pub const fn declared(tier: SkillTier) -> Self {
        Self { tier, roll: None }
    }

    #[must_use]
    pub const fn die_size(&self) -> u32 {
        self.tier.die_size()
    }
}

/// Roll a tier on percentile dice plus `bonus`.
pub fn roll_skill(bonus: u32, rng: &mut dyn DiceSource) -> CutterSkill {
    let raw = rng.percentile();
    let total = raw.saturating_add(bonus).min(100);
    let tier = SkillTier::from_percentile(total);
    debug!(raw, bonus, total, %tier, "skill roll");
    CutterSkill {
        tier,
        roll: Some(SkillRoll { raw, bonus, total }),
    }
}

/// Determine a cutter's skill.
///
/// A declared tier label is taken as-is (no dice are rolled); otherwise the
/// tier is rolled with [`roll_skill`]. Fails on an unrecognized label.
pub fn determine_cutter_skill(
    bonus: u32,
    declared: Option<&str>,
    rng: &mut dyn DiceSource,
) -> Result<CutterSkill> {
    match declared {
        Some(label) => Ok(CutterSkill::declared(label.parse()?)),
        None => Ok(roll_skill(bonus, rng)),
    }
}
