//! Retaining a gemcutter.
//!
//! A retainer fixes a cutter's race, term and skill tier for reuse across
//! any number of batches. Hiring charges the whole term up front:
//! `monthly rate × race multiplier × months`.
//!
//! The state is an immutable snapshot. Hiring and releasing return a new
//! snapshot; the old one is never modified, and a new hire replaces the
//! previous contract outright.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{AppraisalError, DiceSource, EngineConfig, Result, SP_PER_GP};
use crate::skill::{self, CutterSkill};

/// Races of gemcutter available for hire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CutterRace {
    Normal,
    Dwarf,
    Gnome,
}

impl CutterRace {
    pub const ALL: [CutterRace; 3] = [CutterRace::Normal, CutterRace::Dwarf, CutterRace::Gnome];

    /// Added to the cutter's percentile skill roll.
    #[must_use]
    pub const fn skill_bonus(self) -> u32 {
        match self {
            CutterRace::Normal => 0,
            CutterRace::Dwarf => 20,
            CutterRace::Gnome => 30,
        }
    }

    /// Multiplier on the monthly retainer rate.
    #[must_use]
    pub const fn fee_multiplier(self) -> i64 {
        match self {
            CutterRace::Normal => 1,
            CutterRace::Dwarf | CutterRace::Gnome => 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CutterRace::Normal => "Normal",
            CutterRace::Dwarf => "Dwarf",
            CutterRace::Gnome => "Gnome",
        }
    }
}

impl fmt::Display for CutterRace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CutterRace {
    type Err = AppraisalError;

    fn from_str(s: &str) -> Result<Self> {
        CutterRace::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppraisalError::UnknownRace(s.to_string()))
    }
}

/// A request to hire a cutter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetainerRequest {
    pub race: String,
    pub months: u32,
    /// Skill tier label, when the cutter's skill is already known.
    pub declared_tier: Option<String>,
}

impl RetainerRequest {
    pub fn new(race: impl Into<String>, months: u32) -> Self {
        Self {
            race: race.into(),
            months,
            declared_tier: None,
        }
    }

    #[must_use]
    pub fn with_declared_tier(mut self, tier: impl Into<String>) -> Self {
        self.declared_tier = Some(tier.into());
        self
    }
}

/// Terms of an active contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retainer {
    pub race: CutterRace,
    pub months: u32,
    /// Total fee charged at hire, in gold.
    pub fee_paid_gp: i64,
    pub skill: CutterSkill,
}

impl Retainer {
    #[must_use]
    pub fn skill_bonus(&self) -> u32 {
        self.race.skill_bonus()
    }

    #[must_use]
    pub fn fee_paid_sp(&self) -> i64 {
        self.fee_paid_gp * SP_PER_GP
    }
}

/// Session retainer snapshot: either idle or holding one contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetainerState {
    contract: Option<Retainer>,
}

/// Result of a successful hire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HireResult {
    /// The new snapshot, replacing the caller's old one.
    pub state: RetainerState,
    pub total_fee_gp: i64,
}

impl RetainerState {
    /// No cutter under contract.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.contract.is_some()
    }

    #[must_use]
    pub fn contract(&self) -> Option<&Retainer> {
        self.contract.as_ref()
    }

    /// Hire a cutter, producing a new snapshot.
    ///
    /// The cutter's tier is taken from the request when declared, otherwise
    /// rolled with the race bonus. Any previous contract is dropped, not
    /// extended.
    pub fn hire(
        &self,
        request: &RetainerRequest,
        config: &EngineConfig,
        rng: &mut dyn DiceSource,
    ) -> Result<HireResult> {
        let race: CutterRace = request.race.parse()?;
        if request.months < 1 || request.months > config.max_retainer_months {
            return Err(AppraisalError::InvalidMonths {
                months: request.months,
                max: config.max_retainer_months,
            });
        }

        let skill = skill::determine_cutter_skill(
            race.skill_bonus(),
            request.declared_tier.as_deref(),
            rng,
        )?;
        let total_fee_gp = config.monthly_fee_gp * race.fee_multiplier() * i64::from(request.months);

        if let Some(previous) = &self.contract {
            info!(race = %previous.race, "previous retainer replaced");
        }
        info!(
            %race,
            months = request.months,
            fee_gp = total_fee_gp,
            tier = %skill.tier,
            rolled = skill.roll.is_some(),
            "retainer hired"
        );

        Ok(HireResult {
            state: RetainerState {
                contract: Some(Retainer {
                    race,
                    months: request.months,
                    fee_paid_gp: total_fee_gp,
                    skill,
                }),
            },
            total_fee_gp,
        })
    }

    /// End the current contract, if any.
    #[must_use]
    pub fn release(&self) -> Self {
        if let Some(contract) = &self.contract {
            info!(race = %contract.race, "retainer released");
        }
        Self::idle()
    }
}
