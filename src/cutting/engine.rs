//! The cutting state machine.

use std::ops::RangeInclusive;

use tracing::{debug, warn};

use crate::core::DiceSource;
use crate::ladder::{self, ValueBand};
use crate::skill::{self, CutterSkill, SkillTier};

use super::outcome::{AttemptResult, CutVerdict, CuttingOutcome, SuperbStep};

/// Die faces that improve or ruin a gem at a given tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptTable {
    pub improve: RangeInclusive<u32>,
    pub ruin: RangeInclusive<u32>,
}

impl AttemptTable {
    /// The table a cutter of `tier` rolls against.
    #[must_use]
    pub fn for_tier(tier: SkillTier) -> Self {
        let (improve, ruin) = match tier {
            SkillTier::Shaky => (1..=1, 10..=12),
            SkillTier::Fair => (1..=2, 12..=12),
            SkillTier::Good => (1..=3, 12..=12),
            SkillTier::Superb => (1..=5, 20..=20),
        };
        Self { improve, ruin }
    }

    #[must_use]
    pub fn classify(&self, roll: u32) -> AttemptResult {
        if self.improve.contains(&roll) {
            AttemptResult::Improved
        } else if self.ruin.contains(&roll) {
            AttemptResult::Ruined
        } else {
            AttemptResult::NoChange
        }
    }
}

/// Everything a cutter needs to know about the gem in front of them.
#[derive(Clone, Debug)]
pub struct CutRequest {
    /// Current gem value in silver.
    pub value: i64,
    /// Race bonus, used only when the skill has to be rolled.
    pub skill_bonus: u32,
    /// Band the gem's value is held within.
    pub band: Option<ValueBand>,
    /// Skill fixed in advance (a retainer's); rolled fresh when `None`.
    pub skill: Option<CutterSkill>,
    /// Gems at or above this value are not cut.
    pub cap_sp: i64,
    /// 1-based position of the gem in its batch.
    pub gem_index: usize,
    pub gem_name: String,
}

impl CutRequest {
    pub fn new(value: i64, cap_sp: i64) -> Self {
        Self {
            value,
            skill_bonus: 0,
            band: None,
            skill: None,
            cap_sp,
            gem_index: 1,
            gem_name: String::new(),
        }
    }

    #[must_use]
    pub fn with_skill(mut self, skill: CutterSkill) -> Self {
        self.skill = Some(skill);
        self
    }

    #[must_use]
    pub fn with_skill_bonus(mut self, bonus: u32) -> Self {
        self.skill_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_band(mut self, band: Option<ValueBand>) -> Self {
        self.band = band;
        self
    }

    #[must_use]
    pub fn for_gem(mut self, index: usize, name: impl Into<String>) -> Self {
        self.gem_index = index;
        self.gem_name = name.into();
        self
    }
}

/// Running state of a gem under the cutter's hands.
struct Workpiece<'a> {
    value: i64,
    band: Option<&'a ValueBand>,
    ruined_prev_rung: i64,
}

impl Workpiece<'_> {
    fn apply(&mut self, result: AttemptResult) {
        match result {
            AttemptResult::Improved => {
                self.value = ladder::clamp_to(self.band, self.value.saturating_mul(2));
            }
            AttemptResult::Ruined => {
                self.ruined_prev_rung = ladder::rung_below_floor(self.value);
                self.value = 0;
            }
            AttemptResult::NoChange => {}
        }
    }
}

/// Hand a gem to a cutter.
///
/// Shaky, Fair and Good cutters make exactly one attempt. A Superb cutter
/// keeps cutting: after every attempt that neither ruins the gem nor brings
/// it to the cap, `superb_continue` is asked whether to go again.
pub fn cut(
    request: &CutRequest,
    rng: &mut dyn DiceSource,
    superb_continue: &mut dyn FnMut(&SuperbStep) -> bool,
) -> CuttingOutcome {
    if request.value >= request.cap_sp {
        warn!(
            gem = %request.gem_name,
            value = request.value,
            cap = request.cap_sp,
            "gem at or above cutting cap, not cut"
        );
        return CuttingOutcome::not_performed(
            CutVerdict::CapExceeded { cap_sp: request.cap_sp },
            request.skill,
            request.value,
        );
    }

    let skill = request
        .skill
        .unwrap_or_else(|| skill::roll_skill(request.skill_bonus, rng));
    let table = AttemptTable::for_tier(skill.tier);
    let die_size = skill.die_size();
    let mut piece = Workpiece {
        value: request.value,
        band: request.band.as_ref(),
        ruined_prev_rung: 0,
    };

    if !skill.tier.is_open_ended() {
        let roll = rng.roll(die_size);
        let result = table.classify(roll);
        piece.apply(result);
        debug!(gem = %request.gem_name, tier = %skill.tier, roll, %result, value = piece.value, "cutting attempt");

        return CuttingOutcome {
            performed: true,
            verdict: CutVerdict::Attempt(result),
            skill: Some(skill),
            die_roll: Some(roll),
            ruined_prev_rung: piece.ruined_prev_rung,
            superb_steps: Vec::new(),
            final_value: piece.value,
        };
    }

    let mut steps: Vec<SuperbStep> = Vec::new();

    let (last, last_roll) = loop {
        let roll = rng.roll(die_size);
        let result = table.classify(roll);
        piece.apply(result);

        let step = SuperbStep {
            gem_index: request.gem_index,
            gem_name: request.gem_name.clone(),
            attempt: steps.len() + 1,
            roll,
            result,
            value: piece.value,
            cap_reached: piece.value > 0 && piece.value >= request.cap_sp,
            die_size,
        };
        debug!(gem = %request.gem_name, attempt = step.attempt, roll, %result, value = piece.value, "superb attempt");

        let stop = step.is_final() || !superb_continue(&step);
        steps.push(step);
        if stop {
            break (result, roll);
        }
    };

    let verdict = if piece.value > 0 && piece.value >= request.cap_sp {
        CutVerdict::CapReached
    } else if piece.value == 0 && last != AttemptResult::Ruined {
        // Doubling a worthless gem leaves it worthless
        CutVerdict::Attempt(AttemptResult::NoChange)
    } else {
        CutVerdict::Attempt(last)
    };

    CuttingOutcome {
        performed: true,
        verdict,
        skill: Some(skill),
        die_roll: Some(last_roll),
        ruined_prev_rung: piece.ruined_prev_rung,
        superb_steps: steps,
        final_value: piece.value,
    }
}

/// Decision function that never asks for another Superb attempt.
pub fn stop_after_first(_: &SuperbStep) -> bool {
    false
}
