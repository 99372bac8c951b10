//! # gem-appraisal
//!
//! Gem appraisal and gem-cutting rules for tabletop role-playing games.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The engines never prompt. Every decision a player
//!    makes arrives through a callback ([`batch::BatchObserver`]).
//!
//! 2. **Deterministic**: All randomness comes from one caller-supplied
//!    [`core::DiceSource`]. A seeded [`core::GemRng`] replays a session
//!    exactly; [`core::ScriptedDice`] pins individual rolls in tests.
//!
//! 3. **Snapshots, not mutation**: The retainer is an immutable snapshot
//!    replaced wholesale by hire and release.
//!
//! ## Values
//!
//! All values are `i64` silver pieces. 20 sp make 1 gp. Values move along
//! a fixed 18-rung ladder, and each gem is held within a band of rungs
//! around its base value.
//!
//! ## Modules
//!
//! - `core`: Currency, dice, configuration, errors
//! - `ladder`: Value ladder and value bands
//! - `skill`: Cutter skill tiers and skill rolls
//! - `appraisal`: The d10 appraisal state machine
//! - `cutting`: Cutting attempts and the Superb loop
//! - `retainer`: Cutter races, hiring and releasing
//! - `catalog`: Gem tables, sizes, lore
//! - `batch`: The batch pipeline and its observer callbacks

pub mod core;
pub mod ladder;
pub mod skill;
pub mod appraisal;
pub mod cutting;
pub mod retainer;
pub mod catalog;
pub mod batch;

// Re-export commonly used types
pub use crate::core::{
    AppraisalError, Result,
    DiceSource, GemRng, GemRngState, ScriptedDice,
    EngineConfig,
    format_sp, to_sp, SP_PER_GP,
};

pub use crate::ladder::ValueBand;

pub use crate::skill::{CutterSkill, SkillRoll, SkillTier, determine_cutter_skill};

pub use crate::appraisal::{adjust_value, Appraisal, Quality};

pub use crate::cutting::{cut, CutRequest, CutVerdict, CuttingOutcome, SuperbStep};

pub use crate::retainer::{CutterRace, Retainer, RetainerRequest, RetainerState};

pub use crate::batch::{
    AutoCutter, BatchEngine, BatchObserver, BatchRequest, BatchResult,
    GemPlan, GemResult, NoopObserver, process_batch,
};
