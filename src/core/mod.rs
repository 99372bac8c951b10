//! Core engine types: currency, dice, configuration, errors.
//!
//! Everything here is shared by the value, skill, appraisal, cutting,
//! retainer and batch modules.

pub mod config;
pub mod error;
pub mod money;
pub mod rng;

pub use config::EngineConfig;
pub use error::{AppraisalError, Result};
pub use money::{format_sp, round_sp, to_sp, SP_PER_GP};
pub use rng::{DiceSource, GemRng, GemRngState, ScriptedDice};
