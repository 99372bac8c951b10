//! Callbacks a presentation layer supplies to drive a batch.
//!
//! The pipeline calls these synchronously at fixed points and waits for
//! them to return. Observers own their own state; they cannot reach into
//! the engine's.

use crate::cutting::SuperbStep;
use crate::retainer::Retainer;

use super::plan::GemPlan;
use super::result::GemAppraisal;

/// Fired as each gem enters the pipeline.
#[derive(Clone, Copy, Debug)]
pub struct GemStartContext<'a> {
    /// 1-based.
    pub index: usize,
    pub total: usize,
    pub plan: &'a GemPlan,
    pub size_label: &'a str,
    pub size_modifier: f64,
    /// Size-scaled base value in silver.
    pub base_value: i64,
}

/// Fired once a gem has been appraised (or passed through unappraised).
#[derive(Clone, Copy, Debug)]
pub struct GemAppraisalContext<'a> {
    pub index: usize,
    pub total: usize,
    pub plan: &'a GemPlan,
    pub size_label: &'a str,
    pub size_modifier: f64,
    pub base_value: i64,
    pub appraisal: &'a GemAppraisal,
    pub retainer: Option<&'a Retainer>,
}

/// Decision and observation points of a batch run.
///
/// Every method has a default: observations do nothing, and every
/// decision is "no".
pub trait BatchObserver {
    fn on_gem_start(&mut self, _ctx: &GemStartContext<'_>) {}

    fn on_appraisal(&mut self, _ctx: &GemAppraisalContext<'_>) {}

    /// Hand this appraised gem to the cutter?
    fn cut_decision(&mut self, _ctx: &GemAppraisalContext<'_>) -> bool {
        false
    }

    /// Let a Superb cutter make another attempt?
    fn superb_continue(&mut self, _step: &SuperbStep) -> bool {
        false
    }
}

/// Observes nothing, declines everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl BatchObserver for NoopObserver {}

/// Cuts every gem it is offered and lets a Superb cutter keep going for
/// up to `max_superb_attempts` attempts per gem.
#[derive(Clone, Copy, Debug)]
pub struct AutoCutter {
    pub max_superb_attempts: usize,
}

impl AutoCutter {
    #[must_use]
    pub fn new(max_superb_attempts: usize) -> Self {
        Self { max_superb_attempts }
    }
}

impl BatchObserver for AutoCutter {
    fn cut_decision(&mut self, _ctx: &GemAppraisalContext<'_>) -> bool {
        true
    }

    fn superb_continue(&mut self, step: &SuperbStep) -> bool {
        step.attempt < self.max_superb_attempts
    }
}
