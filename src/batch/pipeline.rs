//! The batch pipeline.

use tracing::{debug, info};

use crate::appraisal;
use crate::catalog::{GemLore, StandardLore};
use crate::core::{round_sp, AppraisalError, DiceSource, EngineConfig, Result};
use crate::cutting::{self, CutRequest, CutVerdict, CuttingOutcome, SuperbStep};
use crate::ladder::ValueBand;
use crate::retainer::RetainerState;

use super::observer::{BatchObserver, GemAppraisalContext, GemStartContext};
use super::plan::BatchRequest;
use super::result::{BatchResult, GemAppraisal, GemResult};

/// Runs batches of gems through appraisal and cutting.
pub struct BatchEngine {
    config: EngineConfig,
    lore: Box<dyn GemLore>,
}

impl Default for BatchEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl BatchEngine {
    /// Create an engine with the standard lore tables.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            lore: Box::new(StandardLore::new()),
        }
    }

    /// Replace the lore tables used to annotate appraisals.
    #[must_use]
    pub fn with_lore(mut self, lore: Box<dyn GemLore>) -> Self {
        self.lore = lore;
        self
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Process every gem of `request` in order.
    ///
    /// The request is checked before any gem is touched: a size mismatch,
    /// a bad surcharge rate, or appraisal without an active retainer fails
    /// the whole batch.
    pub fn process(
        &self,
        retainer: &RetainerState,
        request: &BatchRequest,
        rng: &mut dyn DiceSource,
        observer: &mut dyn BatchObserver,
    ) -> Result<BatchResult> {
        if request.gem_plans.len() != request.batch_size {
            return Err(AppraisalError::BatchSizeMismatch {
                expected: request.batch_size,
                actual: request.gem_plans.len(),
            });
        }
        let rate = request.surcharge_rate.unwrap_or(self.config.surcharge_rate);
        if !(0.0..=1.0).contains(&rate) {
            return Err(AppraisalError::InvalidConfig(format!(
                "surcharge_rate must be within 0..=1, got {}",
                rate
            )));
        }
        let contract = if request.appraise {
            Some(retainer.contract().ok_or(AppraisalError::RetainerRequired)?)
        } else {
            None
        };

        info!(
            gems = request.batch_size,
            size = %request.size_label,
            appraise = request.appraise,
            "batch started"
        );

        let total = request.batch_size;
        let cap_sp = self.config.cutting_cap_sp();
        let mut gems = Vec::with_capacity(total);

        for (i, plan) in request.gem_plans.iter().enumerate() {
            let index = i + 1;
            let base_value = plan.scaled_value_sp(request.size_modifier);
            observer.on_gem_start(&GemStartContext {
                index,
                total,
                plan,
                size_label: &request.size_label,
                size_modifier: request.size_modifier,
                base_value,
            });

            let band = ValueBand::around(base_value, self.config.band_below, self.config.band_above);

            let gem_appraisal = if contract.is_some() {
                GemAppraisal {
                    appraisal: appraisal::adjust_value(base_value, band.as_ref(), rng),
                    magical_property: self.lore.magical_property(&plan.name),
                    color_properties: self.lore.color_properties(&plan.color),
                }
            } else {
                GemAppraisal::unappraised(base_value)
            };

            let ctx = GemAppraisalContext {
                index,
                total,
                plan,
                size_label: &request.size_label,
                size_modifier: request.size_modifier,
                base_value,
                appraisal: &gem_appraisal,
                retainer: contract,
            };
            observer.on_appraisal(&ctx);

            let cutting = match contract {
                None => CuttingOutcome::not_performed(CutVerdict::NotAppraised, None, gem_appraisal.value()),
                Some(contract) if !observer.cut_decision(&ctx) => CuttingOutcome::not_performed(
                    CutVerdict::Declined,
                    Some(contract.skill),
                    gem_appraisal.value(),
                ),
                Some(contract) => {
                    let cut_request = CutRequest::new(gem_appraisal.value(), cap_sp)
                        .with_skill(contract.skill)
                        .with_skill_bonus(contract.skill_bonus())
                        .with_band(band)
                        .for_gem(index, plan.name.as_str());
                    cutting::cut(&cut_request, rng, &mut |step: &SuperbStep| observer.superb_continue(step))
                }
            };

            let (final_value, surcharge) = if contract.is_some() {
                let basis = if !cutting.performed {
                    gem_appraisal.value()
                } else if cutting.final_value > 0 {
                    cutting.final_value
                } else {
                    cutting.ruined_prev_rung
                };
                (cutting.final_value, round_sp(basis as f64 * rate))
            } else {
                (base_value, 0)
            };

            debug!(
                index,
                gem = %plan.name,
                base_value,
                appraised = gem_appraisal.value(),
                final_value,
                surcharge,
                cutting = %cutting.verdict,
                "gem processed"
            );

            gems.push(GemResult {
                index,
                plan: plan.clone(),
                base_value,
                band,
                appraisal: gem_appraisal,
                cutting,
                surcharge,
                final_value,
            });
        }

        let total_surcharge = saturating_total(gems.iter().map(|g| g.surcharge));
        let total_final_value = saturating_total(gems.iter().map(|g| g.final_value));
        let ruined_count = gems.iter().filter(|g| g.is_ruined()).count();

        info!(
            gems = gems.len(),
            total_final_value,
            total_surcharge,
            ruined_count,
            "batch finished"
        );

        Ok(BatchResult {
            category: request.category.clone(),
            size_label: request.size_label.clone(),
            size_modifier: request.size_modifier,
            retainer: contract.cloned(),
            gems,
            total_surcharge,
            total_fees: total_surcharge,
            total_final_value,
            ruined_count,
        })
    }
}

fn saturating_total(values: impl Iterator<Item = i64>) -> i64 {
    values.fold(0, i64::saturating_add)
}

/// Process a batch with the default engine.
pub fn process_batch(
    retainer: &RetainerState,
    request: &BatchRequest,
    rng: &mut dyn DiceSource,
    observer: &mut dyn BatchObserver,
) -> Result<BatchResult> {
    BatchEngine::default().process(retainer, request, rng, observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{AutoCutter, GemPlan, NoopObserver};
    use crate::core::ScriptedDice;
    use crate::retainer::RetainerRequest;

    fn retainer(tier: &str) -> RetainerState {
        let mut dice = ScriptedDice::default();
        RetainerState::idle()
            .hire(
                &RetainerRequest::new("Normal", 1).with_declared_tier(tier),
                &EngineConfig::default(),
                &mut dice,
            )
            .unwrap()
            .state
    }

    #[test]
    fn test_unappraised_pass_through() {
        let request = BatchRequest::new(vec![GemPlan::new("Jade", "light green", 100.0)]).with_appraisal(false);
        let mut dice = ScriptedDice::default();
        let result = process_batch(&RetainerState::idle(), &request, &mut dice, &mut NoopObserver).unwrap();

        let gem = &result.gems[0];
        assert_eq!(gem.base_value, 2_000);
        assert_eq!(gem.final_value, 2_000);
        assert_eq!(gem.surcharge, 0);
        assert_eq!(gem.appraisal.appraisal.quality.to_string(), "Average (unappraised)");
        assert_eq!(gem.cutting.verdict, CutVerdict::NotAppraised);
        assert!(result.retainer.is_none());
        assert_eq!(dice.consumed(), 0);
    }

    #[test]
    fn test_appraisal_requires_retainer() {
        let request = BatchRequest::new(vec![GemPlan::new("Jade", "green", 100.0)]);
        let mut dice = ScriptedDice::default();
        let err = process_batch(&RetainerState::idle(), &request, &mut dice, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, AppraisalError::RetainerRequired));
    }

    #[test]
    fn test_size_mismatch() {
        let request = BatchRequest::new(vec![GemPlan::new("Jade", "green", 100.0)]).with_batch_size(5);
        let mut dice = ScriptedDice::default();
        let err = process_batch(&retainer("Good"), &request, &mut dice, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, AppraisalError::BatchSizeMismatch { expected: 5, actual: 1 }));
    }

    #[test]
    fn test_declined_cut_surcharges_appraised_value() {
        let request = BatchRequest::new(vec![GemPlan::new("Jade", "light green", 100.0)]);
        let mut dice = ScriptedDice::new([2]);
        let result = process_batch(&retainer("Good"), &request, &mut dice, &mut NoopObserver).unwrap();

        let gem = &result.gems[0];
        assert_eq!(gem.appraisal.value(), 4_000);
        assert_eq!(gem.cutting.verdict, CutVerdict::Declined);
        assert_eq!(gem.final_value, 4_000);
        assert_eq!(gem.surcharge, 400);
        assert_eq!(gem.appraisal.magical_property, "Skill at music and musical instruments");
    }

    #[test]
    fn test_ruined_gem_surcharged_on_previous_rung() {
        // Appraise Average (5), Good cutter rolls 12: ruined
        let request = BatchRequest::new(vec![GemPlan::new("Jade", "green", 1000.0)]);
        let mut dice = ScriptedDice::new([5, 12]);
        let result = process_batch(&retainer("Good"), &request, &mut dice, &mut AutoCutter::new(1)).unwrap();

        let gem = &result.gems[0];
        assert_eq!(gem.final_value, 0);
        // 20,000 sp -> floor 20,000, previous rung 10,000
        assert_eq!(gem.cutting.ruined_prev_rung, 10_000);
        assert_eq!(gem.surcharge, 1_000);
        assert_eq!(result.ruined_count, 1);
    }

    #[test]
    fn test_custom_surcharge_rate() {
        let request = BatchRequest::new(vec![GemPlan::new("Jade", "green", 100.0)]).with_surcharge_rate(0.25);
        let mut dice = ScriptedDice::new([6]);
        let result = process_batch(&retainer("Fair"), &request, &mut dice, &mut NoopObserver).unwrap();
        assert_eq!(result.gems[0].surcharge, 500);
        assert_eq!(result.total_fees, 500);
    }

    #[test]
    fn test_appraisal_context_carries_size() {
        struct SizeCheck(Vec<(f64, f64)>);
        impl BatchObserver for SizeCheck {
            fn on_gem_start(&mut self, ctx: &GemStartContext<'_>) {
                self.0.push((ctx.size_modifier, 0.0));
            }
            fn on_appraisal(&mut self, ctx: &GemAppraisalContext<'_>) {
                if let Some(last) = self.0.last_mut() {
                    last.1 = ctx.size_modifier;
                }
            }
        }

        let request = BatchRequest::new(vec![GemPlan::new("Jade", "green", 100.0)]).with_size("Large", 1.25);
        let mut dice = ScriptedDice::new([5]);
        let mut check = SizeCheck(Vec::new());
        process_batch(&retainer("Fair"), &request, &mut dice, &mut check).unwrap();
        assert_eq!(check.0, vec![(1.25, 1.25)]);
    }

    #[test]
    fn test_huge_gem_does_not_overflow() {
        // 1e17 gp scales to 2e18 sp; a +60% appraisal is clamped to the top rung
        let request = BatchRequest::new(vec![GemPlan::new("Diamond", "clear", 1e17)]);
        let mut dice = ScriptedDice::new([3, 60]);
        let result = process_batch(&retainer("Good"), &request, &mut dice, &mut AutoCutter::new(1)).unwrap();

        let gem = &result.gems[0];
        assert_eq!(gem.appraisal.value(), 20_000_000);
        assert_eq!(gem.cutting.verdict, CutVerdict::CapExceeded { cap_sp: 100_000 });
        assert_eq!(gem.surcharge, 2_000_000);
    }

    #[test]
    fn test_totals_saturate() {
        let plans = (0..5).map(|_| GemPlan::new("Diamond", "clear", 1e17)).collect();
        let request = BatchRequest::new(plans).with_appraisal(false);
        let mut dice = ScriptedDice::default();
        let result = process_batch(&RetainerState::idle(), &request, &mut dice, &mut NoopObserver).unwrap();
        assert_eq!(result.gems[0].final_value, 2_000_000_000_000_000_000);
        assert_eq!(result.total_final_value, i64::MAX);
    }

    #[test]
    fn test_bad_surcharge_rate_rejected() {
        let request = BatchRequest::new(vec![GemPlan::new("Jade", "green", 100.0)]).with_surcharge_rate(-0.1);
        let mut dice = ScriptedDice::default();
        let err = process_batch(&retainer("Fair"), &request, &mut dice, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, AppraisalError::InvalidConfig(_)));
    }
}
