//! Batch outputs. Built once per run and never modified afterwards.

use serde::{Deserialize, Serialize};

use crate::appraisal::Appraisal;
use crate::catalog::ColorNote;
use crate::cutting::CuttingOutcome;
use crate::ladder::ValueBand;
use crate::retainer::Retainer;

use super::plan::GemPlan;

/// Shown in place of a magical property for unappraised gems.
pub const NOT_IDENTIFIED: &str = "Not identified";

/// An appraisal with its lore annotations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GemAppraisal {
    pub appraisal: Appraisal,
    pub magical_property: String,
    pub color_properties: Vec<(ColorNote, String)>,
}

impl GemAppraisal {
    #[must_use]
    pub fn unappraised(base_value: i64) -> Self {
        Self {
            appraisal: Appraisal::unappraised(base_value),
            magical_property: NOT_IDENTIFIED.to_string(),
            color_properties: Vec::new(),
        }
    }

    /// Value after appraisal.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.appraisal.value
    }
}

/// Everything that happened to one gem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GemResult {
    /// 1-based.
    pub index: usize,
    pub plan: GemPlan,
    /// Size-scaled base value in silver.
    pub base_value: i64,
    pub band: Option<ValueBand>,
    pub appraisal: GemAppraisal,
    pub cutting: CuttingOutcome,
    /// Service surcharge for this gem, in silver.
    pub surcharge: i64,
    pub final_value: i64,
}

impl GemResult {
    #[must_use]
    pub fn is_ruined(&self) -> bool {
        self.final_value == 0
    }
}

/// Per-gem results and totals for a batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub category: String,
    pub size_label: String,
    pub size_modifier: f64,
    /// Terms of the retainer used, when the batch was appraised.
    pub retainer: Option<Retainer>,
    pub gems: Vec<GemResult>,
    pub total_surcharge: i64,
    /// Fees charged by this batch. The retainer fee is paid at hire, so
    /// this is the surcharge total.
    pub total_fees: i64,
    pub total_final_value: i64,
    pub ruined_count: usize,
}
