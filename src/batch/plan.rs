//! Batch inputs.

use serde::{Deserialize, Serialize};

use crate::catalog::GemKind;
use crate::core::to_sp;

/// One gem to process.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GemPlan {
    pub name: String,
    pub color: String,
    /// Base value in gold, before the size multiplier.
    pub base_gp: f64,
}

impl GemPlan {
    pub fn new(name: impl Into<String>, color: impl Into<String>, base_gp: f64) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            base_gp,
        }
    }

    /// Base value in silver after applying `size_modifier`.
    #[must_use]
    pub fn scaled_value_sp(&self, size_modifier: f64) -> i64 {
        to_sp(self.base_gp * size_modifier)
    }
}

impl From<&GemKind> for GemPlan {
    fn from(kind: &GemKind) -> Self {
        Self::new(kind.name, kind.color, kind.base_gp)
    }
}

/// A batch of gems sharing one size class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Number of gems the caller asked for; must match `gem_plans`.
    pub batch_size: usize,
    pub category: String,
    pub size_label: String,
    pub size_modifier: f64,
    pub gem_plans: Vec<GemPlan>,
    /// Appraise (and offer cutting). Requires an active retainer.
    pub appraise: bool,
    /// Overrides the configured surcharge rate for this batch.
    pub surcharge_rate: Option<f64>,
}

impl BatchRequest {
    /// A batch of `gem_plans` at average size, appraised.
    pub fn new(gem_plans: Vec<GemPlan>) -> Self {
        Self {
            batch_size: gem_plans.len(),
            category: String::new(),
            size_label: "Average".to_string(),
            size_modifier: 1.0,
            gem_plans,
            appraise: true,
            surcharge_rate: None,
        }
    }

    #[must_use]
    pub fn with_size(mut self, label: impl Into<String>, modifier: f64) -> Self {
        self.size_label = label.into();
        self.size_modifier = modifier;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    #[must_use]
    pub fn with_appraisal(mut self, appraise: bool) -> Self {
        self.appraise = appraise;
        self
    }

    #[must_use]
    pub fn with_surcharge_rate(mut self, rate: f64) -> Self {
        self.surcharge_rate = Some(rate);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATEGORIES;

    #[test]
    fn test_scaled_value() {
        let plan = GemPlan::new("Azurite", "opaque, deep blue", 10.0);
        assert_eq!(plan.scaled_value_sp(1.0), 200);
        assert_eq!(plan.scaled_value_sp(0.75), 150);
        assert_eq!(plan.scaled_value_sp(2.0), 400);
    }

    #[test]
    fn test_from_kind() {
        let plan = GemPlan::from(&CATEGORIES[0].gems[0]);
        assert_eq!(plan.name, "Azurite");
        assert_eq!(plan.base_gp, 10.0);
    }

    #[test]
    fn test_request_builder() {
        let request = BatchRequest::new(vec![GemPlan::new("Jade", "green", 100.0)])
            .with_size("Huge", 2.0)
            .with_appraisal(false)
            .with_surcharge_rate(0.2);
        assert_eq!(request.batch_size, 1);
        assert_eq!(request.size_label, "Huge");
        assert!(!request.appraise);
        assert_eq!(request.surcharge_rate, Some(0.2));
    }
}
