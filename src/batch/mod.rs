//! Batch processing: appraise, optionally cut, and surcharge a run of gems.
//!
//! A batch is described by a [`BatchRequest`] and driven by a
//! [`BatchObserver`], which sees each gem as it goes and makes the cut /
//! keep-cutting decisions. Gems are processed strictly in order from a
//! single dice stream, so a seeded run is reproducible.
//!
//! ```
//! use gem_appraisal::batch::{process_batch, BatchRequest, GemPlan, NoopObserver};
//! use gem_appraisal::core::ScriptedDice;
//! use gem_appraisal::retainer::RetainerState;
//!
//! let request = BatchRequest::new(vec![GemPlan::new("Jade", "green", 100.0)]).with_appraisal(false);
//! let mut dice = ScriptedDice::default();
//! let result = process_batch(&RetainerState::idle(), &request, &mut dice, &mut NoopObserver).unwrap();
//! assert_eq!(result.total_final_value, 2_000);
//! assert_eq!(result.total_surcharge, 0);
//! ```

pub mod observer;
pub mod pipeline;
pub mod plan;
pub mod result;

pub use observer::{AutoCutter, BatchObserver, GemAppraisalContext, GemStartContext, NoopObserver};
pub use pipeline::{process_batch, BatchEngine};
pub use plan::{BatchRequest, GemPlan};
pub use result::{BatchResult, GemAppraisal, GemResult, NOT_IDENTIFIED};
