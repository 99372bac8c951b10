//! Gem cutting.
//!
//! A cutter rolls their tier's die against a table: low faces double the
//! gem's value (within its band), the top face(s) ruin it, anything else
//! leaves it alone. Shaky, Fair and Good cutters get one attempt. Superb
//! cutters keep going for as long as the caller's decision function says
//! so, stopping on their own only when the gem is ruined or reaches the
//! cutting cap.
//!
//! Gems already at or above the cap are handed back untouched.

pub mod engine;
pub mod outcome;

pub use engine::{cut, stop_after_first, AttemptTable, CutRequest};
pub use outcome::{AttemptResult, CutVerdict, CuttingOutcome, SuperbStep};
