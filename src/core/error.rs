//! Error type shared by every engine in the crate.

use thiserror::Error;

/// Errors raised by the appraisal and cutting engines.
///
/// All of these are raised before any state is committed; the engines
/// never retry on their own.
#[derive(Error, Debug)]
pub enum AppraisalError {
    #[error("Unknown cutter race: {0}")]
    UnknownRace(String),

    #[error("Retainer months must be between 1 and {max}, got {months}")]
    InvalidMonths { months: u32, max: u32 },

    #[error("Unknown skill tier: {0} (expected Shaky, Fair, Good or Superb)")]
    UnknownSkillTier(String),

    #[error("Batch size mismatch: expected {expected} gem plans, got {actual}")]
    BatchSizeMismatch { expected: usize, actual: usize },

    #[error("Custom batch count must be between 1 and {max}, got {count}")]
    InvalidBatchCount { count: u32, max: u32 },

    #[error("Batch choice must be between 1 and 4, got {0}")]
    InvalidBatchChoice(u32),

    #[error("Custom batch count must be provided for choice 4")]
    MissingBatchCount,

    #[error("Size index out of range: {0}")]
    InvalidSizeIndex(usize),

    #[error("Unknown gem category: {0}")]
    UnknownCategory(String),

    #[error("No gem named {name} in category {category}")]
    UnknownGem { category: String, name: String },

    #[error("An active retainer is required to appraise gems")]
    RetainerRequired,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppraisalError>;
