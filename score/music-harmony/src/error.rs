//! score/music-harmony/src/error.rs
//! Error kinds that can stop a solve or exercise from continuing (§7).

use thiserror::Error;

/// Errors reserved for conditions that prevent the solve from continuing.
///
/// Ordinary candidate rejection during beam pruning is not an error — it is handled entirely
/// inside [`crate::solver`] via the violations/fallback machinery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarmonyError {
    /// No bass/melody/cantus-firmus notes were provided.
    #[error("no input notes provided")]
    InputEmpty,

    /// Every candidate at `step` violated a hard rule and no predecessor existed to clone from.
    /// Only possible at step 0; later steps fall back to the sentinel solution instead.
    #[error("no valid voicing at step {step} and no predecessor to fall back to")]
    NoSolution {
        /// Zero-indexed step at which the search dead-ended.
        step: usize,
    },

    /// A harmonic function or chord quality in the input was malformed or unrecognized.
    #[error("invalid spec at index {index}: {message}")]
    InvalidSpec {
        /// Zero-indexed position of the offending entry.
        index: usize,
        /// Human-readable description of what was wrong.
        message: String,
    },

    /// An exercise was invoked for a combination not yet implemented (e.g. species 2-5).
    #[error("unimplemented: {0}")]
    Unimplemented(String),

    /// An unexpected runtime condition inside constraint evaluation.
    #[error("internal failure: {0}")]
    InternalFailure(String),
}
