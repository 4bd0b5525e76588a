//! score/music-harmony/src/violation.rs
//! Rule violations as a tagged variant rather than a string dictionary (§9 design note).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::voice::Voice;

/// Whether a violation disqualifies a candidate outright or merely contributes to its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Hard,
    Soft,
}

/// A single rule firing against a voicing or a pair of consecutive voicings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ViolationKind {
    #[error("{0} out of range")]
    OutOfRange(Voice),
    #[error("{0} crossed below {1}")]
    VoiceCrossing(Voice, Voice),
    #[error("spacing between {0} and {1} exceeds an octave")]
    InvalidSpacing(Voice, Voice),
    #[error("parallel fifth between {0} and {1}")]
    ParallelFifth(Voice, Voice),
    #[error("parallel octave between {0} and {1}")]
    ParallelOctave(Voice, Voice),
    #[error("hidden fifth between {0} and {1}")]
    HiddenFifth(Voice, Voice),
    #[error("hidden octave between {0} and {1}")]
    HiddenOctave(Voice, Voice),
    #[error("chordal seventh in {0} not resolved downward")]
    SeventhNotResolved(Voice),
    #[error("leading tone in {0} did not ascend")]
    LeadingToneNotResolved(Voice),
    #[error("leading tone in {0} ascended but not to the tonic")]
    LeadingToneMisresolved(Voice),
}

impl ViolationKind {
    /// The rule's name, used as the `rule_name` field the spec's `Violation` shape calls for.
    #[must_use]
    pub const fn rule_name(self) -> &'static str {
        match self {
            ViolationKind::OutOfRange(_) => "range",
            ViolationKind::VoiceCrossing(..) => "voice_order",
            ViolationKind::InvalidSpacing(..) => "spacing",
            ViolationKind::ParallelFifth(..) => "parallel_fifth",
            ViolationKind::ParallelOctave(..) => "parallel_octave",
            ViolationKind::HiddenFifth(..) => "hidden_fifth",
            ViolationKind::HiddenOctave(..) => "hidden_octave",
            ViolationKind::SeventhNotResolved(_) => "seventh_resolution",
            ViolationKind::LeadingToneNotResolved(_) => "leading_tone_resolution",
            ViolationKind::LeadingToneMisresolved(_) => "leading_tone_resolution",
        }
    }
}

/// A rule firing plus its severity and rendered description (the §3 `Violation` record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub severity: Severity,
}

impl Violation {
    #[must_use]
    pub fn hard(kind: ViolationKind) -> Self {
        Self { kind, severity: Severity::Hard }
    }

    #[must_use]
    pub fn soft(kind: ViolationKind) -> Self {
        Self { kind, severity: Severity::Soft }
    }

    #[must_use]
    pub fn is_hard(self) -> bool {
        matches!(self.severity, Severity::Hard)
    }

    #[must_use]
    pub fn description(self) -> String {
        self.kind.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_violation_reports_hard_severity() {
        let v = Violation::hard(ViolationKind::OutOfRange(Voice::Soprano));
        assert!(v.is_hard());
        assert_eq!(v.kind.rule_name(), "range");
    }

    #[test]
    fn description_renders_via_display() {
        let v = Violation::hard(ViolationKind::ParallelFifth(Voice::Soprano, Voice::Tenor));
        assert_eq!(v.description(), "parallel fifth between soprano and tenor");
    }
}
