//! Four-part tonal-harmony voice-leading solver.
//!
//! Given a bass line and a target chord at each step, [`solver::solve`] runs a beam search over
//! soprano/alto/tenor candidates, pruning anything that breaks a hard voice-leading rule and
//! ranking survivors by the soft preference score in [`constraints`]. [`explain`] turns a chosen
//! step into prose, [`exercises`] wraps the same machinery for melody harmonization, species-1
//! counterpoint, and error correction, and [`harmonic_function`] parses the `Fn{params}` text
//! grammar used to describe a progression's functional roles.

pub mod candidates;
pub mod chord_spec;
pub mod constraints;
pub mod error;
pub mod exercises;
pub mod explain;
pub mod harmonic_function;
pub mod midi;
pub mod solver;
pub mod violation;
pub mod voice;

pub use chord_spec::{ChordQuality, ChordSpec};
pub use error::HarmonyError;
pub use exercises::{
    CounterpointNote, HarmonyErrorReport, correct_errors, find_errors, harmonize_melody,
    solve_counterpoint,
};
pub use explain::{DecisionExplanation, explain_decision, render_full_text, render_text};
pub use harmonic_function::{HarmonicFunction, HarmonicFunctionType, validate_sequence};
pub use solver::{Solution, SolverConfig, solve};
pub use violation::{Severity, Violation, ViolationKind};
pub use voice::{Voice, Voicing};
