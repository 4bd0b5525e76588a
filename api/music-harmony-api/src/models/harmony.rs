//! Request/response DTOs for the four external contracts (§6): Harmonize, HarmonizeMelody,
//! Counterpoint, and CheckErrors.

use serde::{Deserialize, Serialize};

/// A complete four-voice pitch assignment, keyed by the single-letter voice tags used on the
/// wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoicingDto {
    /// Soprano pitch (MIDI integer).
    #[serde(rename = "S")]
    pub s: i32,
    /// Alto pitch.
    #[serde(rename = "A")]
    pub a: i32,
    /// Tenor pitch.
    #[serde(rename = "T")]
    pub t: i32,
    /// Bass pitch.
    #[serde(rename = "B")]
    pub b: i32,
}

/// A two-voice pitch pair, for counterpoint responses (§6: `voices: [{S,B}]`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CounterpointVoicingDto {
    /// Counterpoint pitch (soprano slot, regardless of whether it sits above or below the CF).
    #[serde(rename = "S")]
    pub s: i32,
    /// Cantus-firmus pitch (bass slot).
    #[serde(rename = "B")]
    pub b: i32,
}

/// A voicing with any subset of voices present, accepted by `CheckErrors` (§6: `{S?,A?,T?,B?}`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PartialVoicingDto {
    /// Soprano pitch, if supplied.
    #[serde(rename = "S", default, skip_serializing_if = "Option::is_none")]
    pub s: Option<i32>,
    /// Alto pitch, if supplied.
    #[serde(rename = "A", default, skip_serializing_if = "Option::is_none")]
    pub a: Option<i32>,
    /// Tenor pitch, if supplied.
    #[serde(rename = "T", default, skip_serializing_if = "Option::is_none")]
    pub t: Option<i32>,
    /// Bass pitch, if supplied.
    #[serde(rename = "B", default, skip_serializing_if = "Option::is_none")]
    pub b: Option<i32>,
}

/// Request for `Harmonize`: realize upper voices over a fixed bass line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarmonizeRequest {
    /// Bass pitches, one per step.
    pub bass_line: Vec<i32>,
    /// Chord quality per step (lowercase tags from §3); defaults to major when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord_types: Option<Vec<String>>,
    /// Beam width override; defaults to the solver's own default (10) when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beam_width: Option<u32>,
}

/// Response for `Harmonize`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarmonizeResponse {
    /// Whether the solve produced a result (it always does; `false` only on `InputEmpty` or
    /// `InvalidSpec`).
    pub success: bool,
    /// Chosen voicing per step.
    pub voices: Vec<VoicingDto>,
    /// Rendered rationale text.
    pub explanations: String,
    /// Error message, set only when `success` is `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request for `HarmonizeMelody`: realize bass/alto/tenor under a fixed soprano line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarmonizeMelodyRequest {
    /// Soprano pitches, one per step.
    pub melody: Vec<i32>,
    /// Chord quality per step; defaults to major when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord_types: Option<Vec<String>>,
}

/// Response for `HarmonizeMelody`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarmonizeMelodyResponse {
    /// Whether harmonization succeeded.
    pub success: bool,
    /// Chosen voicing per step.
    pub voices: Vec<VoicingDto>,
}

/// Request for `Counterpoint`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CounterpointRequest {
    /// Fixed cantus-firmus pitches.
    pub cantus_firmus: Vec<i32>,
    /// Whether the counterpoint voice sits above (`true`) or below (`false`) the CF.
    pub above: bool,
    /// Species (1-5); only species 1 is implemented.
    pub species: u8,
}

/// Response for `Counterpoint`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CounterpointResponse {
    /// Whether the species was implemented and a solution was produced.
    pub success: bool,
    /// Counterpoint/CF pitch pairs, one per step.
    pub voices: Vec<CounterpointVoicingDto>,
    /// Error message, set only when `success` is `false` (e.g. an unimplemented species).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request for `CheckErrors`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckErrorsRequest {
    /// The passage to audit, one (possibly partial) voicing per step.
    pub voices: Vec<PartialVoicingDto>,
}

/// One located error entry in a `CheckErrors` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEntryDto {
    /// Zero-indexed step at which the error occurs.
    pub step: usize,
    /// Error category (`"range"`, `"voice_crossing"`, `"spacing"`, `"parallelism"`, ...).
    #[serde(rename = "type")]
    pub error_type: String,
    /// Voice tag the error applies to, when it is voice-specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    /// Offending pitch, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<i32>,
    /// Human-readable description.
    pub description: String,
}

/// Response for `CheckErrors`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckErrorsResponse {
    /// Whether the audit ran to completion (always `true` unless the input itself was invalid).
    pub success: bool,
    /// Every error found.
    pub errors: Vec<ErrorEntryDto>,
    /// Best-effort corrected passage (range violations clamped; other error types left as-is).
    pub corrected: Vec<VoicingDto>,
}
