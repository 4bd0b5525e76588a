//! cli/music-cli/src/report.rs
//! Build the JSON DTOs (`music-harmony-api`) and text explanations printed by each subcommand.

use music_harmony::{Solution, Voicing, explain_decision, render_full_text};
use music_harmony_api::{CounterpointVoicingDto, ErrorEntryDto, VoicingDto};

/// Convert a solver [`Voicing`] into the wire DTO used by `Harmonize`/`HarmonizeMelody`.
#[must_use]
pub fn voicing_dto(voicing: Voicing) -> VoicingDto {
    VoicingDto { s: i32::from(voicing.s), a: i32::from(voicing.a), t: i32::from(voicing.t), b: i32::from(voicing.b) }
}

/// Convert a counterpoint note pair into the wire DTO used by `Counterpoint`.
#[must_use]
pub fn counterpoint_dto(note: music_harmony::CounterpointNote) -> CounterpointVoicingDto {
    CounterpointVoicingDto { s: i32::from(note.counterpoint), b: i32::from(note.cantus_firmus) }
}

/// Convert an error-report entry into the wire DTO used by `CheckErrors`.
#[must_use]
pub fn error_entry_dto(step: usize, description: String) -> ErrorEntryDto {
    ErrorEntryDto { step, error_type: classify_error(&description), voice: None, note: None, description }
}

/// Best-effort classification of a rendered violation description into the `type` tag §6 calls
/// for; the description itself (from [`music_harmony::Violation::description`]) remains the
/// authoritative human-readable text.
fn classify_error(description: &str) -> String {
    if description.contains("out of range") {
        "range".to_string()
    } else if description.contains("crossed below") {
        "voice_order".to_string()
    } else if description.contains("spacing") {
        "spacing".to_string()
    } else if description.contains("parallel") {
        "parallelism".to_string()
    } else if description.contains("hidden") {
        "hidden_parallelism".to_string()
    } else if description.contains("seventh") {
        "seventh_resolution".to_string()
    } else if description.contains("leading tone") {
        "leading_tone_resolution".to_string()
    } else {
        "other".to_string()
    }
}

/// Render a solve outcome's winning chain into prose, one measure per step, using the
/// explanation engine (§4.5).
///
/// Takes `chain` — the backtraced lineage from [`music_harmony::SolveOutcome::winning_chain`] —
/// rather than the raw beams, so the explanation for each step describes the voicing that is
/// actually part of the winning path, not just whichever voicing happened to rank first in that
/// step's beam independently.
#[must_use]
pub fn render_solve_explanations(chain: &[Solution], candidates: &[Vec<Solution>]) -> String {
    let mut prev: Option<Voicing> = None;
    let explanations: Vec<_> = chain
        .iter()
        .zip(candidates.iter())
        .enumerate()
        .map(|(step, (chosen, step_candidates))| {
            let explanation = explain_decision(step, chosen, step_candidates, prev);
            prev = Some(chosen.voicing);
            explanation
        })
        .collect();
    render_full_text(&explanations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_error_recognizes_common_descriptions() {
        assert_eq!(classify_error("soprano out of range"), "range");
        assert_eq!(classify_error("parallel fifth between soprano and tenor"), "parallelism");
        assert_eq!(classify_error("something else entirely"), "other");
    }

    #[test]
    fn voicing_dto_widens_to_i32() {
        let dto = voicing_dto(Voicing::new(67, 64, 60, 48));
        assert_eq!(dto, VoicingDto { s: 67, a: 64, t: 60, b: 48 });
    }
}
