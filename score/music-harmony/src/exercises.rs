//! score/music-harmony/src/exercises.rs
//! Exercise wrappers built on the core constraint/scoring machinery (§4.6).

use crate::candidates::candidates_for_voice;
use crate::chord_spec::{ChordQuality, ChordSpec};
use crate::constraints::{check_hard_rules_pairwise, check_hard_rules_single, soft_score};
use crate::error::HarmonyError;
use crate::midi::{is_perfect_fifth, is_perfect_octave, pitch_class};
use crate::voice::{Voice, Voicing};

/// Bass-pitch offsets tried when harmonizing a melody note: the melody note itself (as root),
/// and a third or fifth below (major or minor), so the solver isn't locked to root position.
const MELODY_BASS_OFFSETS: [i16; 5] = [0, 3, 4, 7, 8];

/// Harmonize a given soprano line, choosing a bass/alto/tenor for each note greedily (lowest
/// soft score against the previous step, same hard rules as the full solver).
///
/// Unlike [`crate::solver::solve`] this does not keep a beam: it picks exactly one winner per
/// step, since the bass itself is also a free variable here rather than fixed input.
pub fn harmonize_melody(
    melody: &[i16],
    chord_quality: ChordQuality,
    key_root_pc: Option<i16>,
) -> Result<Vec<Voicing>, HarmonyError> {
    if melody.is_empty() {
        return Err(HarmonyError::InputEmpty);
    }

    let mut result = Vec::with_capacity(melody.len());
    let mut prev: Option<Voicing> = None;

    for &soprano in melody {
        let mut best: Option<(Voicing, f64)> = None;

        for offset in MELODY_BASS_OFFSETS {
            let bass = soprano - offset;
            let chord = ChordSpec::new(bass, chord_quality);
            let allowed = chord.allowed_pitch_classes();
            let root_pc = chord.root_pc();

            for alto in candidates_for_voice(Voice::Alto, &allowed) {
                for tenor in candidates_for_voice(Voice::Tenor, &allowed) {
                    let voicing = Voicing::new(soprano, alto, tenor, bass);
                    if check_hard_rules_single(voicing).iter().any(|v| v.is_hard()) {
                        continue;
                    }
                    if let Some(prev) = prev {
                        let pairwise =
                            check_hard_rules_pairwise(prev, voicing, Some(root_pc), key_root_pc);
                        if pairwise.iter().any(|v| v.is_hard()) {
                            continue;
                        }
                    }
                    let bass_motion = prev.map_or(0, |p| voicing.b - p.b);
                    let score = soft_score(prev, voicing, bass_motion, Some(root_pc), key_root_pc);
                    if best.as_ref().is_none_or(|(_, best_score)| score < *best_score) {
                        best = Some((voicing, score));
                    }
                }
            }
        }

        let chosen = match best {
            Some((voicing, _)) => voicing,
            None => prev.map_or_else(
                || Voicing::new(soprano, soprano - 4, soprano - 7, soprano - 12),
                |p| p.with(Voice::Soprano, soprano),
            ),
        };
        result.push(chosen);
        prev = Some(chosen);
    }

    Ok(result)
}

/// A counterpoint voice's pitch against a fixed cantus-firmus pitch at one time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterpointNote {
    pub cantus_firmus: i16,
    pub counterpoint: i16,
}

const COUNTERPOINT_RANGE: (i16, i16) = (60, 84);

/// Solve species counterpoint against a fixed cantus firmus.
///
/// Only species 1 (note against note) is implemented; species 2-5 report
/// [`HarmonyError::Unimplemented`].
pub fn solve_counterpoint(
    species: u8,
    cantus_firmus: &[i16],
    above: bool,
) -> Result<Vec<CounterpointNote>, HarmonyError> {
    if cantus_firmus.is_empty() {
        return Err(HarmonyError::InputEmpty);
    }
    if species != 1 {
        return Err(HarmonyError::Unimplemented(format!("species {species} counterpoint")));
    }
    Ok(solve_species_1(cantus_firmus, above))
}

fn solve_species_1(cantus_firmus: &[i16], above: bool) -> Vec<CounterpointNote> {
    let last = cantus_firmus.len() - 1;
    let mut prev_cp: Option<i16> = None;
    let mut notes = Vec::with_capacity(cantus_firmus.len());

    for (index, &cf_note) in cantus_firmus.iter().enumerate() {
        let is_cadence = index == 0 || index == last;
        let candidates = counterpoint_candidates(cf_note, above, is_cadence);

        let mut best: Option<(i16, f64)> = None;
        for cp_note in candidates {
            if !(COUNTERPOINT_RANGE.0..=COUNTERPOINT_RANGE.1).contains(&cp_note) {
                continue;
            }
            if !is_cadence && !is_consonant_harmonic_interval(cp_note, cf_note) {
                continue;
            }
            if index > 0 {
                if let Some(prev_cp) = prev_cp {
                    let prev_cf = cantus_firmus[index - 1];
                    if forms_parallel_perfect(prev_cp, prev_cf, cp_note, cf_note) {
                        continue;
                    }
                }
            }

            let score = score_counterpoint_note(cp_note, prev_cp, cf_note);
            if best.as_ref().is_none_or(|(_, best_score)| score < *best_score) {
                best = Some((cp_note, score));
            }
        }

        let cp_note = best.map_or_else(|| if above { cf_note + 7 } else { cf_note - 7 }, |(note, _)| note);
        notes.push(CounterpointNote { cantus_firmus: cf_note, counterpoint: cp_note });
        prev_cp = Some(cp_note);
    }

    notes
}

/// Whether the counterpoint-vs-CF pair moves from one perfect fifth/octave to another in the
/// same direction. Checked directly on the two real voices rather than via
/// [`crate::constraints::check_hard_rules_pairwise`], which assumes four distinct voices and
/// would see the single counterpoint line tripled into S/A/T and flag spurious motion between
/// those duplicates.
fn forms_parallel_perfect(prev_cp: i16, prev_cf: i16, curr_cp: i16, curr_cf: i16) -> bool {
    let cp_motion = curr_cp - prev_cp;
    let cf_motion = curr_cf - prev_cf;
    let same_direction = cp_motion != 0 && cf_motion != 0 && cp_motion.signum() == cf_motion.signum();
    same_direction
        && ((is_perfect_fifth(prev_cp, prev_cf) && is_perfect_fifth(curr_cp, curr_cf))
            || (is_perfect_octave(prev_cp, prev_cf) && is_perfect_octave(curr_cp, curr_cf)))
}

fn counterpoint_candidates(cf_note: i16, above: bool, is_cadence: bool) -> Vec<i16> {
    let intervals: [i16; 6] = [3, 4, 5, 7, 8, 9];
    let mut candidates: Vec<i16> =
        intervals.iter().map(|interval| if above { cf_note + interval } else { cf_note - interval }).collect();
    candidates.push(if above { cf_note + 12 } else { cf_note - 12 });
    if is_cadence {
        candidates.push(cf_note);
        candidates.push(if above { cf_note + 7 } else { cf_note - 7 });
    }
    candidates.sort_unstable();
    candidates.dedup();
    candidates
}

/// Consonant intervals for species-1 counterpoint: thirds, fourths, fifths, and sixths. Seconds,
/// the tritone, sevenths, and bare unisons/octaves are dissonant mid-phrase (allowed only at a
/// cadence, handled separately by `is_cadence` in the caller).
fn is_consonant_harmonic_interval(cp_note: i16, cf_note: i16) -> bool {
    !matches!(pitch_class(cp_note - cf_note), 0 | 1 | 2 | 6 | 10 | 11)
}

fn score_counterpoint_note(cp_note: i16, prev_cp: Option<i16>, cf_note: i16) -> f64 {
    let mut score = 0.0;
    if let Some(prev_cp) = prev_cp {
        let motion = (cp_note - prev_cp).abs();
        if motion <= 2 {
            score += 1.0;
        } else if motion > 7 {
            score += 5.0;
        }
    }
    let interval_pc = pitch_class(cp_note - cf_note);
    if interval_pc == 0 || interval_pc == 7 {
        score -= 1.0;
    }
    score
}

/// One hard-rule violation found while auditing an already-written passage (§4.6 error
/// correction); unlike [`crate::violation::Violation`] this is timestamped for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonyErrorReport {
    pub step: usize,
    pub description: String,
}

/// Scan a full passage for hard-rule violations, step by step and between consecutive steps.
#[must_use]
pub fn find_errors(voicings: &[Voicing]) -> Vec<HarmonyErrorReport> {
    let mut errors = Vec::new();
    for (step, &voicing) in voicings.iter().enumerate() {
        for violation in check_hard_rules_single(voicing) {
            errors.push(HarmonyErrorReport { step, description: violation.description() });
        }
        if step > 0 {
            for violation in check_hard_rules_pairwise(voicings[step - 1], voicing, None, None) {
                errors.push(HarmonyErrorReport { step, description: violation.description() });
            }
        }
    }
    errors
}

/// Attempt to correct a passage's errors. Only range violations are auto-correctable (clamp to
/// the voice's nearest boundary); voice-crossing, spacing, and parallel-motion errors need a
/// human or a re-solve, so they are left in place for [`find_errors`] to report again.
#[must_use]
pub fn correct_errors(voicings: &[Voicing]) -> Vec<Voicing> {
    voicings
        .iter()
        .map(|&voicing| {
            let mut corrected = voicing;
            for voice in Voice::ALL {
                let (low, high) = voice.range();
                let pitch = corrected.get(voice).clamp(low, high);
                corrected = corrected.with(voice, pitch);
            }
            corrected
        })
        .collect()
}
