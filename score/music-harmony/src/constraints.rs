//! score/music-harmony/src/constraints.rs
//! Hard voice-leading rules and soft preference scoring (§4.2).

use crate::midi::{interval_semitones, is_perfect_fifth, is_perfect_octave, pitch_class};
use crate::voice::{Voice, Voicing};
use crate::violation::{Violation, ViolationKind};

/// Evaluate the per-voicing hard rules: range, voice order, spacing.
///
/// These do not need a predecessor; they hold or fail on a single complete voicing.
#[must_use]
pub fn check_hard_rules_single(voicing: Voicing) -> Vec<Violation> {
    let mut violations = Vec::new();

    for voice in Voice::ALL {
        let (low, high) = voice.range();
        let pitch = voicing.get(voice);
        if pitch < low || pitch > high {
            violations.push(Violation::hard(ViolationKind::OutOfRange(voice)));
        }
    }

    if voicing.s < voicing.a {
        violations.push(Violation::hard(ViolationKind::VoiceCrossing(Voice::Soprano, Voice::Alto)));
    }
    if voicing.a < voicing.t {
        violations.push(Violation::hard(ViolationKind::VoiceCrossing(Voice::Alto, Voice::Tenor)));
    }
    if voicing.t < voicing.b {
        violations.push(Violation::hard(ViolationKind::VoiceCrossing(Voice::Tenor, Voice::Bass)));
    }

    if interval_semitones(voicing.s, voicing.a) > 12 {
        violations.push(Violation::hard(ViolationKind::InvalidSpacing(Voice::Soprano, Voice::Alto)));
    }
    if interval_semitones(voicing.a, voicing.t) > 12 {
        violations.push(Violation::hard(ViolationKind::InvalidSpacing(Voice::Alto, Voice::Tenor)));
    }

    violations
}

/// Evaluate the cross-step hard rules that need a predecessor: parallels, hidden perfects,
/// chordal-seventh resolution, and leading-tone resolution.
///
/// `root_pc` and `leading_tone_pc` are the prevailing chord root / key leading tone at the
/// *previous* step, since resolution rules are about what the previous voicing was obligated
/// to do next.
#[must_use]
pub fn check_hard_rules_pairwise(
    prev: Voicing,
    curr: Voicing,
    root_pc: Option<i16>,
    leading_tone_pc: Option<i16>,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for v1 in Voice::ALL {
        for v2 in Voice::ALL {
            if v1 == v2 {
                continue;
            }
            let (prev1, prev2) = (prev.get(v1), prev.get(v2));
            let (curr1, curr2) = (curr.get(v1), curr.get(v2));
            let motion1 = curr1 - prev1;
            let motion2 = curr2 - prev2;
            let same_direction = motion1 != 0 && motion2 != 0 && motion1.signum() == motion2.signum();

            if is_perfect_fifth(prev1, prev2) && is_perfect_fifth(curr1, curr2) && same_direction {
                violations.push(Violation::hard(ViolationKind::ParallelFifth(v1, v2)));
            }
            if is_perfect_octave(prev1, prev2) && is_perfect_octave(curr1, curr2) && same_direction {
                violations.push(Violation::hard(ViolationKind::ParallelOctave(v1, v2)));
            }
            if same_direction {
                if is_perfect_fifth(curr1, curr2) {
                    violations.push(Violation::hard(ViolationKind::HiddenFifth(v1, v2)));
                }
                if is_perfect_octave(curr1, curr2) {
                    violations.push(Violation::hard(ViolationKind::HiddenOctave(v1, v2)));
                }
            }
        }
    }

    if let Some(root_pc) = root_pc {
        violations.extend(check_seventh_resolution(prev, curr, root_pc));
    }
    if let Some(leading_tone_pc) = leading_tone_pc {
        violations.extend(check_leading_tone_resolution(prev, curr, leading_tone_pc));
    }

    violations
}

/// Chordal seventh resolution: a voice holding the seventh must descend 1-2 semitones.
fn check_seventh_resolution(prev: Voicing, curr: Voicing, root_pc: i16) -> Vec<Violation> {
    let mut violations = Vec::new();
    for voice in Voice::ALL {
        let prev_note = prev.get(voice);
        let curr_note = curr.get(voice);
        let interval_above_root = pitch_class(pitch_class(prev_note) - root_pc);
        if interval_above_root == 10 || interval_above_root == 11 {
            let motion = curr_note - prev_note;
            if !(-2..=-1).contains(&motion) {
                violations.push(Violation::hard(ViolationKind::SeventhNotResolved(voice)));
            }
        }
    }
    violations
}

/// Leading-tone resolution: a voice holding the leading tone must ascend; ascending to a
/// non-tonic pitch class is a soft violation rather than a hard one.
fn check_leading_tone_resolution(prev: Voicing, curr: Voicing, key_root_pc: i16) -> Vec<Violation> {
    let mut violations = Vec::new();
    let leading_tone_pc = pitch_class(key_root_pc + 11);
    for voice in Voice::ALL {
        let prev_note = prev.get(voice);
        if pitch_class(prev_note) != leading_tone_pc {
            continue;
        }
        let curr_note = curr.get(voice);
        let motion = curr_note - prev_note;
        if motion <= 0 {
            violations.push(Violation::hard(ViolationKind::LeadingToneNotResolved(voice)));
        } else if pitch_class(curr_note) != key_root_pc {
            violations.push(Violation::soft(ViolationKind::LeadingToneMisresolved(voice)));
        }
    }
    violations
}

/// Soft-rule weights for a candidate, given the (possibly absent) predecessor it is paired
/// with, the bass motion against that predecessor, and the prevailing root/leading-tone pitch
/// classes. Lower is better.
#[must_use]
pub fn soft_score(
    prev: Option<Voicing>,
    curr: Voicing,
    bass_motion: i16,
    root_pc: Option<i16>,
    leading_tone_pc: Option<i16>,
) -> f64 {
    let mut score = 0.0;

    for voice in [Voice::Soprano, Voice::Alto, Voice::Tenor] {
        let curr_note = curr.get(voice);
        let prev_note = prev.map(|p| p.get(voice));
        score += score_voice_motion(prev_note, curr_note);
        if let Some(prev_note) = prev_note {
            let voice_motion = curr_note - prev_note;
            score += score_contrary_motion_to_bass(bass_motion, voice_motion);
        }
    }

    if let Some(root_pc) = root_pc {
        score += score_doubling(curr, root_pc);
    }
    if let Some(leading_tone_pc) = leading_tone_pc {
        score += score_leading_tone_doubling(curr, leading_tone_pc);
    }

    score += score_chord_spacing(curr);
    score
}

fn score_voice_motion(prev_note: Option<i16>, curr_note: i16) -> f64 {
    let Some(prev_note) = prev_note else {
        return 0.0;
    };
    match interval_semitones(curr_note, prev_note) {
        0 => 0.0,
        1..=2 => 1.0,
        3..=7 => 3.0,
        _ => 10.0,
    }
}

fn score_contrary_motion_to_bass(bass_motion: i16, voice_motion: i16) -> f64 {
    if bass_motion == 0 || voice_motion == 0 {
        return 0.0;
    }
    if bass_motion.signum() != voice_motion.signum() {
        -2.0
    } else {
        2.0
    }
}

fn score_doubling(voicing: Voicing, root_pc: i16) -> f64 {
    let root_count = voicing.iter().filter(|(_, pitch)| pitch_class(*pitch) == root_pc).count();
    match root_count {
        0 => 5.0,
        1 => 0.0,
        _ => -1.0,
    }
}

fn score_leading_tone_doubling(voicing: Voicing, leading_tone_pc: i16) -> f64 {
    let lt_count = voicing.iter().filter(|(_, pitch)| pitch_class(*pitch) == leading_tone_pc).count();
    if lt_count >= 2 { 10.0 } else { 0.0 }
}

fn score_chord_spacing(voicing: Voicing) -> f64 {
    let sa = f64::from(interval_semitones(voicing.s, voicing.a));
    let at = f64::from(interval_semitones(voicing.a, voicing.t));
    let tb = f64::from(interval_semitones(voicing.t, voicing.b));
    let mean = (sa + at + tb) / 3.0;
    let variance = ((sa - mean).powi(2) + (at - mean).powi(2) + (tb - mean).powi(2)) / 3.0;
    variance * 0.1
}

/// Optional suspension-resolution heuristic (§9 open question): disabled by default, off the
/// default soft-score sum, exposed for callers who opt in via [`crate::solver::SolverConfig`].
#[must_use]
pub fn suspension_resolution_violations(prev: Voicing, curr: Voicing) -> Vec<Violation> {
    let mut violations = Vec::new();
    for voice in Voice::ALL {
        let prev_note = prev.get(voice);
        let curr_note = curr.get(voice);
        if curr_note - prev_note <= 0 {
            continue;
        }
        let dissonant_with_another = Voice::ALL.into_iter().filter(|other| *other != voice).any(|other| {
            matches!(interval_semitones(prev_note, prev.get(other)) % 12, 1 | 2 | 6 | 10 | 11)
        });
        if dissonant_with_another {
            violations.push(Violation::soft(ViolationKind::SeventhNotResolved(voice)));
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_violation_on_out_of_range_pitch() {
        let voicing = Voicing::new(90, 64, 55, 48);
        let violations = check_hard_rules_single(voicing);
        assert!(violations.iter().any(|v| matches!(v.kind, ViolationKind::OutOfRange(Voice::Soprano))));
    }

    #[test]
    fn voice_crossing_detected() {
        let voicing = Voicing::new(60, 64, 55, 48);
        let violations = check_hard_rules_single(voicing);
        assert!(violations.iter().any(|v| matches!(v.kind, ViolationKind::VoiceCrossing(..))));
    }

    #[test]
    fn spacing_violation_when_soprano_alto_exceed_octave() {
        let voicing = Voicing::new(80, 60, 55, 48);
        let violations = check_hard_rules_single(voicing);
        assert!(violations.iter().any(|v| matches!(v.kind, ViolationKind::InvalidSpacing(..))));
    }

    #[test]
    fn parallel_fifths_detected_between_soprano_and_tenor() {
        // S-T is a perfect fifth at both steps (67-60 and 72-65), both rising by the same
        // five semitones.
        let prev = Voicing::new(67, 64, 60, 48);
        let curr = Voicing::new(72, 67, 65, 50);
        let violations = check_hard_rules_pairwise(prev, curr, None, None);
        assert!(
            violations.iter().any(|v| matches!(
                v.kind,
                ViolationKind::ParallelFifth(Voice::Soprano, Voice::Tenor)
                    | ViolationKind::ParallelFifth(Voice::Tenor, Voice::Soprano)
            ))
        );
    }

    #[test]
    fn seventh_must_descend_by_step() {
        // Soprano (pc 5) is the chordal seventh of a root-7 dominant; alto/tenor/bass are not.
        let prev = Voicing::new(65, 60, 55, 43);
        let stays = Voicing::new(65, 59, 55, 48);
        let violations = check_hard_rules_pairwise(prev, stays, Some(7), None);
        assert!(violations.iter().any(|v| matches!(v.kind, ViolationKind::SeventhNotResolved(_))));

        let resolves = Voicing::new(64, 59, 55, 48);
        let violations = check_hard_rules_pairwise(prev, resolves, Some(7), None);
        assert!(!violations.iter().any(|v| matches!(v.kind, ViolationKind::SeventhNotResolved(_))));
    }

    #[test]
    fn leading_tone_must_ascend() {
        let prev = Voicing::new(71, 67, 59, 47);
        let stays = Voicing::new(71, 67, 60, 48);
        let violations = check_hard_rules_pairwise(prev, stays, None, Some(0));
        assert!(violations.iter().any(|v| matches!(v.kind, ViolationKind::LeadingToneNotResolved(_))));

        let resolves = Voicing::new(72, 67, 60, 48);
        let violations = check_hard_rules_pairwise(prev, resolves, None, Some(0));
        assert!(!violations.iter().any(|v| matches!(v.kind, ViolationKind::LeadingToneNotResolved(_))));
    }

    #[test]
    fn root_doubling_scores_better_than_missing_root() {
        let doubled = Voicing::new(67, 64, 60, 60);
        let missing = Voicing::new(64, 62, 59, 55);
        assert!(score_doubling(doubled, 0) < score_doubling(missing, 0));
    }

    #[test]
    fn stepwise_motion_scores_better_than_large_leap() {
        assert!(score_voice_motion(Some(60), 62) < score_voice_motion(Some(60), 80));
    }

    #[test]
    fn suspension_resolution_flags_a_rising_voice_dissonant_with_another() {
        // Tenor (61) sits a minor ninth above bass (48) at `prev` — dissonant (interval class 1)
        // — then rises to 64 instead of resolving downward.
        let prev = Voicing::new(72, 65, 61, 48);
        let curr = Voicing::new(72, 65, 64, 48);
        let violations = suspension_resolution_violations(prev, curr);
        assert!(violations.iter().any(|v| matches!(v.kind, ViolationKind::SeventhNotResolved(Voice::Tenor))));
    }

    #[test]
    fn suspension_resolution_ignores_a_voice_that_falls() {
        let prev = Voicing::new(72, 65, 61, 48);
        let curr = Voicing::new(72, 65, 59, 48);
        let violations = suspension_resolution_violations(prev, curr);
        assert!(!violations.iter().any(|v| matches!(v.kind, ViolationKind::SeventhNotResolved(_))));
    }
}
