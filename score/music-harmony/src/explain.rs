//! score/music-harmony/src/explain.rs
//! Rationale engine: turns a chosen solution plus its rejected candidates into prose (§4.5).

use crate::constraints::check_hard_rules_pairwise;
use crate::midi::pitch_class;
use crate::solver::Solution;
use crate::voice::{Voice, Voicing};

/// An alternative the solver considered and did not choose, with why.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedAlternative {
    pub voicing: Voicing,
    pub reason: RejectionReason,
}

/// Why a candidate lost to the chosen solution.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// It violated a hard rule; the descriptions are the violated rules' messages.
    HardViolation(Vec<String>),
    /// It satisfied every hard rule but scored worse.
    LowerScore { score: f64, chosen_score: f64 },
}

/// The full explanation for one step's choice.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionExplanation {
    pub step: usize,
    pub chosen: Voicing,
    pub rejected_alternatives: Vec<RejectedAlternative>,
    pub positive_factors: Vec<String>,
    pub active_constraints: Vec<String>,
    pub why_chosen: Vec<String>,
    pub potential_errors: Vec<String>,
    pub tradeoffs: Vec<String>,
}

/// Build the explanation for `chosen` at `step`, given every candidate the step considered and
/// the previous step's winning voicing (`None` for the first step).
#[must_use]
pub fn explain_decision(
    step: usize,
    chosen: &Solution,
    all_candidates: &[Solution],
    prev: Option<Voicing>,
) -> DecisionExplanation {
    DecisionExplanation {
        step,
        chosen: chosen.voicing,
        rejected_alternatives: rejected_alternatives(chosen, all_candidates),
        positive_factors: positive_factors(chosen, prev),
        active_constraints: active_constraints(prev),
        why_chosen: why_chosen(chosen, all_candidates, prev),
        potential_errors: potential_errors(chosen, prev),
        tradeoffs: tradeoffs(chosen, all_candidates, prev),
    }
}

fn rejected_alternatives(chosen: &Solution, all_candidates: &[Solution]) -> Vec<RejectedAlternative> {
    all_candidates
        .iter()
        .filter(|candidate| candidate.voicing != chosen.voicing)
        .map(|candidate| {
            let hard: Vec<String> = candidate
                .violations
                .iter()
                .filter(|v| v.is_hard())
                .map(|v| v.description())
                .collect();
            let reason = if hard.is_empty() {
                RejectionReason::LowerScore { score: candidate.score, chosen_score: chosen.score }
            } else {
                RejectionReason::HardViolation(hard)
            };
            RejectedAlternative { voicing: candidate.voicing, reason }
        })
        .collect()
}

fn positive_factors(chosen: &Solution, prev: Option<Voicing>) -> Vec<String> {
    let Some(prev) = prev else {
        return vec!["initial chord: no motion constraints apply".to_string()];
    };
    let mut factors = Vec::new();
    let bass_motion = chosen.voicing.b - prev.b;

    for voice in [Voice::Soprano, Voice::Alto, Voice::Tenor] {
        let motion = chosen.voicing.get(voice) - prev.get(voice);
        match motion.abs() {
            0 => factors.push(format!("{voice} stays on the same note (minimal motion)")),
            1..=2 => factors.push(format!("{voice} moves stepwise ({} semitones)", motion.abs())),
            _ => {}
        }
        if bass_motion != 0 && motion != 0 && bass_motion.signum() != motion.signum() {
            factors.push(format!("{voice} moves contrary to the bass (good counterpoint)"));
        }
    }

    let root_pc = pitch_class(chosen.voicing.b);
    let root_count = chosen.voicing.iter().filter(|(_, pitch)| pitch_class(*pitch) == root_pc).count();
    if root_count >= 2 {
        factors.push(format!("root is doubled ({root_count} times)"));
    }

    let parallels = check_hard_rules_pairwise(prev, chosen.voicing, None, None);
    if parallels.is_empty() {
        factors.push("no parallel fifths or octaves".to_string());
    }

    factors
}

fn active_constraints(prev: Option<Voicing>) -> Vec<String> {
    let mut constraints = vec![
        "voice ranges: S[60-84] A[55-72] T[48-69] B[40-60]".to_string(),
        "voice order: S >= A >= T >= B".to_string(),
        "spacing: at most an octave between S-A and A-T".to_string(),
    ];
    if prev.is_some() {
        constraints.push("no parallel perfect fifths or octaves".to_string());
        constraints.push("no hidden fifths or octaves in similar motion".to_string());
    }
    constraints
}

fn why_chosen(chosen: &Solution, all_candidates: &[Solution], prev: Option<Voicing>) -> Vec<String> {
    let Some(prev) = prev else {
        return vec!["initial chord: chosen for optimal spacing and root doubling".to_string()];
    };

    let mut similar: Vec<&Solution> = all_candidates
        .iter()
        .filter(|c| c.voicing != chosen.voicing)
        .filter(|c| same_upper_voice_count(c.voicing, chosen.voicing) >= 2)
        .collect();
    similar.sort_by(|a, b| {
        same_upper_voice_count(b.voicing, chosen.voicing).cmp(&same_upper_voice_count(a.voicing, chosen.voicing))
    });

    let mut explanations = Vec::new();
    if let Some(best_alt) = similar.first() {
        let diff = best_alt.score - chosen.score;
        explanations.push(format!("chosen over {} similar alternatives", similar.len()));
        explanations.push(format!(
            "best alternative scored {:.1} vs chosen {:.1} (difference {:.1})",
            best_alt.score, chosen.score, diff
        ));

        let chosen_motion = total_motion(chosen.voicing, prev);
        let alt_motion = total_motion(best_alt.voicing, prev);
        if chosen_motion < alt_motion {
            explanations.push(format!(
                "chosen solution has less total voice motion ({chosen_motion} semitones vs {alt_motion})"
            ));
        }

        let chosen_contrary = contrary_motion_count(chosen.voicing, prev);
        let alt_contrary = contrary_motion_count(best_alt.voicing, prev);
        if chosen_contrary > alt_contrary {
            explanations.push(format!(
                "chosen solution has more contrary motion with the bass ({chosen_contrary} voices vs {alt_contrary})"
            ));
        }
    }

    if chosen.score < 5.0 {
        explanations.push("low overall score indicates a good balance of all factors".to_string());
    }
    explanations
}

fn potential_errors(chosen: &Solution, prev: Option<Voicing>) -> Vec<String> {
    let Some(prev) = prev else {
        return vec!["initial chord: verify spacing and root doubling by hand".to_string()];
    };
    let mut errors = Vec::new();

    for voice in [Voice::Soprano, Voice::Alto, Voice::Tenor] {
        let (low, high) = voice.range();
        let note = chosen.voicing.get(voice);
        if note <= low + 2 {
            errors.push(format!("{voice} is near its lower range limit ({note})"));
        }
        if note >= high - 2 {
            errors.push(format!("{voice} is near its upper range limit ({note})"));
        }
    }

    let bass_motion = chosen.voicing.b - prev.b;
    if bass_motion != 0 {
        for voice in [Voice::Soprano, Voice::Alto, Voice::Tenor] {
            let motion = chosen.voicing.get(voice) - prev.get(voice);
            if motion != 0 && bass_motion.signum() == motion.signum() {
                errors.push(format!(
                    "{voice} moves in the same direction as the bass; watch for hidden parallels next step"
                ));
            }
            if motion.abs() > 7 {
                errors.push(format!("{voice} makes a large leap ({} semitones)", motion.abs()));
            }
        }
    }

    let root_pc = pitch_class(chosen.voicing.b);
    let root_count = chosen.voicing.iter().filter(|(_, pitch)| pitch_class(*pitch) == root_pc).count();
    if root_count < 2 {
        errors.push(format!("root is not doubled (only {root_count} occurrence)"));
    }

    let sa = (chosen.voicing.s - chosen.voicing.a).abs();
    let at = (chosen.voicing.a - chosen.voicing.t).abs();
    if sa > 10 || at > 10 {
        errors.push("wide spacing between upper voices; may sound disconnected".to_string());
    }

    errors
}

fn tradeoffs(chosen: &Solution, all_candidates: &[Solution], prev: Option<Voicing>) -> Vec<String> {
    let Some(prev) = prev else {
        return Vec::new();
    };
    let mut tradeoffs = Vec::new();

    let total = total_motion(chosen.voicing, prev);
    let contrary = contrary_motion_count(chosen.voicing, prev);
    if total < 5 && contrary < 2 {
        tradeoffs.push("minimal motion prioritized over contrary motion".to_string());
    } else if total > 10 && contrary >= 2 {
        tradeoffs.push("contrary motion prioritized over minimal motion".to_string());
    }

    let better_contrary = all_candidates
        .iter()
        .filter(|c| c.voicing != chosen.voicing)
        .filter_map(|c| {
            let alt_contrary = contrary_motion_count(c.voicing, prev);
            let alt_motion = total_motion(c.voicing, prev);
            (alt_contrary > contrary && alt_motion > total).then_some((c, alt_contrary, alt_motion))
        })
        .max_by_key(|(_, alt_contrary, _)| *alt_contrary);

    if let Some((_, alt_contrary, alt_motion)) = better_contrary {
        tradeoffs.push(format!(
            "an alternative with better contrary motion ({alt_contrary} vs {contrary}) was rejected for excessive voice motion ({alt_motion} vs {total} semitones)"
        ));
    }

    tradeoffs
}

/// Render a decision's structured fields as prose (measure header, chosen harmony, positive
/// factors, rejected alternatives, active constraints, why-chosen, tradeoffs, potential errors).
///
/// Callers that want structured output instead may serialize [`DecisionExplanation`] via serde
/// directly; this function exists only for the text report the CLI prints.
#[must_use]
pub fn render_text(explanation: &DecisionExplanation) -> String {
    let mut lines = Vec::new();
    lines.push(format!("=== Measure {} ===", explanation.step + 1));

    lines.push(String::new());
    lines.push("Chosen harmony:".to_string());
    for voice in Voice::ALL {
        let midi = explanation.chosen.get(voice);
        let pc = pitch_class(midi);
        lines.push(format!("  {voice}: pc {pc} (MIDI {midi})"));
    }

    if !explanation.positive_factors.is_empty() {
        lines.push(String::new());
        lines.push("Positive factors:".to_string());
        for factor in &explanation.positive_factors {
            lines.push(format!("  + {factor}"));
        }
    }

    if !explanation.rejected_alternatives.is_empty() {
        lines.push(String::new());
        lines.push(format!("Rejected alternatives ({}):", explanation.rejected_alternatives.len()));
        for (index, alt) in explanation.rejected_alternatives.iter().take(5).enumerate() {
            lines.push(format!(
                "  {}. S:{} A:{} T:{}",
                index + 1,
                alt.voicing.s,
                alt.voicing.a,
                alt.voicing.t
            ));
            match &alt.reason {
                RejectionReason::HardViolation(violations) => {
                    for violation in violations.iter().take(2) {
                        lines.push(format!("     - {violation}"));
                    }
                }
                RejectionReason::LowerScore { score, chosen_score } => {
                    lines.push(format!("     score {score:.1} vs chosen {chosen_score:.1}"));
                }
            }
        }
    }

    if !explanation.active_constraints.is_empty() {
        lines.push(String::new());
        lines.push("Active constraints:".to_string());
        for constraint in &explanation.active_constraints {
            lines.push(format!("  * {constraint}"));
        }
    }

    if !explanation.why_chosen.is_empty() {
        lines.push(String::new());
        lines.push("Why this solution was chosen:".to_string());
        for reason in &explanation.why_chosen {
            lines.push(format!("  -> {reason}"));
        }
    }

    if !explanation.tradeoffs.is_empty() {
        lines.push(String::new());
        lines.push("Tradeoffs and compromises:".to_string());
        for tradeoff in &explanation.tradeoffs {
            lines.push(format!("  ~ {tradeoff}"));
        }
    }

    if !explanation.potential_errors.is_empty() {
        lines.push(String::new());
        lines.push("Potential errors to watch for:".to_string());
        for error in &explanation.potential_errors {
            lines.push(format!("  ! {error}"));
        }
    }

    lines.join("\n")
}

/// Render every step's explanation for a full solve, in order, separated by blank lines.
#[must_use]
pub fn render_full_text(explanations: &[DecisionExplanation]) -> String {
    explanations.iter().map(render_text).collect::<Vec<_>>().join("\n\n")
}

fn same_upper_voice_count(a: Voicing, b: Voicing) -> usize {
    [Voice::Soprano, Voice::Alto, Voice::Tenor].into_iter().filter(|v| a.get(*v) == b.get(*v)).count()
}

fn total_motion(curr: Voicing, prev: Voicing) -> i16 {
    [Voice::Soprano, Voice::Alto, Voice::Tenor]
        .into_iter()
        .map(|v| (curr.get(v) - prev.get(v)).abs())
        .sum()
}

fn contrary_motion_count(curr: Voicing, prev: Voicing) -> usize {
    let bass_motion = curr.b - prev.b;
    [Voice::Soprano, Voice::Alto, Voice::Tenor]
        .into_iter()
        .filter(|v| {
            let motion = curr.get(*v) - prev.get(*v);
            bass_motion != 0 && motion != 0 && bass_motion.signum() != motion.signum()
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord_spec::{ChordQuality, ChordSpec};
    use crate::solver::{SolverConfig, solve};

    #[test]
    fn first_step_explanation_has_no_motion_language() {
        let chords = [ChordSpec::new(48, ChordQuality::Major)];
        let outcome = solve(&[48], &chords, Some(0), &SolverConfig::default()).expect("solves");
        let chosen = &outcome.beams[0][0];
        let explanation = explain_decision(0, chosen, &outcome.candidates[0], None);
        assert_eq!(explanation.positive_factors, vec!["initial chord: no motion constraints apply"]);
        assert!(explanation.tradeoffs.is_empty());
    }

    #[test]
    fn render_text_includes_measure_header_and_chosen_voices() {
        let chords = [ChordSpec::new(48, ChordQuality::Major)];
        let outcome = solve(&[48], &chords, Some(0), &SolverConfig::default()).expect("solves");
        let chosen = &outcome.beams[0][0];
        let explanation = explain_decision(0, chosen, &outcome.candidates[0], None);
        let text = render_text(&explanation);
        assert!(text.contains("=== Measure 1 ==="));
        assert!(text.contains("Chosen harmony:"));
    }

    #[test]
    fn later_step_lists_rejected_alternatives() {
        let bass_line = [48_i16, 53];
        let chords: Vec<_> = bass_line.iter().map(|&b| ChordSpec::new(b, ChordQuality::Major)).collect();
        let outcome = solve(&bass_line, &chords, Some(0), &SolverConfig::default()).expect("solves");
        let prev = outcome.beams[0][0].voicing;
        let chosen = &outcome.beams[1][0];
        let explanation = explain_decision(1, chosen, &outcome.candidates[1], Some(prev));
        assert!(!explanation.active_constraints.is_empty());
        if outcome.candidates[1].len() > 1 {
            assert!(!explanation.rejected_alternatives.is_empty());
        }
    }
}
