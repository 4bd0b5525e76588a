//! score/music-harmony/src/solver.rs
//! Beam-search step engine (§4.4).

use crate::candidates::candidates_for_voice;
use crate::chord_spec::{ChordQuality, ChordSpec};
use crate::constraints::{
    check_hard_rules_pairwise, check_hard_rules_single, soft_score, suspension_resolution_violations,
};
use crate::error::HarmonyError;
use crate::violation::Violation;
use crate::voice::{Voice, Voicing};

/// Per-violation score penalty applied when [`SolverConfig::include_suspension_heuristic`] is on.
/// Scaled to sit alongside [`crate::constraints::soft_score`]'s other penalties (1.0-10.0 per
/// voice), so a single unresolved suspension outweighs an ordinary stepwise move but doesn't
/// dominate the whole sum the way a leading-tone doubling does.
const SUSPENSION_HEURISTIC_PENALTY: f64 = 4.0;

/// Tunable solver parameters. Mirrors the teacher workspace's `StyleProfile` shape: a plain
/// struct with a `Default` impl that callers (CLI/API) populate from their own arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Beam width K; the solver keeps at most this many partial solutions per step.
    pub beam_width: usize,
    /// Whether to fold the suspension-resolution heuristic into scoring (§9 open question).
    /// Disabled by default: the source treats it as optional and excludes it from the default
    /// hard/soft rule set.
    pub include_suspension_heuristic: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { beam_width: 10, include_suspension_heuristic: false }
    }
}

/// One step's chosen or candidate voicing, plus its score and the violations it was still
/// carrying when kept (soft ones, and hard ones only for the fallback sentinel).
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub voicing: Voicing,
    pub score: f64,
    pub violations: Vec<Violation>,
    /// Set when this solution is the "no candidate survived" sentinel (§4.4 fallback).
    pub fallback: bool,
    /// Index of the predecessor in the previous step's beam this solution was actually scored
    /// and pairwise-checked against. `None` at the first step. Lets [`SolveOutcome::winning_chain`]
    /// backtrace the real lineage instead of assuming every step's best solution paired with the
    /// previous step's best.
    pub parent: Option<usize>,
}

impl Solution {
    fn candidate(voicing: Voicing, score: f64, violations: Vec<Violation>, parent: Option<usize>) -> Self {
        Self { voicing, score, violations, fallback: false, parent }
    }

    fn fallback(voicing: Voicing, parent: Option<usize>) -> Self {
        Self { voicing, score: 100.0, violations: Vec::new(), fallback: true, parent }
    }
}

/// An ordered beam of at most `beam_width` solutions, ascending by score.
pub type Beam = Vec<Solution>;

/// The full result of solving a bass line: the beam kept at each step, the full (pre-truncation)
/// scored candidate list at each step (consumed by the explanation engine, §4.5), and any
/// diagnostics (currently just fallback notices).
#[derive(Debug, Clone, Default)]
pub struct SolveOutcome {
    pub beams: Vec<Beam>,
    pub candidates: Vec<Vec<Solution>>,
    pub diagnostics: Vec<String>,
}

impl SolveOutcome {
    /// The actual winning lineage: starting from the last step's top-ranked solution, follows
    /// each [`Solution::parent`] pointer back through the beams it was really scored against.
    ///
    /// This is deliberately not "take `beam[0]` at every step independently" — the top solution
    /// at step N may have been paired with (and validated against) a predecessor that wasn't
    /// itself the top solution at step N-1. Walking `parent` is the only way to recover a chain
    /// that the solver actually checked for hard-rule violations end to end (§8).
    #[must_use]
    pub fn winning_chain(&self) -> Vec<Solution> {
        let Some(last) = self.beams.last().and_then(|beam| beam.first()) else {
            return Vec::new();
        };

        let mut chain = vec![last.clone()];
        let mut parent = last.parent;
        for beam in self.beams[..self.beams.len() - 1].iter().rev() {
            let Some(idx) = parent else { break };
            let solution = &beam[idx];
            chain.push(solution.clone());
            parent = solution.parent;
        }
        chain.reverse();
        chain
    }

    /// The winning voicing at each step, taken from [`Self::winning_chain`].
    #[must_use]
    pub fn winning_voicings(&self) -> Vec<Voicing> {
        self.winning_chain().into_iter().map(|s| s.voicing).collect()
    }
}

/// Score and rank every hard-rule-surviving candidate for one step.
///
/// Returns the full sorted candidate list (callers truncate to `beam_width` themselves); this
/// lets [`solve`] hand the untruncated list to the explanation engine.
fn score_step_candidates(
    beam: &[Solution],
    bass: i16,
    chord: ChordSpec,
    key_root_pc: Option<i16>,
    config: &SolverConfig,
) -> Vec<Solution> {
    let allowed = chord.allowed_pitch_classes();
    let root_pc = chord.root_pc();
    let s_candidates = candidates_for_voice(Voice::Soprano, &allowed);
    let a_candidates = candidates_for_voice(Voice::Alto, &allowed);
    let t_candidates = candidates_for_voice(Voice::Tenor, &allowed);

    let mut scored = Vec::new();

    for &s in &s_candidates {
        for &a in &a_candidates {
            for &t in &t_candidates {
                let voicing = Voicing::new(s, a, t, bass);
                let hard_single = check_hard_rules_single(voicing);
                if hard_single.iter().any(|v| v.is_hard()) {
                    continue;
                }

                if beam.is_empty() {
                    let score = soft_score(None, voicing, 0, Some(root_pc), key_root_pc);
                    scored.push(Solution::candidate(voicing, score, hard_single, None));
                    continue;
                }

                let mut best: Option<(f64, Vec<Violation>, usize)> = None;
                for (idx, predecessor) in beam.iter().enumerate() {
                    let pairwise = check_hard_rules_pairwise(
                        predecessor.voicing,
                        voicing,
                        Some(root_pc),
                        key_root_pc,
                    );
                    if pairwise.iter().any(|v| v.is_hard()) {
                        continue;
                    }
                    let bass_motion = voicing.b - predecessor.voicing.b;
                    let mut score =
                        soft_score(Some(predecessor.voicing), voicing, bass_motion, Some(root_pc), key_root_pc);
                    let mut violations = hard_single.clone();
                    violations.extend(pairwise);
                    if config.include_suspension_heuristic {
                        let suspensions = suspension_resolution_violations(predecessor.voicing, voicing);
                        score += suspensions.len() as f64 * SUSPENSION_HEURISTIC_PENALTY;
                        violations.extend(suspensions);
                    }
                    let is_better = best.as_ref().map(|(best_score, _, _)| score < *best_score).unwrap_or(true);
                    if is_better {
                        best = Some((score, violations, idx));
                    }
                }
                if let Some((score, violations, parent)) = best {
                    scored.push(Solution::candidate(voicing, score, violations, Some(parent)));
                }
            }
        }
    }

    scored.sort_by(|a, b| {
        a.score.total_cmp(&b.score).then_with(|| {
            (a.voicing.s, a.voicing.a, a.voicing.t, a.voicing.b)
                .cmp(&(b.voicing.s, b.voicing.a, b.voicing.t, b.voicing.b))
        })
    });
    scored
}

/// Solve an entire bass line against a per-step chord spec.
///
/// `key_root_pc`, when given, activates the leading-tone resolution rule and the leading-tone
/// doubling soft penalty; without a tonal center those are simply not evaluated.
pub fn solve(
    bass_line: &[i16],
    chords: &[ChordSpec],
    key_root_pc: Option<i16>,
    config: &SolverConfig,
) -> Result<SolveOutcome, HarmonyError> {
    if bass_line.is_empty() {
        return Err(HarmonyError::InputEmpty);
    }

    let mut beam: Beam = Vec::new();
    let mut outcome = SolveOutcome::default();

    for (step, &bass) in bass_line.iter().enumerate() {
        let chord = chords.get(step).copied().unwrap_or(ChordSpec::new(bass, ChordQuality::Major));
        let scored = score_step_candidates(&beam, bass, chord, key_root_pc, config);
        outcome.candidates.push(scored.clone());

        let mut next_beam: Beam = scored.into_iter().take(config.beam_width.max(1)).collect();
        if next_beam.is_empty() {
            match beam.first() {
                Some(predecessor) => {
                    next_beam =
                        vec![Solution::fallback(predecessor.voicing.with(Voice::Bass, bass), Some(0))];
                    outcome.diagnostics.push(format!(
                        "step {step}: no candidate satisfied hard rules; fell back to the previous voicing"
                    ));
                }
                None => return Err(HarmonyError::NoSolution { step }),
            }
        }

        outcome.beams.push(next_beam.clone());
        beam = next_beam;
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violation::ViolationKind;

    #[test]
    fn first_step_produces_a_beam_within_width() {
        let chords = [ChordSpec::new(48, ChordQuality::Major)];
        let outcome = solve(&[48], &chords, Some(0), &SolverConfig::default()).expect("solves");
        assert_eq!(outcome.beams.len(), 1);
        assert!(outcome.beams[0].len() <= SolverConfig::default().beam_width);
        assert!(!outcome.beams[0].is_empty());
    }

    #[test]
    fn every_voicing_respects_bass_and_order_invariants() {
        let bass_line = [48, 53, 55, 48];
        let chords: Vec<_> = bass_line.iter().map(|&b| ChordSpec::new(b, ChordQuality::Major)).collect();
        let outcome = solve(&bass_line, &chords, Some(0), &SolverConfig::default()).expect("solves");
        for (voicing, &bass) in outcome.winning_voicings().iter().zip(bass_line.iter()) {
            assert_eq!(voicing.b, bass);
            assert!(voicing.s >= voicing.a);
            assert!(voicing.a >= voicing.t);
            assert!(voicing.t >= voicing.b);
            assert!(voicing.s - voicing.a <= 12);
            assert!(voicing.a - voicing.t <= 12);
        }
    }

    #[test]
    fn determinism_same_input_same_output() {
        let bass_line = [48, 53, 55, 48];
        let chords: Vec<_> = bass_line.iter().map(|&b| ChordSpec::new(b, ChordQuality::Major)).collect();
        let config = SolverConfig::default();
        let first = solve(&bass_line, &chords, Some(0), &config).expect("solves");
        let second = solve(&bass_line, &chords, Some(0), &config).expect("solves");
        assert_eq!(first.winning_voicings(), second.winning_voicings());
    }

    #[test]
    fn empty_bass_line_is_input_empty() {
        let err = solve(&[], &[], None, &SolverConfig::default()).unwrap_err();
        assert_eq!(err, HarmonyError::InputEmpty);
    }

    #[test]
    fn no_parallel_fifths_survive_between_consecutive_winners() {
        let bass_line = [48, 53];
        let chords: Vec<_> = bass_line.iter().map(|&b| ChordSpec::new(b, ChordQuality::Major)).collect();
        let outcome = solve(&bass_line, &chords, Some(0), &SolverConfig::default()).expect("solves");
        let winners = outcome.winning_voicings();
        let violations = check_hard_rules_pairwise(winners[0], winners[1], None, None);
        assert!(!violations.iter().any(|v| v.is_hard()));
    }

    #[test]
    fn winning_chain_is_an_actually_validated_lineage() {
        let bass_line = [48, 53, 55, 48];
        let chords: Vec<_> = bass_line.iter().map(|&b| ChordSpec::new(b, ChordQuality::Major)).collect();
        let outcome = solve(&bass_line, &chords, Some(0), &SolverConfig::default()).expect("solves");
        let chain = outcome.winning_chain();
        assert_eq!(chain.len(), bass_line.len());
        assert_eq!(chain[0].parent, None);
        for pair in chain.windows(2) {
            let violations = check_hard_rules_pairwise(pair[0].voicing, pair[1].voicing, None, None);
            assert!(!violations.iter().any(|v| v.is_hard()));
        }
    }

    #[test]
    fn suspension_heuristic_is_inert_when_disabled() {
        let bass_line = [48, 53];
        let chords: Vec<_> = bass_line.iter().map(|&b| ChordSpec::new(b, ChordQuality::Major)).collect();
        let off = SolverConfig { beam_width: 10, include_suspension_heuristic: false };
        let on = SolverConfig { beam_width: 10, include_suspension_heuristic: true };
        let outcome_off = solve(&bass_line, &chords, Some(0), &off).expect("solves");
        let outcome_on = solve(&bass_line, &chords, Some(0), &on).expect("solves");
        // Toggling the flag can reorder the beam by changing scores, but it must never change
        // how many candidates survive hard-rule pruning at a step.
        assert_eq!(outcome_off.candidates[1].len(), outcome_on.candidates[1].len());
    }

    #[test]
    fn suspension_heuristic_carries_violations_into_the_scored_candidate() {
        // Predecessor where tenor (61) sits a minor ninth above bass (48) — dissonant at `prev` —
        // and then rises, which is exactly what `suspension_resolution_violations` flags.
        let chord = ChordSpec::new(48, ChordQuality::Major);
        let config = SolverConfig { beam_width: 10, include_suspension_heuristic: true };
        let predecessor = Voicing::new(72, 65, 61, 48);
        let beam = vec![Solution::candidate(predecessor, 0.0, Vec::new(), None)];
        let scored = score_step_candidates(&beam, 48, chord, Some(0), &config);
        let rising_tenor = scored.iter().filter(|s| s.voicing.t > predecessor.t);
        assert!(rising_tenor
            .clone()
            .any(|s| s.violations.iter().any(|v| matches!(v.kind, ViolationKind::SeventhNotResolved(_)))));
    }
}
