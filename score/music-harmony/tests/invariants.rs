//! score/music-harmony/tests/invariants.rs
//! Property-style coverage of the invariants in §8: every emitted voicing stays in range and
//! order, matches the input bass, and no hard parallel/hidden violation survives between
//! consecutive non-fallback winners, for arbitrary bass lines and beam widths.

use music_harmony::chord_spec::{ChordQuality, ChordSpec};
use music_harmony::constraints::check_hard_rules_pairwise;
use music_harmony::solver::{SolverConfig, solve};
use music_harmony::voice::Voice;
use proptest::prelude::*;

fn arb_bass_line() -> impl Strategy<Value = Vec<i16>> {
    prop::collection::vec(40i16..=60, 1..=6)
}

fn arb_quality() -> impl Strategy<Value = ChordQuality> {
    prop_oneof![
        Just(ChordQuality::Major),
        Just(ChordQuality::Minor),
        Just(ChordQuality::Dominant7),
        Just(ChordQuality::Diminished),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_winning_voicing_respects_range_order_and_bass(
        bass_line in arb_bass_line(),
        quality in arb_quality(),
        beam_width in 1usize..=16,
    ) {
        let chords: Vec<_> = bass_line.iter().map(|&b| ChordSpec::new(b, quality)).collect();
        let config = SolverConfig { beam_width, include_suspension_heuristic: false };
        let outcome = solve(&bass_line, &chords, Some(0), &config).expect("non-empty bass line always solves");

        let winners = outcome.winning_voicings();
        prop_assert_eq!(winners.len(), bass_line.len());

        for (voicing, &bass) in winners.iter().zip(bass_line.iter()) {
            let (s_low, s_high) = Voice::Soprano.range();
            let (a_low, a_high) = Voice::Alto.range();
            let (t_low, t_high) = Voice::Tenor.range();
            let (b_low, b_high) = Voice::Bass.range();
            prop_assert!((s_low..=s_high).contains(&voicing.s));
            prop_assert!((a_low..=a_high).contains(&voicing.a));
            prop_assert!((t_low..=t_high).contains(&voicing.t));
            prop_assert!((b_low..=b_high).contains(&voicing.b));
            prop_assert_eq!(voicing.b, bass);
            prop_assert!(voicing.s >= voicing.a);
            prop_assert!(voicing.a >= voicing.t);
            prop_assert!(voicing.t >= voicing.b);
            prop_assert!(voicing.s - voicing.a <= 12);
            prop_assert!(voicing.a - voicing.t <= 12);
        }
    }

    #[test]
    fn no_hard_parallels_survive_between_consecutive_non_fallback_winners(
        bass_line in arb_bass_line(),
        quality in arb_quality(),
    ) {
        let chords: Vec<_> = bass_line.iter().map(|&b| ChordSpec::new(b, quality)).collect();
        let outcome = solve(&bass_line, &chords, Some(0), &SolverConfig::default()).expect("solves");

        let chain = outcome.winning_chain();
        for window in chain.windows(2) {
            let (prev, curr) = (&window[0], &window[1]);
            if prev.fallback || curr.fallback {
                continue;
            }
            let violations = check_hard_rules_pairwise(prev.voicing, curr.voicing, None, None);
            prop_assert!(!violations.iter().any(|v| v.is_hard()));
        }
    }

    #[test]
    fn solving_twice_with_the_same_input_is_deterministic(
        bass_line in arb_bass_line(),
        quality in arb_quality(),
        beam_width in 1usize..=16,
    ) {
        let chords: Vec<_> = bass_line.iter().map(|&b| ChordSpec::new(b, quality)).collect();
        let config = SolverConfig { beam_width, include_suspension_heuristic: false };
        let first = solve(&bass_line, &chords, Some(0), &config).expect("solves");
        let second = solve(&bass_line, &chords, Some(0), &config).expect("solves");
        prop_assert_eq!(first.winning_voicings(), second.winning_voicings());
    }
}
