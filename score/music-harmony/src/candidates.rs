//! score/music-harmony/src/candidates.rs
//! Candidate pitch enumeration for a single voice against a target chord (§4.3).

use crate::midi::pitch_class;
use crate::voice::Voice;

/// Enumerate every pitch in `voice`'s range whose pitch class is in `allowed`, ascending and
/// deduplicated (duplicates cannot occur since an octave has at most one pitch per semitone,
/// but callers may pass an `allowed` list with repeats).
#[must_use]
pub fn candidates_for_voice(voice: Voice, allowed: &[i16]) -> Vec<i16> {
    let (low, high) = voice.range();
    let mut out: Vec<i16> =
        (low..=high).filter(|pitch| allowed.contains(&pitch_class(*pitch))).collect();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soprano_candidates_for_c_major_are_in_range_and_on_chord_tones() {
        let candidates = candidates_for_voice(Voice::Soprano, &[0, 4, 7]);
        assert!(candidates.iter().all(|p| (60..=84).contains(p)));
        assert!(candidates.iter().all(|p| [0, 4, 7].contains(&pitch_class(*p))));
        assert!(!candidates.is_empty());
    }

    #[test]
    fn candidates_are_ascending() {
        let candidates = candidates_for_voice(Voice::Alto, &[0, 3, 7, 10]);
        let mut sorted = candidates.clone();
        sorted.sort_unstable();
        assert_eq!(candidates, sorted);
    }
}
