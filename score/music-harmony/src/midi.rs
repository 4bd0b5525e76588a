//! score/music-harmony/src/midi.rs
//! MIDI-integer-first music primitives (§4.1).
//!
//! The rest of the crate works directly with MIDI pitch numbers rather than `music_theory`'s
//! octave-plus-pitch-class [`Pitch12`](music_theory::Pitch12); these helpers bridge the two so
//! interval classification can be reused from `music-theory` instead of reimplemented.

use music_theory::{GenericInterval, Interval12, IntervalQuality, PitchClass12};

/// Pitch class (0–11) of a MIDI pitch number.
#[must_use]
pub fn pitch_class(midi: i16) -> i16 {
    midi.rem_euclid(12)
}

const PITCH_CLASS_NAMES: [&str; 12] =
    ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Note name for a pitch class, e.g. `4` -> `"E"`.
#[must_use]
pub fn pitch_class_name(pc: i16) -> &'static str {
    PITCH_CLASS_NAMES[pitch_class(pc) as usize]
}

/// Absolute interval in semitones between two MIDI pitches (always non-negative).
#[must_use]
pub fn interval_semitones(a: i16, b: i16) -> i16 {
    (a - b).abs()
}

/// Classify the interval between two pitches (mod-12 interval class + quality).
///
/// Delegates to [`Interval12::classify`] so the naming and quality table is shared with
/// `music-theory` rather than duplicated.
#[must_use]
pub fn interval_type(a: i16, b: i16) -> Option<(GenericInterval, IntervalQuality)> {
    let semitones = i32::from(interval_semitones(a, b));
    Interval12::from_semitones(semitones).classify()
}

/// Whether two pitches form a perfect fifth (interval class 7, octave-reduced).
#[must_use]
pub fn is_perfect_fifth(a: i16, b: i16) -> bool {
    interval_semitones(a, b) % 12 == 7
}

/// Whether two pitches form a perfect octave (or unison, which the spec treats as the same
/// interval class when the two pitches are at the same register).
#[must_use]
pub fn is_perfect_octave(a: i16, b: i16) -> bool {
    interval_semitones(a, b) % 12 == 0
}

/// Whether two pitches are exactly the same register (not merely octave-equivalent).
#[must_use]
pub fn is_unison(a: i16, b: i16) -> bool {
    a == b
}

/// `music_theory::PitchClass12` view of a MIDI pitch, for interop with the key/chord primitives.
#[must_use]
pub fn pitch_class12(midi: i16) -> PitchClass12 {
    PitchClass12::from_semitones(pitch_class(midi) as u16)
}
