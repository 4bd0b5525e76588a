//! score/music-harmony/src/chord_spec.rs
//! Chord qualities and chord-tone enumeration (§3, §4.1).

use music_theory::{ChordKind, SeventhKind, TriadKind};
use serde::{Deserialize, Serialize};

use crate::midi::pitch_class;

/// One of the nine chord qualities recognized by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Dominant7,
    Major7,
    Minor7,
    HalfDiminished7,
    FullyDiminished7,
}

impl ChordQuality {
    /// The `music-theory` [`ChordKind`] with the identical interval template.
    #[must_use]
    pub const fn chord_kind(self) -> ChordKind {
        match self {
            ChordQuality::Major => ChordKind::Triad(TriadKind::Major),
            ChordQuality::Minor => ChordKind::Triad(TriadKind::Minor),
            ChordQuality::Diminished => ChordKind::Triad(TriadKind::Diminished),
            ChordQuality::Augmented => ChordKind::Triad(TriadKind::Augmented),
            ChordQuality::Dominant7 => ChordKind::Seventh(SeventhKind::Dominant7),
            ChordQuality::Major7 => ChordKind::Seventh(SeventhKind::Major7),
            ChordQuality::Minor7 => ChordKind::Seventh(SeventhKind::Minor7),
            ChordQuality::HalfDiminished7 => ChordKind::Seventh(SeventhKind::HalfDiminished7),
            ChordQuality::FullyDiminished7 => ChordKind::Seventh(SeventhKind::Diminished7),
        }
    }

    /// Root-relative semitone offsets for this quality (0, 3 or 4, 6 7 or 8, ...).
    #[must_use]
    pub const fn intervals(self) -> &'static [i32] {
        self.chord_kind().intervals()
    }

    /// Whether this quality carries a chordal seventh.
    #[must_use]
    pub const fn has_seventh(self) -> bool {
        self.intervals().len() == 4
    }

    /// Parse the lowercase string tag used by the external interfaces (§6).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "major" => ChordQuality::Major,
            "minor" => ChordQuality::Minor,
            "diminished" => ChordQuality::Diminished,
            "augmented" => ChordQuality::Augmented,
            "dominant7" => ChordQuality::Dominant7,
            "major7" => ChordQuality::Major7,
            "minor7" => ChordQuality::Minor7,
            "half_diminished7" => ChordQuality::HalfDiminished7,
            "fully_diminished7" => ChordQuality::FullyDiminished7,
            _ => return None,
        })
    }
}

/// A target chord: a quality plus a root pitch (MIDI number; only its pitch class matters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordSpec {
    pub quality: ChordQuality,
    pub root: i16,
}

impl ChordSpec {
    #[must_use]
    pub const fn new(root: i16, quality: ChordQuality) -> Self {
        Self { quality, root }
    }

    /// Root pitch class (0–11).
    #[must_use]
    pub fn root_pc(self) -> i16 {
        pitch_class(self.root)
    }

    /// The set of pitch classes this chord allows, in template order (root, third, fifth, ...).
    #[must_use]
    pub fn allowed_pitch_classes(self) -> Vec<i16> {
        let root_pc = self.root_pc();
        self.quality.intervals().iter().map(|offset| pitch_class(root_pc + *offset as i16)).collect()
    }

    /// Pitch class of the chordal seventh, if this quality has one.
    #[must_use]
    pub fn seventh_pc(self) -> Option<i16> {
        self.quality.has_seventh().then(|| self.allowed_pitch_classes()[3])
    }

    /// Pitch class of the third (used for leading-tone style doubling checks on triads built on
    /// a scale's seventh degree).
    #[must_use]
    pub fn third_pc(self) -> i16 {
        self.allowed_pitch_classes()[1]
    }

    /// Determine the inversion implied by a given bass pitch (0 = root, 1 = first, 2 = second,
    /// 3 = third — bass not a chord tone is treated as root position).
    #[must_use]
    pub fn inversion_for_bass(self, bass: i16) -> u8 {
        let bass_pc = pitch_class(bass);
        self.allowed_pitch_classes()
            .iter()
            .position(|pc| *pc == bass_pc)
            .map(|index| index as u8)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_major_allowed_pitch_classes() {
        let chord = ChordSpec::new(60, ChordQuality::Major);
        assert_eq!(chord.allowed_pitch_classes(), vec![0, 4, 7]);
    }

    #[test]
    fn dominant_seventh_has_seventh_at_index_three() {
        let chord = ChordSpec::new(67, ChordQuality::Dominant7);
        assert!(chord.quality.has_seventh());
        assert_eq!(chord.seventh_pc(), Some(5));
    }

    #[test]
    fn inversion_detection_from_bass() {
        let chord = ChordSpec::new(60, ChordQuality::Major);
        assert_eq!(chord.inversion_for_bass(60), 0);
        assert_eq!(chord.inversion_for_bass(64), 1);
        assert_eq!(chord.inversion_for_bass(67), 2);
        assert_eq!(chord.inversion_for_bass(61), 0);
    }

    #[test]
    fn quality_parses_external_interface_tags() {
        assert_eq!(ChordQuality::parse("half_diminished7"), Some(ChordQuality::HalfDiminished7));
        assert_eq!(ChordQuality::parse("bogus"), None);
    }
}
