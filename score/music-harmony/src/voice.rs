//! score/music-harmony/src/voice.rs
//! The four SATB voices and the fixed-size voicing record that replaces a keyed map.

use std::fmt;

/// One of the four voices in a chorale texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Voice {
    Soprano,
    Alto,
    Tenor,
    Bass,
}

impl Voice {
    /// All four voices, soprano-first.
    pub const ALL: [Voice; 4] = [Voice::Soprano, Voice::Alto, Voice::Tenor, Voice::Bass];

    /// Inclusive MIDI range for this voice.
    #[must_use]
    pub const fn range(self) -> (i16, i16) {
        match self {
            Voice::Soprano => (60, 84),
            Voice::Alto => (55, 72),
            Voice::Tenor => (48, 69),
            Voice::Bass => (40, 60),
        }
    }

    /// Single-letter tag used by the external interfaces (§6).
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Voice::Soprano => 'S',
            Voice::Alto => 'A',
            Voice::Tenor => 'T',
            Voice::Bass => 'B',
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Voice::Soprano => "soprano",
            Voice::Alto => "alto",
            Voice::Tenor => "tenor",
            Voice::Bass => "bass",
        })
    }
}

/// A complete assignment of a MIDI pitch to each of the four voices at one time step.
///
/// Deliberately a fixed record rather than a `Voice -> i16` map: every voice is always present,
/// so there is no absent-key case to handle downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Voicing {
    pub s: i16,
    pub a: i16,
    pub t: i16,
    pub b: i16,
}

impl Voicing {
    #[must_use]
    pub const fn new(s: i16, a: i16, t: i16, b: i16) -> Self {
        Self { s, a, t, b }
    }

    /// Pitch held by a given voice.
    #[must_use]
    pub const fn get(self, voice: Voice) -> i16 {
        match voice {
            Voice::Soprano => self.s,
            Voice::Alto => self.a,
            Voice::Tenor => self.t,
            Voice::Bass => self.b,
        }
    }

    /// Return a copy with one voice's pitch replaced.
    #[must_use]
    pub const fn with(self, voice: Voice, pitch: i16) -> Self {
        match voice {
            Voice::Soprano => Self { s: pitch, ..self },
            Voice::Alto => Self { a: pitch, ..self },
            Voice::Tenor => Self { t: pitch, ..self },
            Voice::Bass => Self { b: pitch, ..self },
        }
    }

    /// Iterate `(voice, pitch)` pairs soprano-first.
    pub fn iter(self) -> impl Iterator<Item = (Voice, i16)> {
        Voice::ALL.into_iter().map(move |v| (v, self.get(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_match_the_fixed_table() {
        assert_eq!(Voice::Soprano.range(), (60, 84));
        assert_eq!(Voice::Alto.range(), (55, 72));
        assert_eq!(Voice::Tenor.range(), (48, 69));
        assert_eq!(Voice::Bass.range(), (40, 60));
    }

    #[test]
    fn voicing_get_and_with_round_trip() {
        let v = Voicing::new(67, 64, 60, 48);
        assert_eq!(v.get(Voice::Soprano), 67);
        let moved = v.with(Voice::Alto, 62);
        assert_eq!(moved.a, 62);
        assert_eq!(moved.s, 67);
    }

    #[test]
    fn tags_match_external_interface_letters() {
        assert_eq!(Voice::Soprano.tag(), 'S');
        assert_eq!(Voice::Bass.tag(), 'B');
    }
}
