//! score/music-harmony/src/harmonic_function.rs
//! The `Fn{params}` harmonic-function text grammar (§3, §6 glossary).

use serde::{Deserialize, Serialize};

use crate::error::HarmonyError;
use crate::midi::pitch_class;

/// Functional harmony category: Tonic, Subdominant, Dominant, Neapolitan, Chopin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonicFunctionType {
    Tonic,
    Subdominant,
    Dominant,
    Neapolitan,
    Chopin,
}

impl HarmonicFunctionType {
    const fn tag(self) -> &'static str {
        match self {
            HarmonicFunctionType::Tonic => "T",
            HarmonicFunctionType::Subdominant => "S",
            HarmonicFunctionType::Dominant => "D",
            HarmonicFunctionType::Neapolitan => "N",
            HarmonicFunctionType::Chopin => "Ch",
        }
    }

    /// Root pitch class relative to the key, before alterations (§3 glossary: S and D are
    /// built a fourth/fifth above the tonic, N is the lowered second degree).
    fn root_pc_in_key(self, key_pc: i16) -> i16 {
        match self {
            HarmonicFunctionType::Tonic | HarmonicFunctionType::Chopin => key_pc,
            HarmonicFunctionType::Subdominant => pitch_class(key_pc + 5),
            HarmonicFunctionType::Dominant => pitch_class(key_pc + 7),
            HarmonicFunctionType::Neapolitan => pitch_class(key_pc + 1),
        }
    }
}

/// Whether an altered chord tone is lowered or raised a semitone from its diatonic position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alteration {
    Lowered,
    Raised,
}

/// A single harmonic function: type, root, inversion, added tones, alterations, and the
/// deflection/mode flags the grammar supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonicFunction {
    pub function_type: HarmonicFunctionType,
    pub root_pc: i16,
    pub position: Option<u8>,
    pub extra: Vec<u8>,
    pub alterations: Vec<(i16, Alteration)>,
    pub is_related_backwards: bool,
    pub is_related_forwards: bool,
    pub is_minor: bool,
}

impl HarmonicFunction {
    /// Chord tones (pitch classes) this function implies, alterations applied.
    #[must_use]
    pub fn chord_tones(&self) -> Vec<i16> {
        let root = self.root_pc;
        let mut tones = match self.function_type {
            HarmonicFunctionType::Tonic | HarmonicFunctionType::Subdominant => {
                if self.is_minor {
                    vec![root, pitch_class(root + 3), pitch_class(root + 7)]
                } else {
                    vec![root, pitch_class(root + 4), pitch_class(root + 7)]
                }
            }
            HarmonicFunctionType::Dominant => {
                let mut tones = vec![root, pitch_class(root + 4), pitch_class(root + 7)];
                if self.extra.contains(&7) {
                    tones.push(pitch_class(root + 10));
                }
                if self.extra.contains(&9) {
                    tones.push(pitch_class(root + 2));
                }
                tones
            }
            HarmonicFunctionType::Neapolitan => {
                vec![pitch_class(root - 1), pitch_class(root + 3), pitch_class(root + 7)]
            }
            HarmonicFunctionType::Chopin => {
                vec![root, pitch_class(root + 4), pitch_class(root + 7), pitch_class(root + 10)]
            }
        };

        for (interval, alteration) in &self.alterations {
            for tone in &mut tones {
                if pitch_class(*tone - root) == *interval {
                    *tone = match alteration {
                        Alteration::Lowered => pitch_class(*tone - 1),
                        Alteration::Raised => pitch_class(*tone + 1),
                    };
                }
            }
        }
        tones
    }

    /// Bass pitch class implied by `position` (0/None = root, 1 = first inversion, ...).
    /// Falls back to the root when the requested inversion has no corresponding chord tone.
    #[must_use]
    pub fn bass_note_pc(&self) -> i16 {
        let tones = self.chord_tones();
        let index = self.position.unwrap_or(0) as usize;
        tones.get(index).copied().unwrap_or(tones[0])
    }

    /// Validate `position` against this function's own chord tones, mirroring the Python
    /// source's `Prechecker.check_function`: an out-of-range position (including position 3
    /// without a seventh in `extra`, since a triad has only three chord tones) is an
    /// [`HarmonyError::InvalidSpec`], not a silent fallback to the root.
    pub fn validate(&self, index: usize) -> Result<(), HarmonyError> {
        let tones = self.chord_tones();
        if let Some(position) = self.position {
            if position as usize >= tones.len() {
                return Err(HarmonyError::InvalidSpec {
                    index,
                    message: format!(
                        "{self} position {position} is invalid (max {})",
                        tones.len() - 1
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Validate a parsed sequence in order, mirroring `Prechecker.check_sequence`: the first
/// function whose position is out of range for its own chord tones is reported, by index.
pub fn validate_sequence(functions: &[HarmonicFunction]) -> Result<(), HarmonyError> {
    for (index, function) in functions.iter().enumerate() {
        function.validate(index)?;
    }
    Ok(())
}

impl std::fmt::Display for HarmonicFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(position) = self.position {
            parts.push(format!("position: {position}"));
        }
        if !self.extra.is_empty() {
            let extra = self.extra.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            parts.push(format!("extra: {extra}"));
        }
        if !self.alterations.is_empty() {
            let alterations = self
                .alterations
                .iter()
                .map(|(interval, alteration)| {
                    let symbol = match alteration {
                        Alteration::Lowered => "<",
                        Alteration::Raised => ">",
                    };
                    format!("{interval}: {symbol}")
                })
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("alterations: {alterations}"));
        }
        if self.is_related_backwards {
            parts.push("isRelatedBackwards".to_string());
        }
        if self.is_related_forwards {
            parts.push("isRelatedForwards".to_string());
        }
        if self.is_minor {
            parts.push("minor".to_string());
        }
        write!(f, "{}{{{}}}", self.function_type.tag(), parts.join("; "))
    }
}

/// Parse a single function like `"T{}"`, `"D{extra: 7}"`, `"S{position: 3}"`.
#[must_use]
pub fn parse_harmonic_function(input: &str, key_pc: i16) -> Option<HarmonicFunction> {
    let input = input.trim();
    let (function_type, rest) = if let Some(rest) = input.strip_prefix("Ch") {
        (HarmonicFunctionType::Chopin, rest)
    } else if let Some(rest) = input.strip_prefix('T') {
        (HarmonicFunctionType::Tonic, rest)
    } else if let Some(rest) = input.strip_prefix('S') {
        (HarmonicFunctionType::Subdominant, rest)
    } else if let Some(rest) = input.strip_prefix('D') {
        (HarmonicFunctionType::Dominant, rest)
    } else if let Some(rest) = input.strip_prefix('N') {
        (HarmonicFunctionType::Neapolitan, rest)
    } else {
        return None;
    };
    let root_pc = function_type.root_pc_in_key(key_pc);

    let mut function = HarmonicFunction {
        function_type,
        root_pc,
        position: None,
        extra: Vec::new(),
        alterations: Vec::new(),
        is_related_backwards: false,
        is_related_forwards: false,
        is_minor: false,
    };

    let Some(open) = rest.find('{') else { return Some(function) };
    let Some(close) = rest.rfind('}') else { return Some(function) };
    if close < open {
        return Some(function);
    }
    let params = &rest[open + 1..close];

    for part in params.split(';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Some((key, value)) = part.split_once(':') {
            let key = key.trim();
            let value = value.trim();
            match key {
                "position" => function.position = value.parse().ok(),
                "extra" => {
                    function.extra = value.split(',').filter_map(|v| v.trim().parse().ok()).collect();
                }
                "alterations" => {
                    function.alterations = value
                        .split(',')
                        .filter_map(|entry| {
                            let (interval, symbol) = entry.split_once(':')?;
                            let interval: i16 = interval.trim().parse().ok()?;
                            let alteration = match symbol.trim() {
                                "<" => Alteration::Lowered,
                                ">" => Alteration::Raised,
                                _ => return None,
                            };
                            Some((interval, alteration))
                        })
                        .collect();
                }
                _ => {}
            }
        } else {
            match part {
                "isRelatedBackwards" => function.is_related_backwards = true,
                "isRelatedForwards" => function.is_related_forwards = true,
                "minor" => function.is_minor = true,
                _ => {}
            }
        }
    }

    Some(function)
}

/// Parse a sequence of functions like `"T{}; D{}; T{}"`.
///
/// Splits on top-level `;` only (outside `{}`), since a function's own parameters are also
/// `;`-separated and a naive whole-string split would cut them apart.
#[must_use]
pub fn parse_harmonic_sequence(input: &str, key_pc: i16) -> Vec<HarmonicFunction> {
    split_top_level(input)
        .into_iter()
        .filter(|segment| !segment.trim().is_empty())
        .filter_map(|segment| parse_harmonic_function(segment.trim(), key_pc))
        .collect()
}

fn split_top_level(input: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0_i32;
    let mut start = 0;
    for (index, ch) in input.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth -= 1,
            ';' if depth == 0 => {
                segments.push(&input[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    segments.push(&input[start..]);
    segments
}
