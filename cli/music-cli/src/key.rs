//! cli/music-cli/src/key.rs
//! Parse a tonic letter name (e.g. `C`, `F#`, `Bb`) into a pitch class, for the solver's
//! optional `--key` argument (activates the leading-tone resolution rule, §4.2).

use anyhow::{Result, anyhow, bail};

/// Parse a tonic name into a 0-11 pitch class.
pub fn parse_tonic(input: &str) -> Result<i16> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("tonic cannot be empty");
    }
    let mut chars = trimmed.chars();
    let letter = chars.next().ok_or_else(|| anyhow!("tonic must start with an A-G letter"))?.to_ascii_uppercase();
    let base: i16 = match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => bail!("tonic must begin with A, B, C, D, E, F, or G"),
    };
    let mut offset: i16 = 0;
    for ch in chars {
        offset += match ch {
            '#' | '♯' => 1,
            'b' | '♭' => -1,
            _ => bail!("unrecognized accidental '{ch}' (use # or b)"),
        };
    }
    Ok((base + offset).rem_euclid(12))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_naturals_and_accidentals() {
        assert_eq!(parse_tonic("C").expect("parses"), 0);
        assert_eq!(parse_tonic("F#").expect("parses"), 6);
        assert_eq!(parse_tonic("Bb").expect("parses"), 10);
    }

    #[test]
    fn rejects_unknown_letters() {
        assert!(parse_tonic("H").is_err());
        assert!(parse_tonic("").is_err());
    }
}
