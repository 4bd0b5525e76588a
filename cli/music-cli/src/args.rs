//! cli/music-cli/src/args.rs
//! CLI surface over the four external contracts (§6): `harmonize`, `harmonize-melody`,
//! `counterpoint`, `check-errors`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "music-cli", version, about = "Four-part harmony voice-leading solver")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Realize soprano/alto/tenor over a fixed bass line (§6 Harmonize).
    Harmonize(HarmonizeArgs),
    /// Realize bass/alto/tenor under a fixed soprano line (§6 HarmonizeMelody).
    HarmonizeMelody(HarmonizeMelodyArgs),
    /// Solve species counterpoint against a cantus firmus (§6 Counterpoint).
    Counterpoint(CounterpointArgs),
    /// Audit a passage for voice-leading errors and propose corrections (§6 CheckErrors).
    CheckErrors(CheckErrorsArgs),
}

/// Comma-separated MIDI pitches, e.g. `48,53,55,48`.
fn parse_pitch_list(raw: &str) -> Result<Vec<i16>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i16>().map_err(|e| format!("invalid pitch '{s}': {e}")))
        .collect()
}

/// Comma-separated chord quality tags, e.g. `major,major,dominant7,major`.
fn parse_quality_list(raw: &str) -> Result<Vec<String>, String> {
    Ok(raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect())
}

#[derive(Args, Debug, Clone)]
pub struct HarmonizeArgs {
    /// Bass pitches, one MIDI number per step, comma-separated (e.g. `48,53,55,48`).
    #[arg(long, value_parser = parse_pitch_list, value_name = "PITCHES")]
    pub bass_line: Vec<i16>,

    /// Chord quality per step, comma-separated (see §3 for the nine recognized tags); defaults
    /// to `major` for every step when omitted.
    #[arg(long, value_parser = parse_quality_list, value_name = "QUALITIES")]
    pub chord_types: Option<Vec<String>>,

    /// Beam width K; defaults to the solver's own default (10).
    #[arg(long, value_name = "K")]
    pub beam_width: Option<usize>,

    /// Tonal center (e.g. `C`, `F#`), activating the leading-tone resolution rule.
    #[arg(long, value_name = "TONIC")]
    pub key: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct HarmonizeMelodyArgs {
    /// Soprano pitches, one MIDI number per step, comma-separated.
    #[arg(long, value_parser = parse_pitch_list, value_name = "PITCHES")]
    pub melody: Vec<i16>,

    /// Chord quality applied at every step; defaults to `major`.
    #[arg(long, default_value = "major", value_name = "QUALITY")]
    pub chord_type: String,

    /// Tonal center (e.g. `C`, `F#`), activating the leading-tone resolution rule.
    #[arg(long, value_name = "TONIC")]
    pub key: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CounterpointArgs {
    /// Cantus-firmus pitches, one MIDI number per step, comma-separated.
    #[arg(long, value_parser = parse_pitch_list, value_name = "PITCHES")]
    pub cantus_firmus: Vec<i16>,

    /// Whether the counterpoint voice sits above the cantus firmus (default) or below it.
    #[arg(long, default_value_t = true)]
    pub above: bool,

    /// Species (1-5); only species 1 is implemented (§4.6, §6).
    #[arg(long, default_value_t = 1)]
    pub species: u8,
}

#[derive(Args, Debug, Clone)]
pub struct CheckErrorsArgs {
    /// Passage to audit, one complete voicing per step as `S:A:T:B`, space- or comma-separated
    /// steps (e.g. `60:57:53:48,65:62:58:53`). Partial voicings are not supported on the CLI
    /// surface (the API DTO accepts them; see `music-harmony-api`).
    #[arg(long, value_delimiter = ',', value_name = "STEPS")]
    pub voices: Vec<String>,
}
