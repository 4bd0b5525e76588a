mod args;
mod key;
mod report;

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use music_harmony::{
    ChordQuality, ChordSpec, HarmonyError, SolverConfig, Voicing, correct_errors, find_errors,
    harmonize_melody, solve, solve_counterpoint,
};
use music_harmony_api::{
    CheckErrorsResponse, CounterpointResponse, HarmonizeMelodyResponse, HarmonizeResponse,
};

use crate::args::{
    Cli, CheckErrorsArgs, Commands, CounterpointArgs, HarmonizeArgs, HarmonizeMelodyArgs,
};
use crate::key::parse_tonic;
use crate::report::{counterpoint_dto, error_entry_dto, render_solve_explanations, voicing_dto};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Harmonize(args) => run_harmonize(args),
        Commands::HarmonizeMelody(args) => run_harmonize_melody(args),
        Commands::Counterpoint(args) => run_counterpoint(args),
        Commands::CheckErrors(args) => run_check_errors(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_harmonize(args: HarmonizeArgs) -> Result<()> {
    let qualities = parse_qualities(args.chord_types.as_deref())?;
    let key_root_pc = args.key.as_deref().map(parse_tonic).transpose()?;
    let config = SolverConfig {
        beam_width: args.beam_width.unwrap_or_else(|| SolverConfig::default().beam_width),
        ..SolverConfig::default()
    };

    let chords: Vec<ChordSpec> = args
        .bass_line
        .iter()
        .enumerate()
        .map(|(step, &bass)| ChordSpec::new(bass, qualities.get(step).copied().unwrap_or(ChordQuality::Major)))
        .collect();

    let response = match solve(&args.bass_line, &chords, key_root_pc, &config) {
        Ok(outcome) => {
            let chain = outcome.winning_chain();
            HarmonizeResponse {
                success: true,
                voices: chain.iter().map(|s| voicing_dto(s.voicing)).collect(),
                explanations: render_solve_explanations(&chain, &outcome.candidates),
                error: None,
            }
        }
        Err(err) => HarmonizeResponse { success: false, voices: Vec::new(), explanations: String::new(), error: Some(err.to_string()) },
    };

    print_response(&response.explanations, &response, response.success)
}

fn run_harmonize_melody(args: HarmonizeMelodyArgs) -> Result<()> {
    let quality = ChordQuality::parse(&args.chord_type)
        .with_context(|| format!("unrecognized chord quality '{}'", args.chord_type))?;
    let key_root_pc = args.key.as_deref().map(parse_tonic).transpose()?;

    let response = match harmonize_melody(&args.melody, quality, key_root_pc) {
        Ok(voicings) => {
            HarmonizeMelodyResponse { success: true, voices: voicings.into_iter().map(voicing_dto).collect() }
        }
        Err(_) => HarmonizeMelodyResponse { success: false, voices: Vec::new() },
    };

    print_response("", &response, response.success)
}

fn run_counterpoint(args: CounterpointArgs) -> Result<()> {
    let response = match solve_counterpoint(args.species, &args.cantus_firmus, args.above) {
        Ok(notes) => CounterpointResponse {
            success: true,
            voices: notes.into_iter().map(counterpoint_dto).collect(),
            error: None,
        },
        Err(err) => CounterpointResponse { success: false, voices: Vec::new(), error: Some(err.to_string()) },
    };

    print_response("", &response, response.success)
}

fn run_check_errors(args: CheckErrorsArgs) -> Result<()> {
    let voicings = args.voices.iter().map(|step| parse_voicing(step)).collect::<Result<Vec<_>>>()?;
    let errors = find_errors(&voicings);
    let corrected = correct_errors(&voicings);

    let response = CheckErrorsResponse {
        success: true,
        errors: errors.into_iter().map(|e| error_entry_dto(e.step, e.description)).collect(),
        corrected: corrected.into_iter().map(voicing_dto).collect(),
    };

    print_response("", &response, true)
}

fn parse_qualities(raw: Option<&[String]>) -> Result<Vec<ChordQuality>> {
    let Some(raw) = raw else { return Ok(Vec::new()) };
    raw.iter()
        .enumerate()
        .map(|(index, tag)| {
            ChordQuality::parse(tag)
                .ok_or_else(|| HarmonyError::InvalidSpec { index, message: format!("unrecognized chord quality '{tag}'") })
                .map_err(anyhow::Error::from)
        })
        .collect()
}

/// Parse one `S:A:T:B` step into a complete [`Voicing`].
fn parse_voicing(step: &str) -> Result<Voicing> {
    let parts: Vec<&str> = step.split(':').collect();
    let [s, a, t, b] = parts.as_slice() else {
        bail!("voicing '{step}' must have exactly four colon-separated pitches (S:A:T:B)");
    };
    Ok(Voicing::new(
        s.trim().parse().with_context(|| format!("invalid soprano pitch in '{step}'"))?,
        a.trim().parse().with_context(|| format!("invalid alto pitch in '{step}'"))?,
        t.trim().parse().with_context(|| format!("invalid tenor pitch in '{step}'"))?,
        b.trim().parse().with_context(|| format!("invalid bass pitch in '{step}'"))?,
    ))
}

fn print_response<T: serde::Serialize>(explanations: &str, response: &T, success: bool) -> Result<()> {
    if !explanations.is_empty() {
        println!("{explanations}\n");
    }
    let json = serde_json::to_string_pretty(response).context("failed to serialize JSON report")?;
    println!("{json}");
    if success { Ok(()) } else { bail!("request did not succeed") }
}
