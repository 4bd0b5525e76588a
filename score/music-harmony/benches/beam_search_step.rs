use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use music_harmony::chord_spec::{ChordQuality, ChordSpec};
use music_harmony::solver::{SolverConfig, solve};

fn bench_beam_width_scaling(c: &mut Criterion) {
    let bass_line = [48_i16, 50, 52, 53, 55, 53, 52, 48];
    let chords: Vec<_> = bass_line.iter().map(|&b| ChordSpec::new(b, ChordQuality::Major)).collect();

    let mut group = c.benchmark_group("beam_width_scaling");
    for &width in &[4_usize, 10, 25, 50] {
        group.throughput(Throughput::Elements(bass_line.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            let config = SolverConfig { beam_width: width, include_suspension_heuristic: false };
            b.iter(|| {
                let outcome = solve(&bass_line, &chords, Some(0), &config).expect("solves");
                black_box(outcome);
            });
        });
    }
    group.finish();
}

fn bench_progression_length_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("progression_length_scaling");
    for &bars in &[4_usize, 8, 16, 32] {
        let bass_line = cycling_bass_line(bars);
        let chords: Vec<_> = bass_line.iter().map(|&b| ChordSpec::new(b, ChordQuality::Major)).collect();
        group.throughput(Throughput::Elements(bass_line.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(bars), &bars, |b, _| {
            b.iter(|| {
                let outcome = solve(&bass_line, &chords, Some(0), &SolverConfig::default()).expect("solves");
                black_box(outcome);
            });
        });
    }
    group.finish();
}

fn cycling_bass_line(bars: usize) -> Vec<i16> {
    const PATTERN: [i16; 4] = [48, 53, 55, 48];
    (0..bars).map(|idx| PATTERN[idx % PATTERN.len()]).collect()
}

criterion_group!(beam_search_benches, bench_beam_width_scaling, bench_progression_length_scaling);
criterion_main!(beam_search_benches);
