use std::hint::black_box;

use blitz_segment::{
    first_grapheme_cluster, first_grapheme_cluster_in_str, first_line_segment_in_str,
    first_sentence_in_str, first_word_in_str, step_str, string_width, Graphemes,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Mixed-script sample with emoji sequences and flags
const SAMPLE: &str = "This is \u{1F3F3}\u{FE0F}\u{200D}\u{1F308}, a test string \u{30C4} for grapheme cluster testing. \u{1F3CB}\u{1F3FD}\u{200D}\u{2640}\u{FE0F}\u{1F642}\u{1F642}";

fn benchmark_graphemes(c: &mut Criterion) {
    c.bench_function("graphemes: resumable str scanner", |b| {
        b.iter(|| {
            let mut rest = black_box(SAMPLE);
            let mut state = None;
            while !rest.is_empty() {
                let (_, next, next_state) = first_grapheme_cluster_in_str(rest, state);
                rest = next;
                state = Some(next_state);
            }
        });
    });

    c.bench_function("graphemes: resumable byte scanner", |b| {
        b.iter(|| {
            let mut rest = black_box(SAMPLE.as_bytes());
            let mut state = None;
            while !rest.is_empty() {
                let (_, next, next_state) = first_grapheme_cluster(rest, state);
                rest = next;
                state = Some(next_state);
            }
        });
    });

    c.bench_function("graphemes: eager cursor", |b| {
        b.iter(|| Graphemes::new(black_box(SAMPLE)).count());
    });
}

fn benchmark_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("families");
    let text = SAMPLE.repeat(16);

    group.bench_with_input(BenchmarkId::new("words", text.len()), &text, |b, text| {
        b.iter(|| {
            let mut rest = text.as_str();
            let mut state = None;
            while !rest.is_empty() {
                let (_, next, next_state) = first_word_in_str(rest, state);
                rest = next;
                state = Some(next_state);
            }
        });
    });

    group.bench_with_input(BenchmarkId::new("sentences", text.len()), &text, |b, text| {
        b.iter(|| {
            let mut rest = text.as_str();
            let mut state = None;
            while !rest.is_empty() {
                let (_, next, next_state) = first_sentence_in_str(rest, state);
                rest = next;
                state = Some(next_state);
            }
        });
    });

    group.bench_with_input(BenchmarkId::new("lines", text.len()), &text, |b, text| {
        b.iter(|| {
            let mut rest = text.as_str();
            let mut state = None;
            while !rest.is_empty() {
                let (_, next, _, next_state) = first_line_segment_in_str(rest, state);
                rest = next;
                state = Some(next_state);
            }
        });
    });

    group.bench_with_input(BenchmarkId::new("step", text.len()), &text, |b, text| {
        b.iter(|| {
            let mut rest = text.as_str();
            let mut state = None;
            let mut width = 0;
            while !rest.is_empty() {
                let (_, next, boundaries, next_state) = step_str(rest, state);
                width += boundaries.width();
                rest = next;
                state = Some(next_state);
            }
            width
        });
    });

    group.bench_with_input(BenchmarkId::new("width", text.len()), &text, |b, text| {
        b.iter(|| string_width(black_box(text)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_graphemes, benchmark_families);
criterion_main!(benches);
