use std::io;

use chemspell::{enumerate, has_segmentation, precompute, segment, PERIODIC_TABLE};
use criterion::*;

const WORDS: [&str; 6] = ["bacon", "cook", "hospital", "internationalization", "jam", "sos"];

fn spell_words() {
    for word in WORDS {
        let _ = black_box(segment(word, &PERIODIC_TABLE));
    }
}

fn spell_benchmark(c: &mut Criterion) {
    c.bench_function("segment words", |b| b.iter(spell_words));
    let long = "ba".repeat(2000);
    c.bench_function("segment long word", |b| {
        b.iter(|| has_segmentation(black_box(long.as_str()), &PERIODIC_TABLE))
    });
}

fn enumerate_benchmark(c: &mut Criterion) {
    c.bench_function("enumerate length 3", |b| {
        b.iter(|| enumerate(3).map(|e| e.count()))
    });
    c.bench_function("precompute length 3", |b| {
        b.iter(|| precompute(3, &*PERIODIC_TABLE, io::sink()))
    });
}

criterion_group!(benches, spell_benchmark, enumerate_benchmark);
criterion_main!(benches);
