//! Detection throughput benchmarks
//!
//! These inputs resolve on the rule path, so the numbers reflect cleanup,
//! word splitting, and the rule engine rather than model file I/O.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glossa_api::{Language, LanguageDetectorBuilder};

fn bench_rule_path_detection(c: &mut Criterion) {
    let detector = LanguageDetectorBuilder::from_languages(&[
        Language::Chinese,
        Language::English,
        Language::Greek,
        Language::Japanese,
        Language::Russian,
        Language::Thai,
    ])
    .build()
    .unwrap();

    let inputs = [
        ("kana", "日本語を勉強するのはとても楽しいです"),
        ("greek", "αυτό είναι ένα ελληνικό κείμενο"),
        ("thai", "นี่คือข้อความภาษาไทย"),
    ];

    let mut group = c.benchmark_group("rule_path_detection");
    for (name, text) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| detector.detect_language_of(black_box(text)));
        });
    }
    group.finish();
}

fn bench_detector_construction(c: &mut Criterion) {
    c.bench_function("build_all_languages_detector", |b| {
        b.iter(|| {
            LanguageDetectorBuilder::from_all_languages()
                .build()
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_rule_path_detection, bench_detector_construction);
criterion_main!(benches);
