use criterion::{black_box, criterion_group, criterion_main, Criterion};
use er_analyzer::{normalize, EmotionAnalyzer};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_analyze(c: &mut Criterion) {
    let analyzer = EmotionAnalyzer::default();
    let texts = vec![
        "I feel nervous about my first job interview",
        "I am so excited about my vacation",
        "I feel sad and lonely today",
        "I am really angry about this situation",
        "hi",
        "The quick brown fox jumps over the lazy dog",
        "I'm extremely frustrated, totally stuck and very tired of trying!",
        "Feeling calm, centered and at ease after a quiet walk by the lake.",
    ];

    c.bench_function("analyze_1000_mixed", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            for _ in 0..125 {
                for text in &texts {
                    black_box(analyzer.analyze_with_rng(text, &mut rng));
                }
            }
        })
    });

    let long = "I am very happy but also a bit worried about the exam tomorrow. ".repeat(16);
    c.bench_function("analyze_1000_long", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            for _ in 0..1000 {
                black_box(analyzer.analyze_with_rng(&long, &mut rng));
            }
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    let text = "Wow!!! I can't WAIT -- this is (really) the BEST day... ever?! #blessed ".repeat(10);
    c.bench_function("normalize_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(normalize(&text));
            }
        })
    });
}

criterion_group!(benches, bench_analyze, bench_normalize);
criterion_main!(benches);
