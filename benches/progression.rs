use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lyric_sentiment::sentiment::{chunk_words, ProgressionPipelineBuilder};

fn lyrics(words: usize) -> String {
    let verse = ["sunshine", "on", "my", "shoulders", "makes", "me", "happy", "rain", "feels", "sad"];
    (0..words)
        .map(|i| verse[i % verse.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_chunking(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_words");

    for size in [10, 100, 1000, 10000] {
        let input = lyrics(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| chunk_words(black_box(input), 10))
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let pipeline = ProgressionPipelineBuilder::vader()
        .build()
        .expect("default options are valid");
    let mut group = c.benchmark_group("analyze_vader");

    for size in [10, 100, 1000] {
        let input = lyrics(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| pipeline.analyze(black_box(input)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chunking, bench_analyze);
criterion_main!(benches);
