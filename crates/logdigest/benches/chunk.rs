use criterion::{Criterion, criterion_group, criterion_main};
use logdigest_core::{chunk, ChunkConfig};
use std::hint::black_box;

fn digest_like_text(len: usize) -> String {
    let mut text = String::from("=== LOG DIGEST (0 lines) ===\n");
    let mut i = 0usize;
    while text.len() < len {
        if i % 5_000 == 0 {
            text.push_str(&format!("\n=== SECTION {} ===\n", i / 5_000));
        }
        text.push_str(&format!("2024-03-01T10:00:00Z INFO served request {}\n", i));
        i += 1;
    }
    text
}

fn bench_chunk_2mb(c: &mut Criterion) {
    let text = digest_like_text(2_000_000);
    let config = ChunkConfig::default();

    c.bench_function("chunk_2mb_default", |b| {
        b.iter(|| chunk(black_box(&text), &config));
    });
}

fn bench_chunk_no_boundaries(c: &mut Criterion) {
    let text = "x".repeat(1_000_000);
    let config = ChunkConfig::default();

    c.bench_function("chunk_1mb_hard_split", |b| {
        b.iter(|| chunk(black_box(&text), &config));
    });
}

criterion_group!(benches, bench_chunk_2mb, bench_chunk_no_boundaries);
criterion_main!(benches);
