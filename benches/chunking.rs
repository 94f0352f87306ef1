use criterion::{Criterion, criterion_group, criterion_main};
use edu_knowledge::index::{PassageIndex, seed_documents};
use edu_knowledge::search::{SearchOptions, search};
use edu_knowledge::text::{ChunkingConfig, chunk_text};
use std::hint::black_box;

fn corpus_text() -> String {
    seed_documents()
        .iter()
        .map(|document| document.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .repeat(20)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let text = corpus_text();
    let config = ChunkingConfig::default();
    c.bench_function("chunking", |b| {
        b.iter(|| chunk_text(black_box(&text), black_box(&config)))
    });

    let mut index = PassageIndex::new();
    for _ in 0..20 {
        for document in seed_documents() {
            index.ingest(document).expect("seed documents ingest");
        }
    }
    let options = SearchOptions::default();
    c.bench_function("search", |b| {
        b.iter(|| search(black_box(&index), black_box("derivative slope tangent"), &options))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
