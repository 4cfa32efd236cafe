// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use conj_scrape::scrape;

const DINER: &str = include_str!("../tests/fixtures/diner.html");
const S_ASSEOIR: &str = include_str!("../tests/fixtures/s_asseoir.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("standard_page", |b| {
        b.iter(|| {
            let out = scrape::parse_page(black_box(DINER), "dîner").map(|e| e.records.len());
            black_box(out)
        })
    });

    c.bench_function("dual_variant_page", |b| {
        b.iter(|| {
            let out = scrape::parse_page(black_box(S_ASSEOIR), "s'asseoir").map(|e| e.records.len());
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
