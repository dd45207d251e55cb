//! Benchmark – `charbound::BoundedReader`
#![allow(missing_docs)]

use std::time::Duration;

use charbound::{BoundedReader, CharStream, StrStream};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Drain `text` through a reader bounded at half its length, using bulk reads
/// of `chunk` characters. Returns the number of characters read.
fn drain_bulk(text: &str, chunk: usize) -> usize {
    let bound = i64::try_from(text.len() / 2).expect("bound fits in i64");
    let mut reader = BoundedReader::new(StrStream::new(text), bound);
    let mut buf = vec!['\0'; chunk];
    let mut total = 0;
    while let Some(n) = reader.read_into(&mut buf, 0, chunk).unwrap() {
        total += n;
    }
    total
}

fn drain_single(text: &str) -> usize {
    let bound = i64::try_from(text.len() / 2).expect("bound fits in i64");
    let mut reader = BoundedReader::new(StrStream::new(text), bound);
    let mut total = 0;
    while reader.read_char().unwrap().is_some() {
        total += 1;
    }
    total
}

fn bench_bounded_read(c: &mut Criterion) {
    let text: String = std::iter::repeat_n("lorem ipsum ", 2_000).collect();

    let mut group = c.benchmark_group("bounded_read");
    group.bench_function("single", |b| {
        b.iter(|| black_box(drain_single(black_box(&text))));
    });
    for &chunk in &[16usize, 256, 4_096] {
        group.bench_with_input(BenchmarkId::new("bulk", chunk), &chunk, |b, &chunk| {
            b.iter(|| black_box(drain_bulk(black_box(&text), chunk)));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_bounded_read }
criterion_main!(benches);
