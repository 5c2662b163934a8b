//! Benchmark – `jsonstep::Parser` fed in ever smaller chunks
#![allow(missing_docs)]

use std::{fmt::Write as _, time::Duration};

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jsonstep::{Event, Parser, TreeBuilder};

/// A single long string member, `{"data":"aaaa…"}`, exactly `target_len`
/// bytes long. Exercises the string fast path.
fn make_string_payload(target_len: usize) -> String {
    let overhead = "{\"data\":\"\"}".len();
    assert!(target_len >= overhead, "target_len must be >= {overhead}");

    let mut s = String::with_capacity(target_len);
    s.push_str("{\"data\":\"");
    s.extend(std::iter::repeat_n('a', target_len - overhead));
    s.push_str("\"}");
    debug_assert_eq!(s.len(), target_len);
    s
}

/// An array of small records with numbers, literals and nesting, at least
/// `target_len` bytes long. Exercises dispatch and the container scanners.
fn make_record_payload(target_len: usize) -> String {
    let mut s = String::from("[");
    let mut i = 0u32;
    while s.len() < target_len {
        if i > 0 {
            s.push(',');
        }
        write!(
            s,
            r#"{{"id":{i},"score":-{i}.25e-2,"ok":true,"tags":["x",null]}}"#
        )
        .unwrap();
        i += 1;
    }
    s.push(']');
    s
}

/// Feeds `payload` in `parts` chunks and returns the number of events, so
/// that Criterion can black-box the work.
fn run_events(payload: &[u8], parts: usize) -> usize {
    let chunk_size = payload.len().div_ceil(parts);
    let mut parser = Parser::new(Vec::<Event>::new());
    let mut produced = 0usize;
    for chunk in payload.chunks(chunk_size) {
        parser.feed(chunk).expect("valid payload");
        produced += parser.consumer().len();
        parser.consumer_mut().clear();
    }
    produced + parser.finish().expect("complete payload").len()
}

fn run_tree(payload: &[u8], parts: usize) -> usize {
    let chunk_size = payload.len().div_ceil(parts);
    let mut parser = Parser::new(TreeBuilder::new());
    for chunk in payload.chunks(chunk_size) {
        parser.feed(chunk).expect("valid payload");
    }
    parser.finish().expect("complete payload").values().len()
}

fn bench_chunked_parse(c: &mut Criterion) {
    let payloads = [
        ("string", make_string_payload(10_000)),
        ("records", make_record_payload(10_000)),
    ];

    let mut group = c.benchmark_group("chunked_parse");
    for (shape, payload) in &payloads {
        for &parts in &[1usize, 100, 1_000, 5_000] {
            group.bench_with_input(
                BenchmarkId::new(format!("{shape}/events"), parts),
                &parts,
                |b, &parts| b.iter(|| black_box(run_events(black_box(payload.as_bytes()), parts))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("{shape}/tree"), parts),
                &parts,
                |b, &parts| b.iter(|| black_box(run_tree(black_box(payload.as_bytes()), parts))),
            );
        }
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

criterion_group! { name = benches; config = criterion(); targets = bench_chunked_parse }
criterion_main!(benches);
