#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsonstep::{DEFAULT_MAX_DEPTH, Event, ParseError, Parser, ParserOptions};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 5; // 1 flag + 4-byte seed

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[b" ", b"\t", b"\n", b"\r"];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Mostly lets libFuzzer mutate; every tenth run writes a fresh header and a
/// sequence of well-formed values so the corpus keeps reaching deep states.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x07);
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let mut prefix = HEADER;
        while prefix < size.max(HEADER + 1) && prefix < max_size {
            let limit = max_size - prefix;
            prefix += append_value(&mut data[prefix..], size, limit);
            let limit = max_size - prefix;
            prefix += append_whitespace(&mut data[prefix..], limit);
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }
        let mut written = 0;
        for _ in 0..rng.random_range(1..=limit.min(4)) {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..=size * 2).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("serializable value");
    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(21)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::Number(i64::arbitrary(u)?.into()),
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn run(chunks: &[&[u8]], options: ParserOptions) -> Result<Vec<Event>, ParseError> {
    let mut parser = Parser::with_options(Vec::new(), options);
    for chunk in chunks {
        parser.feed(chunk)?;
    }
    parser.finish()
}

/// Splits `data` into chunks of pseudo-random sizes derived from `seed`.
/// Boundaries may fall inside multi-byte characters.
fn split_into_chunks(data: &[u8], seed: u64) -> Vec<&[u8]> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut chunks = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        let size = rng.random_range(1..=rest.len().min(16));
        let (chunk, tail) = rest.split_at(size);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

fn chunk_invariance(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let flags = data[0];
    let split_seed = u64::from(u32::from_le_bytes(data[1..5].try_into().unwrap()));
    let data = &data[HEADER..];

    let options = ParserOptions {
        allow_multiple_values: flags & 1 != 0,
        max_depth: if flags & 4 != 0 { 3 } else { DEFAULT_MAX_DEPTH },
    };

    let whole = run(&[data], options);
    let chunked = run(&split_into_chunks(data, split_seed), options);
    assert_eq!(whole, chunked, "chunking changed the result");

    let single: Vec<&[u8]> = data.chunks(1).collect();
    assert_eq!(whole, run(&single, options), "byte-at-a-time changed the result");

    if flags & 2 != 0 && !options.allow_multiple_values {
        if let Ok(value) = jsonstep::from_slice(data) {
            // Rendering is lossy for some numbers but always yields a document.
            let rendered = value.to_string();
            assert!(
                jsonstep::from_slice(rendered.as_bytes()).is_ok(),
                "rendered text {rendered:?} does not parse"
            );
        }
    }
}

fuzz_target!(|data: &[u8]| chunk_invariance(data));
