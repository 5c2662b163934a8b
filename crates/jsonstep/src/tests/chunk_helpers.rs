use alloc::{vec, vec::Vec};

use crate::{produce_chunks, produce_prefixes};

#[test]
fn produce_helpers_example() {
    let payload: &[u8] = br#"["foo","bar"]"#;
    let chunks = produce_chunks(payload, 5);
    assert_eq!(
        chunks,
        vec![
            &b"[\"f"[..],
            &b"oo\""[..],
            &b",\"b"[..],
            &b"ar\""[..],
            &b"]"[..],
        ]
    );
    let prefixes = produce_prefixes(payload, 5);
    assert_eq!(
        prefixes,
        vec![
            &b"[\"f"[..],
            &b"[\"foo\""[..],
            &b"[\"foo\",\"b"[..],
            &b"[\"foo\",\"bar\""[..],
            &b"[\"foo\",\"bar\"]"[..],
        ]
    );
}

#[test]
fn produce_helpers_split_multibyte() {
    let payload = "[\"f😊o\",\"b🚀r\"]".as_bytes();
    let chunks = produce_chunks(payload, 7);
    assert_eq!(chunks.concat(), payload);
    assert!(
        chunks
            .iter()
            .any(|chunk| core::str::from_utf8(chunk).is_err())
    );
    assert_eq!(produce_prefixes(payload, 7).last(), Some(&payload));
}

#[test]
fn more_parts_than_bytes() {
    let chunks = produce_chunks(b"[1]", 10);
    assert_eq!(chunks, vec![&b"["[..], &b"1"[..], &b"]"[..]]);
    assert!(produce_chunks(b"", 3).is_empty());
}

#[quickcheck_macros::quickcheck]
fn chunks_concatenate_to_payload(payload: Vec<u8>, parts: u8) -> bool {
    let parts = usize::from(parts) + 1;
    let chunks = produce_chunks(&payload, parts);
    chunks.len() <= parts && chunks.concat() == payload && chunks.iter().all(|c| !c.is_empty())
}
