//! Tests for id key encoding

use questionkv::storage::{decode_key, encode_key, KEY_SIZE};
use questionkv::QuestionError;

#[test]
fn test_encode_key_is_big_endian() {
    assert_eq!(encode_key(1), [0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(encode_key(0x0102_0304_0506_0708), [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_decode_key_inverts_encode() {
    for id in [0, 1, 255, 256, 65_535, 1 << 32, u64::MAX - 1, u64::MAX] {
        assert_eq!(decode_key(&encode_key(id)).unwrap(), id);
    }
}

#[test]
fn test_key_order_matches_numeric_order() {
    let ids = [0u64, 1, 2, 255, 256, 1000, 65_536, 1 << 40, u64::MAX];

    for pair in ids.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            encode_key(a) < encode_key(b),
            "key({}) should sort before key({})",
            a,
            b
        );
    }
}

#[test]
fn test_decode_key_rejects_wrong_length() {
    for len in [0, 1, 7, 9, 16] {
        let bytes = vec![0u8; len];
        match decode_key(&bytes) {
            Err(QuestionError::CorruptRecord(_)) => {}
            other => panic!("expected CorruptRecord for {} bytes, got {:?}", len, other),
        }
    }
    assert_eq!(KEY_SIZE, 8);
}
