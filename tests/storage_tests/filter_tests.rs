//! Tests for QuestionStore::filter
//!
//! These tests verify:
//! - Ascending id order
//! - Ignore list, active predicate, limit and offset
//! - Empty results and scan abort on corrupt records

use questionkv::model::Filter;
use questionkv::storage::{JsonCodec, ProtobufCodec, QuestionStore};
use questionkv::{Question, QuestionError, QuestionFilter};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

/// Store with one question per flag, ids assigned 1..=n in order
fn store_with(active_flags: &[bool]) -> QuestionStore {
    let store = QuestionStore::in_memory(JsonCodec).unwrap();
    for (i, &active) in active_flags.iter().enumerate() {
        store
            .put(Question::new(format!("q{}", i + 1), active, i % 2 == 0))
            .unwrap();
    }
    store
}

fn ids(questions: &[Question]) -> Vec<u64> {
    questions.iter().map(|q| q.id).collect()
}

// =============================================================================
// Predicate and exclusion
// =============================================================================

#[test]
fn test_filter_excludes_ignored_ids() {
    let store = store_with(&[true, true, true, true]);

    let result = store
        .filter(&QuestionFilter::new(true).limit(10).ignore([2]))
        .unwrap();

    assert_eq!(ids(&result), vec![1, 3, 4]);
}

#[test]
fn test_filter_by_inactive() {
    let store = store_with(&[true, false, true, false]);

    let result = store.filter(&QuestionFilter::new(false).limit(10)).unwrap();

    assert_eq!(ids(&result), vec![2, 4]);
    assert!(result.iter().all(|q| !q.is_active));
}

#[test]
fn test_filter_by_active() {
    let store = store_with(&[true, false, true, false]);

    let result = store.filter(&QuestionFilter::new(true).limit(10)).unwrap();

    assert_eq!(ids(&result), vec![1, 3]);
}

#[test]
fn test_filter_ignoring_unknown_ids_is_harmless() {
    let store = store_with(&[true, true]);

    let result = store
        .filter(&QuestionFilter::new(true).limit(10).ignore([0, 77, u64::MAX]))
        .unwrap();

    assert_eq!(ids(&result), vec![1, 2]);
}

#[test]
fn test_filter_returns_full_records() {
    let store = store_with(&[true]);

    let result = store.filter(&QuestionFilter::new(true).limit(1)).unwrap();

    assert_eq!(result, vec![Question::new("q1", true, true).with_id(1)]);
}

// =============================================================================
// Limit and offset
// =============================================================================

#[test]
fn test_filter_limit_takes_smallest_ids() {
    let store = store_with(&[true; 10]);

    let result = store.filter(&QuestionFilter::new(true).limit(3)).unwrap();

    assert_eq!(ids(&result), vec![1, 2, 3]);
}

#[test]
fn test_filter_limit_zero_is_empty() {
    let store = store_with(&[true; 5]);

    let result = store.filter(&QuestionFilter::new(true)).unwrap();

    assert!(result.is_empty());
}

#[test]
fn test_filter_offset_skips_matches_only() {
    // ids: 1 active, 2 inactive, 3 active, 4 inactive, 5 active, 6 active
    let store = store_with(&[true, false, true, false, true, true]);

    let result = store
        .filter(&QuestionFilter::new(true).limit(2).offset(2))
        .unwrap();

    assert_eq!(ids(&result), vec![5, 6]);
}

#[test]
fn test_filter_offset_does_not_count_ignored_ids() {
    let store = store_with(&[true; 6]);

    let result = store
        .filter(&QuestionFilter::new(true).limit(10).offset(1).ignore([1, 2]))
        .unwrap();

    assert_eq!(ids(&result), vec![4, 5, 6]);
}

#[test]
fn test_filter_offset_past_end_is_empty() {
    let store = store_with(&[true; 3]);

    let result = store
        .filter(&QuestionFilter::new(true).limit(10).offset(3))
        .unwrap();

    assert!(result.is_empty());
}

#[test]
fn test_filter_pages_cover_everything_once() {
    let store = store_with(&[true; 7]);

    let mut seen = Vec::new();
    for page in 0..4 {
        let result = store
            .filter(&QuestionFilter::new(true).limit(2).offset(page * 2))
            .unwrap();
        seen.extend(ids(&result));
    }

    assert_eq!(seen, (1..=7).collect::<Vec<u64>>());
}

// =============================================================================
// Ordering and edge cases
// =============================================================================

#[test]
fn test_filter_orders_by_numeric_id_across_byte_boundaries() {
    let store = QuestionStore::in_memory(ProtobufCodec).unwrap();
    for id in [300u64, 2, 256, 1 << 33, 255, 1] {
        store.put(Question::new("x", true, false).with_id(id)).unwrap();
    }

    let result = store.filter(&QuestionFilter::new(true).limit(10)).unwrap();

    assert_eq!(ids(&result), vec![1, 2, 255, 256, 300, 1 << 33]);
}

#[test]
fn test_filter_empty_store_returns_empty_vec() {
    let store = QuestionStore::in_memory(JsonCodec).unwrap();

    let result = store.filter(&QuestionFilter::new(true).limit(10)).unwrap();

    assert!(result.is_empty());
}

#[test]
fn test_filter_no_match_returns_empty_vec() {
    let store = store_with(&[true, true]);

    let result = store.filter(&QuestionFilter::new(false).limit(10)).unwrap();

    assert!(result.is_empty());
}

#[test]
fn test_filter_aborts_on_corrupt_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("questions.redb");

    {
        let store = QuestionStore::open(&path, ProtobufCodec).unwrap();
        store.put(Question::new("binary", true, false)).unwrap();
    }

    let store = QuestionStore::open(&path, JsonCodec).unwrap();
    match store.filter(&QuestionFilter::new(true).limit(10)) {
        Err(QuestionError::CorruptRecord(_)) => {}
        other => panic!("expected CorruptRecord, got {:?}", other),
    }
}

#[test]
fn test_filter_skips_ignored_corrupt_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("questions.redb");

    {
        let store = QuestionStore::open(&path, ProtobufCodec).unwrap();
        store.put(Question::new("binary", true, false)).unwrap();
    }

    let store = QuestionStore::open(&path, JsonCodec).unwrap();
    store.put(Question::new("json", true, false)).unwrap();

    // id 1 is never decoded because the ignore check comes first
    let result = store
        .filter(&QuestionFilter::new(true).limit(10).ignore([1]))
        .unwrap();

    assert_eq!(ids(&result), vec![2]);
}

// =============================================================================
// Filter message conversion
// =============================================================================

#[test]
fn test_filter_from_rpc_message() {
    let message = Filter {
        is_active: true,
        limit: 5,
        offset: 2,
        ignore_ids: vec![3, 4, 3],
    };

    let filter = QuestionFilter::from(message);

    assert_eq!(filter, QuestionFilter::new(true).limit(5).offset(2).ignore([3, 4]));
}

#[test]
fn test_filter_from_rpc_message_clamps_negatives() {
    let message = Filter {
        is_active: false,
        limit: -1,
        offset: -10,
        ignore_ids: Vec::new(),
    };

    let filter = QuestionFilter::from(message);

    assert_eq!(filter.limit, 0);
    assert_eq!(filter.offset, 0);
}
