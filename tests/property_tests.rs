//! Property-based tests for partitioning and composition.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use hierarchy_builder::core::fib::{fib, FibError, MAX_FIB_INDEX};
use hierarchy_builder::core::hierarchy::{compose, compose_from};
use hierarchy_builder::core::partition::{fib_chunks, fib_chunks_from, partition};
use hierarchy_builder::core::types::{Slot, SlotKind, SlotValue};

/// Strategy for generating arbitrary slots.
fn slot() -> impl Strategy<Value = Slot> {
    prop_oneof![
        any::<i32>().prop_map(|v| Slot::new(SlotValue::Int(v))),
        any::<char>().prop_map(|c| Slot::new(SlotValue::Char(c))),
        any::<bool>().prop_map(|b| Slot::new(SlotValue::Bool(b))),
        any::<i64>().prop_map(|v| Slot::new(SlotValue::Long(v))),
    ]
}

/// Strategy for generating slot sequences.
fn slots() -> impl Strategy<Value = Vec<Slot>> {
    prop::collection::vec(slot(), 0..200)
}

proptest! {
    /// fib satisfies its recurrence everywhere below the ceiling.
    #[test]
    fn fib_recurrence(n in 2..=MAX_FIB_INDEX) {
        prop_assert_eq!(fib(n).unwrap(), fib(n - 1).unwrap() + fib(n - 2).unwrap());
    }

    /// Every index past the ceiling overflows.
    #[test]
    fn fib_overflow_past_ceiling(n in (MAX_FIB_INDEX + 1)..usize::MAX) {
        prop_assert_eq!(fib(n), Err(FibError::ArithmeticOverflow { index: n }));
    }

    /// Concatenating every chunk reconstructs the input.
    #[test]
    fn partition_is_lossless(seq in prop::collection::vec(any::<u16>(), 0..300), start in 0usize..6) {
        let rebuilt: Vec<u16> = fib_chunks_from(&seq, start)
            .flat_map(|p| p.chunk.iter().copied())
            .collect();
        prop_assert_eq!(rebuilt, seq);
    }

    /// A single partition splits exactly at min(fib(depth), len).
    #[test]
    fn partition_splits_at_fib(seq in prop::collection::vec(any::<u8>(), 0..100), depth in 0usize..12) {
        let p = partition(&seq, depth);
        let expected = (fib(depth).unwrap() as usize).min(seq.len());
        prop_assert_eq!(p.chunk.len(), expected);
        prop_assert_eq!(p.chunk.len() + p.remainder.len(), seq.len());
        prop_assert_eq!(p.is_truncated(), seq.len() < fib(depth).unwrap() as usize);
    }

    /// Only the final chunk may fall short of fib(depth).
    #[test]
    fn only_last_chunk_truncated(seq in prop::collection::vec(any::<u8>(), 1..300)) {
        let chunks: Vec<_> = fib_chunks(&seq).collect();
        let (last, rest) = chunks.split_last().unwrap();
        for p in rest {
            prop_assert!(!p.is_truncated());
            prop_assert_eq!(p.chunk.len() as u64, p.nominal_len);
        }
        prop_assert!(!last.chunk.is_empty());
        prop_assert!(last.remainder.is_empty());
    }

    /// Traversal visits every value in input order.
    #[test]
    fn compose_preserves_order(seq in slots()) {
        let h = compose(seq.clone());
        prop_assert_eq!(h.unit_count(), seq.len());
        let visited: Vec<Slot> = h.values().cloned().collect();
        prop_assert_eq!(&visited, &seq);
        prop_assert_eq!(h.into_values(), seq);
    }

    /// Levels line up with the partitioner's chunks.
    #[test]
    fn compose_matches_partition(seq in slots(), start in 0usize..5) {
        let h = compose_from(seq.clone(), start);
        let levels: Vec<(usize, Vec<Slot>)> = h
            .levels()
            .map(|l| (l.depth(), l.head_chain().iter().cloned().collect()))
            .collect();
        let chunks: Vec<(usize, Vec<Slot>)> = fib_chunks_from(&seq, start)
            .map(|p| (p.depth, p.chunk.to_vec()))
            .collect();
        prop_assert_eq!(levels, chunks);
    }

    /// Composing the same input twice gives equal, independently owned trees.
    #[test]
    fn compose_is_idempotent(seq in slots()) {
        let first = compose(seq.clone());
        let second = compose(seq);
        prop_assert_eq!(first.fingerprint(), second.fingerprint());
        prop_assert!(first == second);
        if let (Some(a), Some(b)) = (first.values().next(), second.values().next()) {
            prop_assert!(!std::ptr::eq(a, b));
        };
    }

    /// Slot text round-trips through Display and parse.
    #[test]
    fn slot_text_roundtrip(s in slot()) {
        let text = s.to_string();
        let parsed = Slot::parse(&text).unwrap();
        prop_assert_eq!(parsed, s);
    }

    /// Slot JSON round-trips through serde.
    #[test]
    fn slot_serde_roundtrip(s in slot()) {
        let json = serde_json::to_string(&s).unwrap();
        let parsed: Slot = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, s);
    }

    /// A bare kind parses to that kind's default value.
    #[test]
    fn bare_kind_is_default(kind in prop::sample::select(SlotKind::ALL.to_vec())) {
        let slot = Slot::parse(kind.as_str()).unwrap();
        prop_assert_eq!(slot.value(), &kind.default_value());
    }
}
