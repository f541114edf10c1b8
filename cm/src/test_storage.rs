// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use common::{u_vec, UVec};
use lazy_static::lazy_static;
use sut::ItemId;

use super::CombinationStorage;

lazy_static! {
    static ref SEQUENCE: Vec<ItemId> = vec![ItemId::new(0, 0), ItemId::new(1, 0), ItemId::new(2, 0)];
    static ref OTHER_SEQUENCE: Vec<ItemId> = vec![ItemId::new(0, 0), ItemId::new(1, 1), ItemId::new(2, 0)];
}

#[test]
fn test_empty_storage() {
    let storage = CombinationStorage::new(2);
    assert_eq!(storage.combination_size(), 2);
    assert_eq!(storage.unique_nwise_count(), 0);
    assert!(storage.node(ItemId::new(0, 0)).is_none());
    assert!(!storage.contains(&u_vec![ItemId::new(0, 0)]));
}

#[test]
fn test_record_sequence() {
    let mut storage = CombinationStorage::new(2);
    storage.record_sequence(&SEQUENCE);

    assert_eq!(storage.unique_nwise_count(), 3);
    for &id in SEQUENCE.iter() {
        assert!(storage.contains(&u_vec![id]), "{} must be covered", id);
    }
    assert!(storage.contains(&u_vec![ItemId::new(0, 0), ItemId::new(1, 0)]));
    assert!(storage.contains(&u_vec![ItemId::new(0, 0), ItemId::new(2, 0)]));
    assert!(storage.contains(&u_vec![ItemId::new(1, 0), ItemId::new(2, 0)]));
    assert!(!storage.contains(&u_vec![ItemId::new(1, 0), ItemId::new(0, 0)]), "Tuples are ordered");
}

#[test]
fn test_node_statistics() {
    let mut storage = CombinationStorage::new(2);
    storage.record_sequence(&SEQUENCE);

    let first = storage.node(ItemId::new(0, 0)).expect("The first value has a node");
    assert_eq!(first.usage_count(), 2);
    assert_eq!(first.inbound_len(), 0);
    assert_eq!(first.outbound_len(), 2);

    let middle = storage.node(ItemId::new(1, 0)).expect("The middle value has a node");
    assert_eq!(middle.usage_count(), 2);
    assert_eq!(middle.inbound_len(), 1);
    assert_eq!(middle.outbound_len(), 1);

    let last = storage.node(ItemId::new(2, 0)).expect("The last value has a node");
    assert_eq!(last.usage_count(), 2);
    assert_eq!(last.inbound_len(), 2);
    assert_eq!(last.outbound_len(), 0);
}

#[test]
fn test_re_recording_keeps_sets_but_bumps_counters() {
    let mut storage = CombinationStorage::new(2);
    storage.record_sequence(&SEQUENCE);
    storage.record_sequence(&SEQUENCE);

    assert_eq!(storage.unique_nwise_count(), 3);
    let first = storage.node(ItemId::new(0, 0)).expect("The first value has a node");
    assert_eq!(first.usage_count(), 4);
    assert_eq!(first.outbound_len(), 2);
}

#[test]
fn test_count_is_monotonic() {
    let mut storage = CombinationStorage::new(2);
    storage.record_sequence(&SEQUENCE);
    let after_first = storage.unique_nwise_count();
    storage.record_sequence(&OTHER_SEQUENCE);
    let after_second = storage.unique_nwise_count();

    assert!(after_first <= after_second);
    // The second sequence shares the (a0v0, a2v0) pair with the first.
    assert_eq!(after_second, 5);
}

#[test]
fn test_triple_wise_arities() {
    let mut storage = CombinationStorage::new(3);
    let sequence = [ItemId::new(0, 0), ItemId::new(1, 0), ItemId::new(2, 0), ItemId::new(3, 0)];
    storage.record_sequence(&sequence);

    // C(4, 3) distinct triples from one sequence.
    assert_eq!(storage.unique_nwise_count(), 4);
    assert!(storage.contains(&u_vec![ItemId::new(0, 0), ItemId::new(1, 0), ItemId::new(3, 0)]));

    // Each value takes part in three pairs and three triples.
    let node = storage.node(ItemId::new(1, 0)).expect("A recorded value has a node");
    assert_eq!(node.usage_count(), 6);
}
