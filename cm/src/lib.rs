// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides the [CombinationStorage] coverage ledger used during case generation.
//!
//! The ledger remembers, for every arity up to the configured combination size, which ordered
//! value combinations the finalized assignments have already produced, together with per-value
//! usage statistics ([Node]). The engine ranks candidate values against this memory and records
//! every finalized assignment into it.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::collections::{HashMap, HashSet};

use common::{combinations, UVec};
use sut::ItemId;

#[cfg(test)]
mod test_storage;

/// Per-value usage and adjacency statistics.
///
/// A node exists once its value appeared in a finalized assignment. The counter counts every
/// recorded combination of arity two or higher containing the value, re-recorded ones included.
#[derive(Debug, Default)]
pub struct Node {
    counter: usize,
    inbound: HashSet<ItemId>,
    outbound: HashSet<ItemId>,
}

impl Node {
    /// How many finalized combinations include this value.
    pub fn usage_count(&self) -> usize {
        self.counter
    }

    /// The number of distinct values recorded before this one in any finalized combination.
    pub fn inbound_len(&self) -> usize {
        self.inbound.len()
    }

    /// The number of distinct values recorded after this one in any finalized combination.
    pub fn outbound_len(&self) -> usize {
        self.outbound.len()
    }

    fn record(&mut self, before: &[ItemId], after: &[ItemId]) {
        self.counter += 1;
        self.inbound.extend(before.iter().copied());
        self.outbound.extend(after.iter().copied());
    }
}

/// The coverage ledger of one generation session.
///
/// For every arity `k` in `1..=n` it holds the set of already-covered combinations, each an
/// ordered tuple of [ItemId]s in parameter-group order. [CombinationStorage::record_sequence] is
/// the only mutator; lookups used for ranking never change the ledger.
pub struct CombinationStorage {
    n: usize,
    nodes: HashMap<ItemId, Node>,
    combinations: UVec<HashSet<UVec<ItemId>>>,
}

impl CombinationStorage {
    /// Create an empty ledger for the given combination size.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            nodes: HashMap::new(),
            combinations: (0..n).map(|_| HashSet::new()).collect(),
        }
    }

    /// The combination size this ledger tracks.
    pub fn combination_size(&self) -> usize {
        self.n
    }

    /// The number of unique combinations of the full combination size covered so far.
    ///
    /// Monotonically non-decreasing over the session.
    pub fn unique_nwise_count(&self) -> usize {
        self.combinations[self.n - 1].len()
    }

    /// Whether the given ordered tuple is already covered at its arity.
    pub fn contains(&self, ids: &UVec<ItemId>) -> bool {
        self.combinations[ids.len() - 1].contains(ids)
    }

    /// The statistics node of the given value, if the value was ever recorded.
    ///
    /// An absent node reads as all-zero statistics; ranking lookups must not create nodes.
    pub fn node(&self, id: ItemId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Record a finalized assignment: every positional sub-combination of every arity up to the
    /// combination size is inserted into its arity set, and the node statistics are updated.
    pub fn record_sequence(&mut self, sequence: &[ItemId]) {
        for arity in 1..=self.n {
            for combination in combinations(sequence, arity) {
                let ids: UVec<ItemId> = combination.into_iter().copied().collect();
                self.record_combination(ids);
            }
        }
    }

    fn record_combination(&mut self, ids: UVec<ItemId>) {
        if ids.len() == 1 {
            self.nodes.entry(ids[0]).or_insert_with(Node::default);
        } else {
            for (position, &id) in ids.iter().enumerate() {
                let node = self.nodes.entry(id).or_insert_with(Node::default);
                node.record(&ids[..position], &ids[position + 1..]);
            }
        }

        self.combinations[ids.len() - 1].insert(ids);
    }
}
