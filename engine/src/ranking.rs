// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! Weight computation for the candidate values of a parameter group.

use cm::CombinationStorage;
use common::{combinations, UVec};
use sut::ItemId;

/// Sort the candidate values of a group so that the most promising one comes first.
///
/// For every candidate the key counts, per arity, the combinations that appending the candidate to
/// the already-chosen prefix would add to the ledger, and combines them with the candidate's node
/// statistics. Ascending lexicographic comparison of the keys then realizes, in priority order:
/// most new full-size combinations first (negated count), fewest used outbound neighbors, fewest
/// new lower-arity combinations (highest arity first), lowest usage counter, most free inbound
/// neighbors (negated size).
///
/// The sort is stable, so candidates with equal keys keep their order from the previous ranking.
/// Keys are computed fresh on every forward entry into the group and are not stored on the items;
/// retries within the group reuse the existing order.
pub(crate) fn rank_group(
    storage: &CombinationStorage,
    combination_size: usize,
    group: &mut UVec<ItemId>,
    prefix: &[ItemId],
) {
    let mut keyed: Vec<(Vec<i64>, ItemId)> = Vec::with_capacity(group.len());

    for &item in group.iter() {
        let mut candidate: UVec<ItemId> = prefix.iter().copied().collect();
        candidate.push(item);

        // new_counts[k - 1] holds the number of k-combinations of the candidate assignment
        // that the ledger does not know yet. The tuples are pairwise distinct, so counting
        // non-members equals the size of the subtracted set.
        let mut new_counts: Vec<i64> = Vec::with_capacity(combination_size);
        for arity in 1..=combination_size {
            let mut count: i64 = 0;
            for combination in combinations(candidate.as_slice(), arity) {
                let ids: UVec<ItemId> = combination.into_iter().copied().collect();
                if !storage.contains(&ids) {
                    count += 1;
                }
            }
            new_counts.push(count);
        }

        let (usage, inbound, outbound) = match storage.node(item) {
            Some(node) => (
                node.usage_count() as i64,
                node.inbound_len() as i64,
                node.outbound_len() as i64,
            ),
            None => (0, 0, 0),
        };

        let mut key: Vec<i64> = Vec::with_capacity(combination_size + 3);
        key.push(-new_counts[combination_size - 1]);
        key.push(outbound);
        for arity in (0..combination_size - 1).rev() {
            key.push(new_counts[arity]);
        }
        key.push(usage);
        key.push(-inbound);

        keyed.push((key, item));
    }

    keyed.sort_by(|left, right| left.0.cmp(&right.0));

    for (slot, (_, item)) in group.iter_mut().zip(keyed) {
        *slot = item;
    }
}
