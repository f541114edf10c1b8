// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! Ground-truth enumeration of the valid combinations, independent of the search.

use std::collections::HashSet;

use common::{combination_count, combinations, product, product_count, OverflowError, UVec};
use sut::{Case, Constraint, ItemId, SUT};

use crate::rejects_case;

/// Enumerate every constraint-valid combination of `combination_size` values from distinct
/// parameters over the full value matrix, in group order.
///
/// The size of this collection is the generation target: the search ends exactly when the ledger
/// holds this many combinations of the full size. The exact counts are verified to fit in the
/// 64-bit signed range before each enumerator runs.
pub(crate) fn find_expected_unique_combinations(
    sut: &SUT,
    matrix: &UVec<UVec<ItemId>>,
    constraints: &[Constraint],
    combination_size: usize,
) -> Result<Vec<Case>, OverflowError> {
    combination_count(matrix.len(), combination_size)?;

    let mut expected = Vec::new();
    for groups in combinations(matrix.as_slice(), combination_size) {
        let lists: Vec<&[ItemId]> = groups.iter().map(|group| group.as_slice()).collect();
        let lengths: Vec<usize> = lists.iter().map(|list| list.len()).collect();
        product_count(&lengths)?;

        for items in product(&lists) {
            let ids: UVec<ItemId> = items.into_iter().copied().collect();
            if !rejects_case(sut, constraints, ids.as_slice()) {
                expected.push(Case::from_items(sut, ids.as_slice()));
            }
        }
    }

    Ok(expected)
}

/// Explode the produced cases into their sub-combinations of the given size, keeping the first
/// occurrence of each.
pub(crate) fn explode_generated_combinations(generated: &[Case], combination_size: usize) -> Vec<Case> {
    let mut seen: HashSet<Case> = HashSet::new();
    let mut result = Vec::new();

    for case in generated {
        let entries: Vec<(&str, &str)> = case.iter().collect();
        for combination in combinations(&entries, combination_size) {
            let pairs = combination
                .into_iter()
                .map(|&(name, value)| (name.to_string(), value.to_string()))
                .collect();
            let combination = Case::from_pairs(pairs);
            if seen.insert(combination.clone()) {
                result.push(combination);
            }
        }
    }

    result
}
