// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This module contains the lazy [combinations] and [product] enumerators and their exact counting functions.

use crate::UVec;

/// Error indicating an exact combination count does not fit in a signed 64-bit integer.
///
/// Configurations whose counts overflow are unsupported and must be rejected before any search runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OverflowError;

impl std::fmt::Display for OverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The exact combination count exceeds the 64-bit signed integer range")
    }
}

/// Calculate the exact binomial coefficient `C(n, r)`.
///
/// Uses the multiplicative formula, dividing at every step to keep the intermediate products small.
/// Every multiplication is checked; an intermediate product outside the [i64] range is an [OverflowError].
/// `C(n, 0)` is 1 and `r > n` yields 0.
pub fn combination_count(n: usize, r: usize) -> Result<i64, OverflowError> {
    if r > n {
        return Ok(0);
    }

    let mut remaining = i64::try_from(n).map_err(|_| OverflowError)?;
    let steps = r.min(n - r) as i64;
    let mut count: i64 = 1;

    let mut step: i64 = 1;
    while step <= steps {
        count = if remaining % step == 0 {
            count.checked_mul(remaining / step)
        } else if count % step == 0 {
            (count / step).checked_mul(remaining)
        } else {
            // step divides the full product even when it divides neither factor
            let shared = gcd(remaining, step);
            (count / (step / shared)).checked_mul(remaining / shared)
        }
        .ok_or(OverflowError)?;
        step += 1;
        remaining -= 1;
    }

    Ok(count)
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let rest = a % b;
        a = b;
        b = rest;
    }
    a
}

/// Calculate the exact number of tuples in the Cartesian product of sequences with the given lengths.
///
/// The empty input yields 1 (the empty tuple). Checked like [combination_count].
pub fn product_count(lengths: &[usize]) -> Result<i64, OverflowError> {
    let mut count: i64 = 1;
    for &length in lengths {
        let length = i64::try_from(length).map_err(|_| OverflowError)?;
        count = count.checked_mul(length).ok_or(OverflowError)?;
    }
    Ok(count)
}

/// Iterator over all `r` length subsequences of a slice, chosen by position.
///
/// See [combinations].
pub struct Combinations<'a, T> {
    elements: &'a [T],
    r: usize,
    indices: UVec<usize>,
    started: bool,
    done: bool,
}

/// Return an [Iterator] over the `r` length subsequences of elements from the input slice.
///
/// Elements are treated as unique based on their position, not on their value.
/// Subsequences are produced in lexicographic index order, advancing the rightmost index that is
/// not yet at its maximum and resetting every index to its right to consecutive successors.
///   * `combinations(&["A", "B", "C", "D"], 2)` --> AB AC AD BC BD CD
///   * `combinations(&[0, 1, 2, 3], 3)` --> 012 013 023 123
///
/// `r < 1` and `r > elements.len()` yield an empty iterator.
pub fn combinations<T>(elements: &[T], r: usize) -> Combinations<'_, T> {
    Combinations {
        elements,
        r,
        indices: UVec::with_capacity(r),
        started: false,
        done: r < 1 || r > elements.len(),
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = UVec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            for index in 0..self.r {
                self.indices.push(index);
            }
        } else {
            let len = self.elements.len();
            let mut position = self.r;
            loop {
                if position == 0 {
                    self.done = true;
                    return None;
                }
                position -= 1;
                if self.indices[position] != len - self.r + position {
                    break;
                }
            }
            self.indices[position] += 1;
            for index in position + 1..self.r {
                self.indices[index] = self.indices[index - 1] + 1;
            }
        }

        Some(self.indices.iter().map(|&index| &self.elements[index]).collect())
    }
}

/// Iterator over the Cartesian product of a list of slices.
///
/// See [product].
pub struct Product<'a, T> {
    lists: UVec<&'a [T]>,
    counters: UVec<usize>,
    started: bool,
    done: bool,
}

/// Return an [Iterator] over the Cartesian product of the input slices.
///
/// Tuples are produced in odometer order: the last component varies fastest, carrying into
/// earlier components on overflow. Any empty input slice yields an empty iterator; the empty
/// input list yields a single empty tuple.
pub fn product<'a, T>(lists: &[&'a [T]]) -> Product<'a, T> {
    Product {
        lists: lists.iter().copied().collect(),
        counters: lists.iter().map(|_| 0).collect(),
        started: false,
        done: lists.iter().any(|list| list.is_empty()),
    }
}

impl<'a, T> Iterator for Product<'a, T> {
    type Item = UVec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
        } else {
            let mut position = self.lists.len();
            loop {
                if position == 0 {
                    self.done = true;
                    return None;
                }
                position -= 1;
                self.counters[position] += 1;
                if self.counters[position] < self.lists[position].len() {
                    break;
                }
                self.counters[position] = 0;
            }
        }

        Some(self.counters.iter().zip(self.lists.iter()).map(|(&index, list)| &list[index]).collect())
    }
}
