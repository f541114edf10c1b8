// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides the AllPairs case-construction engine.
//!
//! A session is configured through the [AllPairsBuilder] and produces its cases lazily through the
//! [Iterator] implementation of [AllPairs]. Each case is found by a greedy, weight-guided
//! backtracking search over the parameter groups: the candidate values of the next group are
//! ranked by how many uncovered combinations they would contribute, constraints prune every
//! partial assignment, and a finalized assignment is only emitted when it covers at least one new
//! combination of the full combination size. Generation ends when the number of covered
//! combinations reaches the independently enumerated total of valid ones.
//!
//! ```
//! use engine::AllPairsBuilder;
//! use sut::Parameter;
//!
//! let cases: Vec<_> = AllPairsBuilder::new()
//!     .with_parameter(Parameter::new("OS", &["Windows", "Linux"]))
//!     .with_parameter(Parameter::new("Drive", &["HDD", "SSD"]))
//!     .build()
//!     .expect("A valid configuration")
//!     .collect();
//! assert_eq!(cases.len(), 4);
//! ```

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use cm::CombinationStorage;
use common::{u_vec, UVec, MIN_COMBINATION_SIZE};
use sut::{Case, ConstrainableCase, Constraint, ItemId, Parameter, ValidationError, SUT};

mod expected;
mod ranking;

#[cfg(test)]
mod test;

/// The observer invoked with the 1-based index of every produced case.
pub type CaseObserver = Box<dyn FnMut(usize, &Case)>;

/// The configuration front-end of the engine.
///
/// Collects parameters, constraints, the combination size (default 2, pairwise), and the optional
/// progress reporting, then validates the whole configuration in [AllPairsBuilder::build].
pub struct AllPairsBuilder {
    parameters: Vec<Parameter>,
    constraints: Vec<Constraint>,
    combination_size: usize,
    observer: Option<CaseObserver>,
    print_each_case: bool,
}

impl AllPairsBuilder {
    /// Create a builder with no parameters, no constraints, and combination size 2.
    pub fn new() -> Self {
        Self {
            parameters: Vec::new(),
            constraints: Vec::new(),
            combination_size: MIN_COMBINATION_SIZE,
            observer: None,
            print_each_case: false,
        }
    }

    /// Add one parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add a list of parameters.
    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// Add one constraint predicate.
    ///
    /// A candidate (partial) case is dropped as soon as any constraint returns `Some(true)` for
    /// it. Returning [None] marks the constraint as non-applicable to the given assignment, which
    /// never rejects; use the `?` operator on [ConstrainableCase::get] lookups to get this
    /// behavior for unassigned and unknown parameters:
    ///
    /// ```
    /// # use engine::AllPairsBuilder;
    /// AllPairsBuilder::new()
    ///     .with_constraint(|c| Some(c.get("OS")? == "Linux" && c.get("Drive")? == "HDD"));
    /// ```
    pub fn with_constraint<F>(mut self, constraint: F) -> Self
    where
        F: Fn(&ConstrainableCase) -> Option<bool> + 'static,
    {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Add a list of already boxed constraint predicates.
    pub fn with_constraints(mut self, constraints: Vec<Constraint>) -> Self {
        self.constraints.extend(constraints);
        self
    }

    /// Set the test combination size: 2 is pairwise, 3 is triplewise, and so on.
    pub fn with_combination_size(mut self, combination_size: usize) -> Self {
        self.combination_size = combination_size;
        self
    }

    /// Install an observer invoked once per produced case with its 1-based index.
    ///
    /// For diagnostics only; the observer cannot influence the generation.
    pub fn with_case_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(usize, &Case) + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Print every case as it is produced.
    ///
    /// Useful to identify problems when generation takes too long.
    pub fn print_each_case_during_generation(mut self) -> Self {
        self.print_each_case = true;
        self
    }

    /// Validate the configuration and construct the generation session.
    ///
    /// All configuration errors of the [ValidationError] taxonomy are reported here, before any
    /// search runs; this includes the overflow check on the exact combination counts.
    pub fn build(self) -> Result<AllPairs, ValidationError> {
        let sut = SUT::new(self.parameters, self.combination_size)?;

        let matrix: UVec<UVec<ItemId>> = (0..sut.parameter_count())
            .map(|parameter| {
                (0..sut.values[parameter].len())
                    .map(|value| ItemId::new(parameter, value))
                    .collect()
            })
            .collect();

        let expected =
            expected::find_expected_unique_combinations(&sut, &matrix, &self.constraints, self.combination_size)?;

        Ok(AllPairs {
            sut,
            constraints: self.constraints,
            combination_size: self.combination_size,
            storage: CombinationStorage::new(self.combination_size),
            matrix,
            expected,
            generated: Vec::new(),
            observer: self.observer,
            print_each_case: self.print_each_case,
            exhausted: false,
        })
    }
}

impl Default for AllPairsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The search direction between two steps of the case construction loop.
#[derive(Clone, Copy, Eq, PartialEq)]
enum Direction {
    /// Enter the next group: rank it and start at its best candidate.
    Forward,
    /// Stay in the current group and try its next candidate.
    Retry,
    /// Give up on the current group and advance the previous one.
    Backtrack,
}

/// One generation session.
///
/// Produces its cases lazily through [Iterator::next]; the session owns all search state, so two
/// sessions built from the same inputs produce the same sequence independently.
pub struct AllPairs {
    sut: SUT,
    constraints: Vec<Constraint>,
    combination_size: usize,
    storage: CombinationStorage,
    /// One group of candidate ids per parameter; re-sorted in place by the ranking.
    matrix: UVec<UVec<ItemId>>,
    expected: Vec<Case>,
    generated: Vec<Case>,
    observer: Option<CaseObserver>,
    print_each_case: bool,
    exhausted: bool,
}

impl AllPairs {
    /// The consolidated test model this session generates for.
    pub fn parameters(&self) -> &SUT {
        &self.sut
    }

    /// The configured test combination size.
    pub fn combination_size(&self) -> usize {
        self.combination_size
    }

    /// The number of configured constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// The cases produced so far.
    pub fn generated_cases(&self) -> &[Case] {
        &self.generated
    }

    /// The ground truth: every constraint-valid combination of the configured size, enumerated
    /// independently of the search over the full value matrix.
    pub fn expected_unique_combinations(&self) -> &[Case] {
        &self.expected
    }

    /// The combinations of the configured size covered by the cases produced so far, derived by
    /// exploding every produced case into its sub-combinations.
    ///
    /// Once the session is drained this collection matches
    /// [AllPairs::expected_unique_combinations] up to ordering.
    pub fn generated_unique_combinations(&self) -> Vec<Case> {
        expected::explode_generated_combinations(&self.generated, self.combination_size)
    }

    /// Find the next case, or report that every valid combination is covered.
    ///
    /// # Panics
    /// Panics when the ledger holds more combinations than the precomputed total. That state is
    /// unreachable through the public interface; reaching it means the search or the ranking is
    /// defective, which must not be swallowed.
    fn generate_next_case(&mut self) -> Option<Case> {
        if self.storage.unique_nwise_count() > self.expected.len() {
            panic!("Actual number of test combinations exceeded the possible maximum");
        }

        if self.exhausted || self.storage.unique_nwise_count() == self.expected.len() {
            return None;
        }

        let previous_count = self.storage.unique_nwise_count();
        let group_count = self.matrix.len();
        let mut chosen: UVec<ItemId> = u_vec![ItemId::default(); group_count];
        let mut indexes: UVec<usize> = u_vec![0; group_count];

        let mut direction = Direction::Forward;
        let mut group = 0;

        while group < group_count {
            if direction == Direction::Forward {
                ranking::rank_group(
                    &self.storage,
                    self.combination_size,
                    &mut self.matrix[group],
                    &chosen[..group],
                );
                indexes[group] = 0;
            } else {
                indexes[group] += 1;
                if indexes[group] >= self.matrix[group].len() {
                    direction = Direction::Backtrack;
                    if group == 0 {
                        // Every value of the first group is tried: no further case exists.
                        self.exhausted = true;
                        return None;
                    }
                    group -= 1;
                    continue;
                }
            }

            chosen[group] = self.matrix[group][indexes[group]];

            if self.rejects(&chosen[..group + 1]) {
                direction = Direction::Retry;
                continue;
            }

            direction = Direction::Forward;
            group += 1;

            if group == group_count {
                self.storage.record_sequence(chosen.as_slice());
                if self.storage.unique_nwise_count() == previous_count {
                    // The chosen items produced no new test combinations.
                    direction = Direction::Backtrack;
                    group -= 1;
                }
            }
        }

        Some(Case::from_items(&self.sut, chosen.as_slice()))
    }

    /// Test all constraints against the given prefix of chosen items.
    fn rejects(&self, items: &[ItemId]) -> bool {
        rejects_case(&self.sut, &self.constraints, items)
    }
}

/// Test all constraints against the given (partial) assignment.
///
/// A non-applicable constraint (one returning [None]) never rejects.
pub(crate) fn rejects_case(sut: &SUT, constraints: &[Constraint], items: &[ItemId]) -> bool {
    if constraints.is_empty() {
        return false;
    }

    let case = ConstrainableCase::new(sut, items);
    constraints.iter().any(|constraint| constraint(&case).unwrap_or(false))
}

impl Iterator for AllPairs {
    type Item = Case;

    fn next(&mut self) -> Option<Self::Item> {
        let case = self.generate_next_case()?;
        self.generated.push(case.clone());

        let index = self.generated.len();
        if self.print_each_case {
            println!("{:3}: {}", index, case);
        }
        if let Some(observer) = self.observer.as_mut() {
            observer(index, &case);
        }

        Some(case)
    }
}
