// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::cell::RefCell;
use std::rc::Rc;

use common::{u_vec, UVec};
use lazy_static::lazy_static;
use sut::{ItemId, Parameter, ValidationError};

use crate::{ranking, AllPairsBuilder};

lazy_static! {
    static ref PARAMETERS: Vec<Parameter> = vec![
        Parameter::new("Browser", &["Chrome", "Safari", "Edge"]),
        Parameter::new("OS", &["Windows", "Linux", "macOS"]),
        Parameter::new("RAM", &["2048", "4096", "8192", "16384"]),
        Parameter::new("Drive", &["HDD", "SSD"]),
    ];
}

#[test]
fn test_expected_combination_total() {
    let session = AllPairsBuilder::new()
        .with_parameters(PARAMETERS.clone())
        .build()
        .expect("A valid configuration");

    // 3*3 + 3*4 + 3*2 + 3*4 + 3*2 + 4*2 cross pairs.
    assert_eq!(session.expected_unique_combinations().len(), 53);
}

#[test]
fn test_small_pairwise_run() {
    let session = AllPairsBuilder::new()
        .with_parameter(Parameter::new("OS", &["Windows", "Linux"]))
        .with_parameter(Parameter::new("Drive", &["HDD", "SSD"]))
        .build()
        .expect("A valid configuration");

    let cases: Vec<_> = session.collect();
    assert_eq!(cases.len(), 4);
    for case in &cases {
        assert_eq!(case.len(), 2);
    }
}

#[test]
fn test_full_size_collapses_to_full_enumeration() {
    let session = AllPairsBuilder::new()
        .with_parameter(Parameter::new("a", &["0", "1"]))
        .with_parameter(Parameter::new("b", &["0", "1"]))
        .with_parameter(Parameter::new("c", &["0", "1"]))
        .with_combination_size(3)
        .build()
        .expect("A valid configuration");

    assert_eq!(session.expected_unique_combinations().len(), 8);
    let cases: Vec<_> = session.collect();
    assert_eq!(cases.len(), 8);
}

#[test]
fn test_generation_is_deterministic() {
    let build = || {
        AllPairsBuilder::new()
            .with_parameters(PARAMETERS.clone())
            .with_combination_size(3)
            .build()
            .expect("A valid configuration")
    };

    let first: Vec<_> = build().collect();
    let second: Vec<_> = build().collect();
    assert_eq!(first, second);
}

#[test]
fn test_generated_combinations_match_expected() {
    let mut session = AllPairsBuilder::new()
        .with_parameters(PARAMETERS.clone())
        .build()
        .expect("A valid configuration");

    while session.next().is_some() {}

    let expected = session.expected_unique_combinations();
    let generated = session.generated_unique_combinations();
    assert_eq!(generated.len(), expected.len());
    for combination in expected {
        assert!(generated.contains(combination), "{} must be covered", combination);
    }
}

#[test]
fn test_unsatisfiable_constraints_yield_no_cases() {
    let mut session = AllPairsBuilder::new()
        .with_parameters(PARAMETERS.clone())
        .with_constraint(|c| Some(c.get("Drive")? == "HDD"))
        .with_constraint(|c| Some(c.get("Drive")? == "SSD"))
        .build()
        .expect("A valid configuration");

    assert_eq!(session.next(), None);
    // The session stays exhausted instead of restarting the search.
    assert_eq!(session.next(), None);
    assert!(session.generated_cases().is_empty());
}

#[test]
fn test_observer_sees_every_case() {
    let observed: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&observed);

    let session = AllPairsBuilder::new()
        .with_parameter(Parameter::new("a", &["0", "1"]))
        .with_parameter(Parameter::new("b", &["0", "1"]))
        .with_case_observer(move |index, case| {
            assert_eq!(case.len(), 2);
            sink.borrow_mut().push(index);
        })
        .build()
        .expect("A valid configuration");

    let count = session.count();
    assert_eq!(observed.borrow().as_slice(), (1..=count).collect::<Vec<_>>().as_slice());
}

#[test]
fn test_constraint_count_and_size_accessors() {
    let session = AllPairsBuilder::new()
        .with_parameters(PARAMETERS.clone())
        .with_constraint(|c| Some(c.get("Drive")? == "HDD"))
        .with_combination_size(3)
        .build()
        .expect("A valid configuration");

    assert_eq!(session.combination_size(), 3);
    assert_eq!(session.constraint_count(), 1);
    assert_eq!(session.parameters().parameter_count(), 4);
}

#[test]
fn test_overflowing_configuration_is_rejected() {
    let parameters: Vec<Parameter> = (0..70)
        .map(|index| Parameter::new(&format!("p{}", index), &["v"]))
        .collect();

    let result = AllPairsBuilder::new()
        .with_parameters(parameters)
        .with_combination_size(35)
        .build();

    assert_eq!(result.err(), Some(ValidationError::ArithmeticOverflow));
}

#[test]
fn test_ranking_keeps_order_on_empty_ledger() {
    let storage = cm::CombinationStorage::new(2);
    let mut group: UVec<ItemId> = u_vec![ItemId::new(0, 0), ItemId::new(0, 1), ItemId::new(0, 2)];

    ranking::rank_group(&storage, 2, &mut group, &[]);
    assert_eq!(group, vec![ItemId::new(0, 0), ItemId::new(0, 1), ItemId::new(0, 2)]);
}

#[test]
fn test_ranking_prefers_unused_values() {
    let mut storage = cm::CombinationStorage::new(2);
    storage.record_sequence(&[ItemId::new(0, 0), ItemId::new(1, 0)]);

    let mut group: UVec<ItemId> = u_vec![ItemId::new(0, 0), ItemId::new(0, 1)];
    ranking::rank_group(&storage, 2, &mut group, &[]);
    assert_eq!(group, vec![ItemId::new(0, 1), ItemId::new(0, 0)]);

    // With the used value of group 0 chosen, the unused value of group 1 must come first too.
    let prefix = [ItemId::new(0, 0)];
    let mut group: UVec<ItemId> = u_vec![ItemId::new(1, 0), ItemId::new(1, 1)];
    ranking::rank_group(&storage, 2, &mut group, &prefix);
    assert_eq!(group, vec![ItemId::new(1, 1), ItemId::new(1, 0)]);
}
