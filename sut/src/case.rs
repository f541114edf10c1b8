// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::fmt;

use common::UVec;

use crate::{ItemId, SUT};

/// An ordered mapping from parameter names to chosen values.
///
/// A full case has one entry per parameter, in declaration order. The same type also represents
/// the N-wise sub-combinations a case is exploded into when coverage is verified.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Case {
    entries: UVec<(String, String)>,
}

impl Case {
    /// Build a case by resolving the given items against the value tables.
    pub fn from_items(sut: &SUT, items: &[ItemId]) -> Self {
        Self {
            entries: items
                .iter()
                .map(|&id| (sut.parameter_name(id).to_string(), sut.value(id).to_string()))
                .collect(),
        }
    }

    /// Build a case directly from name and value pairs.
    pub fn from_pairs(entries: Vec<(String, String)>) -> Self {
        Self { entries: UVec::from(entries) }
    }

    /// Get the value chosen for the named parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(parameter, _)| parameter == name)
            .map(|(_, value)| value.as_str())
    }

    /// The number of assigned parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the case has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the (name, value) entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (name, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}

/// A read-only view of a (possibly partial) assignment, for use by constraint predicates.
///
/// [ConstrainableCase::get] distinguishes an assigned parameter from an unassigned or unknown one,
/// so a predicate can opt out of judging assignments it does not apply to.
pub struct ConstrainableCase<'a> {
    sut: &'a SUT,
    items: &'a [ItemId],
}

impl<'a> ConstrainableCase<'a> {
    /// Wrap the given chosen items. The items may cover any subset of the parameters.
    pub fn new(sut: &'a SUT, items: &'a [ItemId]) -> Self {
        Self { sut, items }
    }

    /// Get the value assigned to the named parameter.
    ///
    /// Returns [None] both when the parameter is not yet assigned and when no parameter of that
    /// name exists. Constraints written with the `?` operator thereby become non-applicable as a
    /// whole as soon as any lookup misses:
    ///
    /// ```
    /// # use sut::{ConstrainableCase, ItemId, Parameter, SUT};
    /// let sut = SUT::new(vec![
    ///     Parameter::new("OS", &["Windows", "Linux"]),
    ///     Parameter::new("Drive", &["HDD", "SSD"]),
    /// ], 2).expect("A valid configuration");
    /// let items = [ItemId::new(0, 1)];
    /// let case = ConstrainableCase::new(&sut, &items);
    ///
    /// let rejects = |c: &ConstrainableCase| Some(c.get("OS")? == "Linux" && c.get("Drive")? == "HDD");
    /// assert_eq!(case.get("OS"), Some("Linux"));
    /// assert_eq!(case.get("Drive"), None);
    /// assert_eq!(rejects(&case), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        let parameter = self.sut.parameter_id(name)?;
        self.items
            .iter()
            .find(|id| id.parameter == parameter)
            .map(|&id| self.sut.value(id))
    }
}

/// A predicate excluding unwanted cases.
///
/// Evaluated against every candidate prefix during the search. `Some(true)` rejects the
/// assignment; `Some(false)` accepts it; [None] means the constraint does not apply to this
/// (partial) assignment and never rejects.
pub type Constraint = Box<dyn Fn(&ConstrainableCase) -> Option<bool>>;
