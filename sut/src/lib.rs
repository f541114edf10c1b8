// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides the test model of the AllPairs generator: the [Parameter] input type, the
//! consolidated [SUT] the generation runs against, the [Case] output type, and the [Constraint]
//! machinery used to exclude unwanted cases.
//!
//! It also provides a parser for the plain text parameter format used by the command line binary:
//!
//! ```
//! let parameters = sut::parse_parameters("p1: v1, v2, v3; p2: v1, v2;").expect("Parsing error occurred");
//! assert_eq!(parameters.len(), 2);
//! assert_eq!(parameters[0].name, "p1");
//! ```

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::collections::{HashMap, HashSet};
use std::fmt;

use common::{UVec, MIN_COMBINATION_SIZE};

pub use case::{Case, ConstrainableCase, Constraint};
pub use item::ItemId;
pub use parser::parse_parameters;

mod case;
mod item;
mod parser;


/// A named, ordered list of possible values for one input of the system under test.
///
/// Validation happens when a set of parameters is consolidated into a [SUT]:
/// the name must be non-empty and unique across all parameters, and the values
/// must be non-empty and free of duplicates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parameter {
    /// The parameter name, used by constraints and in the generated cases.
    pub name: String,
    /// The ordered possible values.
    pub values: UVec<String>,
}

impl Parameter {
    /// Construct a parameter from string slices.
    pub fn new(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            values: values.iter().map(|value| value.to_string()).collect(),
        }
    }

    /// Construct a parameter from owned values.
    pub fn from_values(name: String, values: Vec<String>) -> Self {
        Self { name, values: UVec::from(values) }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.name, self.values)
    }
}

/// Error indicating an invalid generation configuration.
///
/// Every variant is reported synchronously when the session is constructed; nothing is retried.
#[derive(Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// The requested combination size is below [MIN_COMBINATION_SIZE].
    CombinationSizeTooSmall(usize),
    /// There are fewer parameters than the requested combination size (this includes the empty parameter list).
    TooFewParameters {
        /// The number of provided parameters.
        parameters: usize,
        /// The requested combination size.
        combination_size: usize,
    },
    /// A parameter has no values.
    ParameterWithoutValues(String),
    /// A parameter has an empty name.
    EmptyParameterName,
    /// A parameter contains the same value twice.
    DuplicateValue(String),
    /// Two parameters share a name.
    DuplicateParameterName(String),
    /// The exact combination count of the configuration does not fit in a signed 64-bit integer.
    ArithmeticOverflow,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::CombinationSizeTooSmall(size) => {
                write!(f, "Minimum test combination size is {}. Provided: {}", MIN_COMBINATION_SIZE, size)
            }
            ValidationError::TooFewParameters { parameters, combination_size } => write!(
                f,
                "The number of parameters ({}) must be greater than or equal to the test combination size ({})",
                parameters, combination_size
            ),
            ValidationError::ParameterWithoutValues(name) => {
                write!(f, "Each parameter must have at least one value. Provided parameter with no values: {}", name)
            }
            ValidationError::EmptyParameterName => write!(f, "Parameter name must not be empty"),
            ValidationError::DuplicateValue(name) => {
                write!(f, "Each parameter must have no duplicate values. Provided: {}", name)
            }
            ValidationError::DuplicateParameterName(name) => {
                write!(f, "Parameter name must be unique. Provided non-unique name: {}", name)
            }
            ValidationError::ArithmeticOverflow => {
                write!(f, "The exact combination count of the configuration exceeds the 64-bit signed integer range")
            }
        }
    }
}

impl From<common::OverflowError> for ValidationError {
    fn from(_: common::OverflowError) -> Self {
        ValidationError::ArithmeticOverflow
    }
}

/// The consolidated, validated description of the system under test.
///
/// Holds the parameter names, the value tables, and a reverse lookup of parameter ids.
/// A value of parameter `p` with index `v` is found at `sut.values[p][v]`.
pub struct SUT {
    /// The names of the parameters, in declaration order.
    pub parameter_names: UVec<String>,
    /// The values of each parameter, indexed by parameter id, then by value id.
    pub values: UVec<UVec<String>>,
    parameter_to_id: HashMap<String, usize>,
}

impl SUT {
    /// Validate the given parameters against the combination size and consolidate them.
    ///
    /// The checks, in order: the combination size bounds, per-parameter value and name rules,
    /// and name uniqueness across parameters.
    pub fn new(parameters: Vec<Parameter>, combination_size: usize) -> Result<Self, ValidationError> {
        if combination_size < MIN_COMBINATION_SIZE {
            return Err(ValidationError::CombinationSizeTooSmall(combination_size));
        }

        if parameters.len() < combination_size {
            return Err(ValidationError::TooFewParameters {
                parameters: parameters.len(),
                combination_size,
            });
        }

        for parameter in &parameters {
            if parameter.values.is_empty() {
                return Err(ValidationError::ParameterWithoutValues(parameter.name.clone()));
            }

            if parameter.name.is_empty() {
                return Err(ValidationError::EmptyParameterName);
            }

            let mut seen: HashSet<&str> = HashSet::with_capacity(parameter.values.len());
            for value in parameter.values.iter() {
                if !seen.insert(value.as_str()) {
                    return Err(ValidationError::DuplicateValue(parameter.name.clone()));
                }
            }
        }

        let mut parameter_to_id = HashMap::with_capacity(parameters.len());
        for (id, parameter) in parameters.iter().enumerate() {
            if parameter_to_id.insert(parameter.name.clone(), id).is_some() {
                return Err(ValidationError::DuplicateParameterName(parameter.name.clone()));
            }
        }

        let mut result = SUT {
            parameter_names: UVec::with_capacity(parameters.len()),
            values: UVec::with_capacity(parameters.len()),
            parameter_to_id,
        };
        for parameter in parameters.into_iter() {
            result.parameter_names.push(parameter.name);
            result.values.push(parameter.values);
        }
        Ok(result)
    }

    /// The number of parameters.
    pub fn parameter_count(&self) -> usize {
        self.parameter_names.len()
    }

    /// Look up the id of a parameter by name.
    pub fn parameter_id(&self, name: &str) -> Option<usize> {
        self.parameter_to_id.get(name).copied()
    }

    /// Resolve an [ItemId] to its value text.
    pub fn value(&self, id: ItemId) -> &str {
        &self.values[id.parameter][id.value]
    }

    /// Resolve an [ItemId] to its parameter name.
    pub fn parameter_name(&self, id: ItemId) -> &str {
        &self.parameter_names[id.parameter]
    }
}
