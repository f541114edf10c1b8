// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides a generator of minimal N-wise (pairwise and higher) test case suites with
//! support for constraints.
//!
//! A session is configured with a list of named [sut::Parameter]s, an optional list of
//! [sut::Constraint] predicates, and a test combination size, and produces [sut::Case]s until
//! every valid combination of that size is covered:
//!
//! ```
//! use allpairs::engine::AllPairsBuilder;
//! use allpairs::sut::Parameter;
//!
//! let cases: Vec<_> = AllPairsBuilder::new()
//!     .with_parameter(Parameter::new("Browser", &["Chrome", "Safari", "Edge"]))
//!     .with_parameter(Parameter::new("OS", &["Windows", "Linux", "macOS"]))
//!     .with_parameter(Parameter::new("Drive", &["HDD", "SSD"]))
//!     .with_constraint(|c| Some(c.get("Browser")? == "Safari" && c.get("OS")? != "macOS"))
//!     .build()
//!     .expect("A valid configuration")
//!     .collect();
//!
//! assert!(!cases.is_empty());
//! for case in &cases {
//!     if case.get("Browser") == Some("Safari") {
//!         assert_eq!(case.get("OS"), Some("macOS"));
//!     }
//! }
//! ```
//!
//! The other crates re-exported here provide the pieces of the generator:
//!   * [common] The combinatorics primitives and shared helper types.
//!   * [sut] The test model: parameters, cases, constraints, and the input parser.
//!   * [cm] The coverage ledger tracking already-covered combinations.
//!   * [engine] The backtracking case-construction engine.
//!   * [cli] Command line argument handling for the `allpairs` binary.
//!   * [writer] Output of generated suites.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

pub use cli;
pub use cm;
pub use common;
pub use engine;
pub use sut;
pub use writer;
