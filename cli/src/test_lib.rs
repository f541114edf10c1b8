// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::path::PathBuf;

use super::{check_sizes, get_app, validate_args};

fn parse(arguments: &[&str]) -> Result<(PathBuf, PathBuf, usize, bool), String> {
    let matches = get_app("allpairs", "v0.1.0")
        .get_matches_from_safe(arguments)
        .map_err(|e| e.to_string())?;
    validate_args(matches)
}

#[test]
fn test_defaults() {
    let (input, output, size, print_cases) = parse(&["allpairs", "input.txt"]).expect("Valid arguments");
    assert_eq!(input, PathBuf::from("input.txt"));
    assert_eq!(output, PathBuf::from("result.txt"));
    assert_eq!(size, 2);
    assert!(!print_cases);
}

#[test]
fn test_explicit_arguments() {
    let (input, output, size, print_cases) =
        parse(&["allpairs", "in.txt", "--output", "out.txt", "--size", "3", "--print-cases"])
            .expect("Valid arguments");
    assert_eq!(input, PathBuf::from("in.txt"));
    assert_eq!(output, PathBuf::from("out.txt"));
    assert_eq!(size, 3);
    assert!(print_cases);
}

#[test]
fn test_missing_input() {
    assert!(parse(&["allpairs"]).is_err());
}

#[test]
fn test_same_input_and_output() {
    assert!(parse(&["allpairs", "result.txt"]).is_err());
}

#[test]
fn test_size_bounds() {
    assert!(parse(&["allpairs", "input.txt", "--size", "1"]).is_err());
    assert!(parse(&["allpairs", "input.txt", "--size", "x"]).is_err());
    assert!(check_sizes(3, 2).is_err());
    assert!(check_sizes(2, 4).is_ok());
}
