// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides a basic cli for the AllPairs generator.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::fs::read_to_string;
use std::path::PathBuf;

pub use clap::crate_version;
use clap::{App, Arg, ArgMatches};
use common::MIN_COMBINATION_SIZE;
use sut::{parse_parameters, Parameter};

const INPUT_FILE_ARG: &str = "input_file";
const OUTPUT_FILE_ARG: &str = "output_file";
const SIZE_ARG: &str = "size";
const PRINT_CASES_ARG: &str = "print-cases";
const BIN_PREFIX: &str = "src/bin/";
const RUST_EXT: &str = ".rs";

/// The parsed command line configuration: the parameters of the input file, the output path, the
/// test combination size, and whether every case should be printed during generation.
pub struct Arguments {
    /// The parameters read from the input file.
    pub parameters: Vec<Parameter>,
    /// The path the generated suite is written to.
    pub output_path: PathBuf,
    /// The test combination size.
    pub combination_size: usize,
    /// Print every case as it is produced.
    pub print_cases: bool,
}

fn get_app<'a, 'b>(app_name: &'a str, version: &'a str) -> App<'a, 'b>
where
    'a: 'b,
{
    App::new(app_name)
        .version(version)
        .arg(
            Arg::with_name(INPUT_FILE_ARG)
                .required(true)
                .help("Set the input file with the parameter definitions."),
        )
        .arg(
            Arg::with_name(OUTPUT_FILE_ARG)
                .short("o")
                .long("output")
                .required(false)
                .default_value("result.txt")
                .help("Set the output file."),
        )
        .arg(
            Arg::with_name(SIZE_ARG)
                .short("s")
                .long("size")
                .takes_value(true)
                .default_value("2")
                .help("Set the test combination size (2 is pairwise)."),
        )
        .arg(
            Arg::with_name(PRINT_CASES_ARG)
                .short("p")
                .long("print-cases")
                .help("Print each case during generation."),
        )
}

fn validate_args(matches: ArgMatches) -> Result<(PathBuf, PathBuf, usize, bool), String> {
    let input_path = PathBuf::from(
        matches
            .value_of(INPUT_FILE_ARG)
            .ok_or("The input file should be provided")?,
    );

    let output_path = PathBuf::from(
        matches
            .value_of(OUTPUT_FILE_ARG)
            .ok_or("The output file should be provided")?,
    );

    if input_path == output_path {
        return Err("Input and output should not be the same!".to_string());
    }

    let combination_size = matches
        .value_of(SIZE_ARG)
        .ok_or("The size argument is required.")?
        .parse::<usize>()
        .map_err(|_| "The size argument should be a number.".to_string())?;

    if combination_size < MIN_COMBINATION_SIZE {
        Err(format!("Please provide a test combination size of at least {}.", MIN_COMBINATION_SIZE))
    } else {
        Ok((input_path, output_path, combination_size, matches.is_present(PRINT_CASES_ARG)))
    }
}

fn check_sizes(combination_size: usize, parameters: usize) -> Result<(), String> {
    if combination_size > parameters {
        Err("Choose a test combination size equal to or lower than the number of parameters.".into())
    } else {
        Ok(())
    }
}

fn load_parameters(args: (PathBuf, PathBuf, usize, bool)) -> Result<Arguments, String> {
    let contents = read_to_string(args.0).map_err(|e| e.to_string())?;
    let parameters = parse_parameters(contents.as_str())?;
    check_sizes(args.2, parameters.len())?;
    Ok(Arguments {
        parameters,
        output_path: args.1,
        combination_size: args.2,
        print_cases: args.3,
    })
}

/// Parse the command line arguments and load the parameter file they point at.
///
/// The `app_name` is expected to be the `file!()` of the calling binary.
pub fn parse_arguments(mut app_name: &str, version: &str) -> Result<Arguments, String> {
    if app_name.ends_with(RUST_EXT) {
        app_name = &app_name[..app_name.len() - RUST_EXT.len()];
    }

    if app_name.starts_with(BIN_PREFIX) {
        app_name = &app_name[BIN_PREFIX.len()..];
    }

    let matches = get_app(app_name, version).get_matches();

    load_parameters(validate_args(matches)?)
}

#[cfg(test)]
mod test_lib;
