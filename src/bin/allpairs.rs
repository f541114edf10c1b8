// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This binary generates an N-wise covering case suite for the given parameter file.

use allpairs::cli;
use allpairs::common::time_it;
use allpairs::engine::AllPairsBuilder;
use allpairs::writer::write_result;

fn main() -> Result<(), String> {
    let arguments = time_it!(cli::parse_arguments(file!(), cli::crate_version!()), "Parsing")?;

    let mut builder = AllPairsBuilder::new()
        .with_parameters(arguments.parameters)
        .with_combination_size(arguments.combination_size);
    if arguments.print_cases {
        builder = builder.print_each_case_during_generation();
    }

    let mut session = builder.build().map_err(|e| e.to_string())?;
    let cases = time_it!(session.by_ref().collect::<Vec<_>>(), "Generation");

    time_it!(
        write_result(session.parameters(), &cases, arguments.output_path).map_err(|e| e.to_string()),
        "Writing"
    )
}
