// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate contains the methods for writing a generated [Case] suite to a file.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use sut::{Case, SUT};

fn write_headers(sut: &SUT, suite_size: usize, file: &mut BufWriter<File>) -> std::io::Result<()> {
    file.write_all(format!("# Number of parameters: {}\n", sut.parameter_count()).as_ref())?;
    file.write_all(format!("# Number of cases: {}\n", suite_size).as_ref())?;
    let mut parameters_iter = sut.parameter_names.iter();
    match parameters_iter.next() {
        Some(parameter) => file.write_all(parameter.as_bytes())?,
        None => return Ok(()),
    }
    for parameter in parameters_iter {
        file.write_all(b",")?;
        file.write_all(parameter.as_bytes())?;
    }
    file.write_all(b"\n")
}

fn write_cases(cases: &[Case], file: &mut BufWriter<File>) -> std::io::Result<()> {
    for case in cases {
        let mut values_iter = case.iter();
        if let Some((_, value)) = values_iter.next() {
            file.write_all(value.as_bytes())?;
        }
        for (_, value) in values_iter {
            file.write_all(b",")?;
            file.write_all(value.as_bytes())?;
        }
        file.write_all(b"\n")?;
    }
    Ok(())
}

/// Write the given case suite to the given filename.
///
/// The file starts with `#` comment lines describing the suite, followed by a comma-separated
/// header of the parameter names and one comma-separated row of values per case.
pub fn write_result(sut: &SUT, cases: &[Case], filename: PathBuf) -> std::io::Result<()> {
    println!("The resulting suite has {} cases", cases.len());
    let mut writer = BufWriter::new(File::create(filename)?);
    write_headers(sut, cases.len(), &mut writer)?;
    write_cases(cases, &mut writer)?;
    writer.flush()
}
