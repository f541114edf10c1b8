// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use nom::bytes::complete::{is_a, tag, take_while1};
use nom::combinator::opt;
use nom::multi::{many1, separated_list1};
use nom::IResult;

use crate::Parameter;

fn e2s<T: std::fmt::Debug>(e: T) -> String {
    format!("{:?}", e)
}

fn is_value_char(input: char) -> bool {
    matches!(input, 'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_')
}

fn read_value(input: &str) -> IResult<&str, &str> {
    let (input, _) = opt(is_a(" \t\r\n"))(input)?;
    let (input, result) = take_while1(is_value_char)(input)?;
    let (input, _) = opt(is_a(" \t\r\n"))(input)?;
    Ok((input, result))
}

fn parse_values(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(tag(","), read_value)(input)
}

fn parse_parameter(text: &str) -> IResult<&str, Parameter> {
    let (text, name) = read_value(text)?;
    let (text, _) = tag(":")(text)?;
    let (text, values) = parse_values(text)?;
    let (text, _) = tag(";")(text)?;
    let values = values.into_iter().map(|value| value.to_string()).collect();
    Ok((text, Parameter::from_values(name.to_string(), values)))
}

/// Parse the plain text parameter list format: `name: v1, v2; other: v3, v4;`.
///
/// Names and values may contain letters, digits, `-` and `_`; surrounding whitespace is ignored.
/// The parsed parameters are not yet validated for uniqueness (see [SUT::new](crate::SUT::new)).
pub fn parse_parameters(text: &str) -> Result<Vec<Parameter>, String> {
    let (rest, parameters) = many1(parse_parameter)(text).map_err(e2s)?;
    if !rest.trim().is_empty() {
        return Err(format!("Unexpected trailing input: {:?}", rest));
    }
    Ok(parameters)
}

#[cfg(test)]
mod parser_tests {
    use super::{parse_parameters, parse_values, read_value};

    #[test]
    fn test_value_parse() {
        assert_eq!(read_value("a"), Ok(("", "a")));
        assert_eq!(read_value("-a"), Ok(("", "-a")));
        assert_eq!(read_value("test_this"), Ok(("", "test_this")));
        assert_eq!(read_value(" a b "), Ok(("b ", "a")));
        assert!(read_value(" ").is_err());
        assert!(read_value("").is_err());
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("  a , b,c ,d, e"), Ok(("", vec!["a", "b", "c", "d", "e"])));
        assert_eq!(parse_values("  a , b,c d, e"), Ok(("d, e", vec!["a", "b", "c"])));
        assert_eq!(parse_values("  a ; b,c ,d, e"), Ok(("; b,c ,d, e", vec!["a"])));
        assert_eq!(parse_values("a"), Ok(("", vec!["a"])));
        assert!(parse_values("   ,: b, d, e").is_err());
        assert!(parse_values("").is_err());
    }

    #[test]
    fn test_parse_parameters() {
        let parameters = parse_parameters("p1:  a , b,c ,d, e;").expect("A single parameter line");
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name, "p1");
        assert_eq!(parameters[0].values, vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string(), "e".to_string()]);

        let parameters = parse_parameters("p1: a;\np2: b, c;\n").expect("Two parameter lines");
        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters[1].name, "p2");
    }

    #[test]
    fn test_parse_parameters_errors() {
        assert!(parse_parameters("").is_err());
        assert!(parse_parameters(";").is_err());
        assert!(parse_parameters("a").is_err());
        assert!(parse_parameters("p1: a, b").is_err());
        assert!(parse_parameters("p1: a b;").is_err());
        assert!(parse_parameters("p1: a;$assert p1 = a;").is_err());
    }
}
