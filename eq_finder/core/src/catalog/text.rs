//! Line-oriented catalog format (`eqfinder.txt`)
//!
//! ```text
//! ; comment
//! MaxExponent=2
//! MagnitudeDeviation=1.01
//! p 8.854e-12 -3 -1  4  2 Permittivity of free space
//! u 1.2566e-6  1  1 -2 -2 Permeability of free space
//! ```
//!
//! Constant lines are `SYMBOL MAGNITUDE` followed by one power per base
//! unit; whatever is left on the line is the description.

use super::{CatalogError, CatalogResult, Constant, ConstantCatalog, LoadedCatalog};
use crate::units::{UnitVector, NUM_UNITS};

const MAX_EXPONENT_KEY: &str = "MaxExponent";
const DEVIATION_KEY: &str = "MagnitudeDeviation";

/// Parse a catalog from text
pub fn parse(input: &str) -> CatalogResult<LoadedCatalog> {
    let mut constants = Vec::new();
    let mut max_exponent = None;
    let mut magnitude_deviation = None;

    for (i, raw) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        if let Some(value) = directive(line, MAX_EXPONENT_KEY) {
            max_exponent = Some(value.parse::<i64>().map_err(|e| CatalogError::Parse {
                line: line_no,
                message: format!("{} value {:?}: {}", MAX_EXPONENT_KEY, value, e),
            })?);
            continue;
        }

        if let Some(value) = directive(line, DEVIATION_KEY) {
            magnitude_deviation = Some(value.parse::<f64>().map_err(|e| CatalogError::Parse {
                line: line_no,
                message: format!("{} value {:?}: {}", DEVIATION_KEY, value, e),
            })?);
            continue;
        }

        constants.push(parse_constant(line, line_no)?);
    }

    Ok(LoadedCatalog {
        catalog: ConstantCatalog::new(constants)?,
        max_exponent,
        magnitude_deviation,
    })
}

/// Value of a `Key=value` directive, matching the key case-insensitively
fn directive<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let head = line.get(..key.len())?;
    if !head.eq_ignore_ascii_case(key) {
        return None;
    }
    let rest = line[key.len()..].trim_start();
    let value = rest.strip_prefix('=')?;
    Some(value.split_whitespace().next().unwrap_or(""))
}

fn parse_constant(line: &str, line_no: usize) -> CatalogResult<Constant> {
    let parse_err = |message: String| CatalogError::Parse { line: line_no, message };

    let (symbol, rest) = next_token(line).ok_or_else(|| parse_err("missing symbol".into()))?;

    let (magnitude, mut rest) =
        next_token(rest).ok_or_else(|| parse_err(format!("{}: missing magnitude", symbol)))?;
    let magnitude = magnitude
        .parse::<f64>()
        .map_err(|e| parse_err(format!("{}: magnitude {:?}: {}", symbol, magnitude, e)))?;

    let mut powers = [0i32; NUM_UNITS];
    for (unit, power) in powers.iter_mut().enumerate() {
        let (token, tail) = next_token(rest).ok_or_else(|| {
            parse_err(format!(
                "{}: expected {} unit powers, found {}",
                symbol, NUM_UNITS, unit
            ))
        })?;
        *power = token
            .parse::<i32>()
            .map_err(|e| parse_err(format!("{}: unit power {:?}: {}", symbol, token, e)))?;
        rest = tail;
    }

    Ok(Constant {
        symbol: symbol.to_string(),
        description: rest.trim().to_string(),
        magnitude,
        units: UnitVector::new(powers),
    })
}

/// Split off the next whitespace-delimited token
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..end], &s[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAXWELL: &str = "\
; Maxwell's relation
MaxExponent=2
MagnitudeDeviation=1.01

p 8.854e-12 -3 -1  4  2 Permittivity of free space
u 1.2566e-6  1  1 -2 -2 Permeability of free space
c 2.998e8    1  0 -1  0 Speed of light
";

    #[test]
    fn test_parse_maxwell() {
        let loaded = parse(MAXWELL).unwrap();
        assert_eq!(loaded.max_exponent, Some(2));
        assert_eq!(loaded.magnitude_deviation, Some(1.01));
        assert_eq!(loaded.catalog.symbols(), vec!["p", "u", "c"]);

        let p = loaded.catalog.by_symbol("p").unwrap();
        assert_eq!(p.units, UnitVector::new([-3, -1, 4, 2]));
        assert_eq!(p.description, "Permittivity of free space");
    }

    #[test]
    fn test_directives_are_case_insensitive() {
        let loaded = parse("maxexponent = 4\nMAGNITUDEDEVIATION=50\n").unwrap();
        assert_eq!(loaded.max_exponent, Some(4));
        assert_eq!(loaded.magnitude_deviation, Some(50.0));
        assert!(loaded.catalog.is_empty());
    }

    #[test]
    fn test_defaults_absent() {
        let loaded = parse("c 2.998e8 1 0 -1 0\n").unwrap();
        assert_eq!(loaded.max_exponent, None);
        assert_eq!(loaded.magnitude_deviation, None);
        assert_eq!(loaded.catalog.get(0).unwrap().description, "");
    }

    #[test]
    fn test_missing_unit_power_reports_line() {
        let err = parse("; header\nc 2.998e8 1 0 -1\n").unwrap_err();
        match err {
            CatalogError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("expected 4 unit powers"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_bad_magnitude() {
        assert!(matches!(
            parse("c fast 1 0 -1 0\n"),
            Err(CatalogError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_bad_directive_value() {
        assert!(parse("MaxExponent=lots\n").is_err());
    }

    #[test]
    fn test_negative_magnitude_rejected() {
        assert!(matches!(
            parse("q -1.6e-19 0 0 1 1 charge\n"),
            Err(CatalogError::InvalidMagnitude { .. })
        ));
    }

    #[test]
    fn test_symbol_named_like_directive_prefix() {
        // A constant whose symbol merely starts like a directive is still a constant
        let loaded = parse("Max 1.0 0 0 0 0 not a directive\n").unwrap();
        assert_eq!(loaded.catalog.symbols(), vec!["Max"]);
    }
}
