//! Numeric argument parsing
//!
//! Command-line values arrive as strings; a sequence where every token parses
//! as an integer stays integer, anything else falls back to floats so the
//! scan keeps the element type of its input.

use crate::utils::error::{AppError, AppResult};

/// A homogeneous numeric sequence parsed from CLI tokens
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedNumbers {
    Ints(Vec<i64>),
    Floats(Vec<f64>),
}

/// Parse CLI tokens into a numeric sequence.
///
/// All-integer input yields `Ints`; otherwise every token must parse as a
/// float. The first token that parses as neither is reported.
pub fn parse_numbers(tokens: &[String]) -> AppResult<ParsedNumbers> {
    let ints: Result<Vec<i64>, _> = tokens.iter().map(|t| t.parse::<i64>()).collect();
    if let Ok(values) = ints {
        return Ok(ParsedNumbers::Ints(values));
    }

    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        let value = token
            .parse::<f64>()
            .map_err(|_| AppError::InvalidNumber { raw: token.clone() })?;
        values.push(value);
    }
    Ok(ParsedNumbers::Floats(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_integers_stay_integer() {
        let parsed = parse_numbers(&tokens(&["5", "-3", "8"])).unwrap();
        assert_eq!(parsed, ParsedNumbers::Ints(vec![5, -3, 8]));
    }

    #[test]
    fn test_mixed_input_becomes_floats() {
        let parsed = parse_numbers(&tokens(&["1.5", "-2", "0"])).unwrap();
        assert_eq!(parsed, ParsedNumbers::Floats(vec![1.5, -2.0, 0.0]));
    }

    #[test]
    fn test_empty_input_is_legal() {
        let parsed = parse_numbers(&[]).unwrap();
        assert_eq!(parsed, ParsedNumbers::Ints(vec![]));
    }

    #[test]
    fn test_unparsable_token_is_reported() {
        let err = parse_numbers(&tokens(&["1", "abc", "3"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidNumber { raw } if raw == "abc"));
    }
}
