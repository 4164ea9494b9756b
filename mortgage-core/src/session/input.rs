use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons raw input text is not accepted as a loan parameter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseInputError {
    #[error("input is empty")]
    Empty,

    #[error("invalid number '{input}': {reason}")]
    Invalid { input: String, reason: String },

    #[error("{0} is negative")]
    Negative(Decimal),
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses user-entered text into a non-negative [`Decimal`].
///
/// Accepts comma thousands separators (`"250,000"`) and scientific notation
/// (`"2.5e5"`). Empty or whitespace-only text is an error, as is a negative
/// amount.
pub fn parse_input(raw: &str) -> Result<Decimal, ParseInputError> {
    let normalized = normalize_decimal_input(raw);
    if normalized.is_empty() {
        return Err(ParseInputError::Empty);
    }

    let value = normalized
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|e| {
            tracing::warn!(input = %raw, "invalid decimal: {}", e);
            ParseInputError::Invalid {
                input: raw.to_string(),
                reason: e.to_string(),
            }
        })?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ParseInputError::Negative(value));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_input_accepts_plain_numbers() {
        assert_eq!(parse_input("200000"), Ok(dec!(200000)));
        assert_eq!(parse_input("6.25"), Ok(dec!(6.25)));
    }

    #[test]
    fn parse_input_accepts_comma_thousands_separator() {
        assert_eq!(parse_input("1,234.56"), Ok(dec!(1234.56)));
        assert_eq!(parse_input("1,234,567.89"), Ok(dec!(1234567.89)));
    }

    #[test]
    fn parse_input_trims_whitespace() {
        assert_eq!(parse_input("  123.45  \n"), Ok(dec!(123.45)));
    }

    #[test]
    fn parse_input_accepts_scientific_notation() {
        assert_eq!(parse_input("2.5e5"), Ok(dec!(250000)));
    }

    #[test]
    fn parse_input_empty_is_error() {
        assert_eq!(parse_input(""), Err(ParseInputError::Empty));
        assert_eq!(parse_input("   "), Err(ParseInputError::Empty));
    }

    #[test]
    fn parse_input_garbage_is_error() {
        assert!(matches!(
            parse_input("abc"),
            Err(ParseInputError::Invalid { .. })
        ));
        assert!(matches!(
            parse_input("12..5"),
            Err(ParseInputError::Invalid { .. })
        ));
    }

    #[test]
    fn parse_input_negative_is_error() {
        assert_eq!(parse_input("-5"), Err(ParseInputError::Negative(dec!(-5))));
    }

    #[test]
    fn parse_input_negative_zero_is_zero() {
        assert!(parse_input("-0").unwrap().is_zero());
    }
}
