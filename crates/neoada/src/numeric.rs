//! Recognizes Ada-style numeral shapes and converts a lexed numeric token into a concrete
//! value. The lexer has already bounded the lexeme (§4.1); this module only has to parse it.

use std::fmt;

/// The concrete value recovered from a numeric lexeme, already narrowed to the representation
/// its shape or explicit suffix calls for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    Natural(i64),
    Supernatural(u64),
    Number(f64),
    Byte(u8),
}

/// Failure parsing a numeric lexeme. Wrapped into `RuntimeError::InvalidNumericValue` by the
/// caller, which is the only place that knows the lexeme's source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericError(pub String);

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One-character type suffixes recognized after a numeral: `n` (Natural), `u` (Supernatural),
/// `d` (Number), `b` (Byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suffix {
    Natural,
    Supernatural,
    Number,
    Byte,
}

fn suffix_of(ch: char) -> Option<Suffix> {
    match ch.to_ascii_lowercase() {
        'n' => Some(Suffix::Natural),
        'u' => Some(Suffix::Supernatural),
        'd' => Some(Suffix::Number),
        'b' => Some(Suffix::Byte),
        _ => None,
    }
}

/// Splits a trailing one-character type suffix off a numeral lexeme, if present.
///
/// A suffix is only recognized when the character before it is part of the numeral body
/// (a digit, an underscore, or a closing `#` of a based literal) so that, e.g., a based
/// literal's own hex digits are never misread as a suffix.
fn split_suffix(lexeme: &str) -> (&str, Option<Suffix>) {
    let Some(last) = lexeme.chars().last() else {
        return (lexeme, None);
    };
    let Some(suffix) = suffix_of(last) else {
        return (lexeme, None);
    };
    let body = &lexeme[..lexeme.len() - last.len_utf8()];
    match body.chars().last() {
        Some(c) if c.is_ascii_digit() || c == '_' || c == '#' => (body, Some(suffix)),
        _ => (lexeme, None),
    }
}

/// Shape recognized for the numeral body (after suffix removal), per §4.1's recognition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Floating,
    Based,
    Decimal,
}

fn shape_of(body: &str) -> Shape {
    if body.contains('#') {
        Shape::Based
    } else if body.contains('.') || body.contains('e') || body.contains('E') {
        Shape::Floating
    } else {
        Shape::Decimal
    }
}

fn strip_underscores(s: &str) -> String {
    s.chars().filter(|c| *c != '_').collect()
}

fn parse_decimal_integer(body: &str) -> Result<u128, NumericError> {
    strip_underscores(body)
        .parse::<u128>()
        .map_err(|_| NumericError(format!("malformed decimal numeral {body:?}")))
}

fn parse_floating(body: &str) -> Result<f64, NumericError> {
    strip_underscores(body)
        .parse::<f64>()
        .map_err(|_| NumericError(format!("malformed floating numeral {body:?}")))
}

/// Parses `base "#" based_numeral "#" [ exponent ]` into an unsigned magnitude.
///
/// The exponent (when present) is applied as `magnitude * 10^exponent`, matching the
/// reference implementation's behavior exactly rather than raising the result to the
/// literal's own base.
fn parse_based(body: &str) -> Result<u128, NumericError> {
    let mut parts = body.splitn(2, '#');
    let base_str = parts.next().unwrap_or_default();
    let rest = parts
        .next()
        .ok_or_else(|| NumericError(format!("malformed based literal {body:?}")))?;
    let base: u32 = base_str
        .parse()
        .map_err(|_| NumericError(format!("malformed base {base_str:?}")))?;
    if !(2..=16).contains(&base) {
        return Err(NumericError(format!("based literal base {base} out of range 2..=16")));
    }
    let mut digit_parts = rest.splitn(2, '#');
    let digits = digit_parts.next().unwrap_or_default();
    let exponent_str = digit_parts.next();

    let digits = strip_underscores(digits);
    let magnitude = u128::from_str_radix(&digits, base)
        .map_err(|_| NumericError(format!("malformed based digits {digits:?} for base {base}")))?;

    let magnitude = match exponent_str {
        Some(exp) if !exp.is_empty() => {
            let exp = exp.trim_start_matches(['e', 'E']);
            let exponent: i32 = exp
                .parse()
                .map_err(|_| NumericError(format!("malformed exponent {exp:?}")))?;
            if exponent < 0 {
                return Err(NumericError("based literal exponent must be non-negative".to_owned()));
            }
            magnitude
                .checked_mul(10u128.pow(exponent.unsigned_abs()))
                .ok_or_else(|| NumericError("based literal overflow".to_owned()))?
        }
        _ => magnitude,
    };
    Ok(magnitude)
}

/// Parses a fully-lexed numeric token (digits, optional `.`/exponent/based shape, optional
/// one-character type suffix) into its concrete value.
pub fn parse_numeral(lexeme: &str) -> Result<ParsedNumber, NumericError> {
    let (body, suffix) = split_suffix(lexeme);
    if body.is_empty() {
        return Err(NumericError("empty numeral".to_owned()));
    }
    let shape = shape_of(body);

    match suffix {
        Some(Suffix::Number) => {
            let value = match shape {
                Shape::Floating => parse_floating(body)?,
                Shape::Based => parse_based(body)? as f64,
                Shape::Decimal => parse_decimal_integer(body)? as f64,
            };
            Ok(ParsedNumber::Number(value))
        }
        Some(Suffix::Natural) => {
            let magnitude = match shape {
                Shape::Based => parse_based(body)?,
                Shape::Decimal => parse_decimal_integer(body)?,
                Shape::Floating => return Err(NumericError("floating literal cannot carry a Natural suffix".to_owned())),
            };
            i64::try_from(magnitude)
                .map(ParsedNumber::Natural)
                .map_err(|_| NumericError(format!("{magnitude} does not fit a Natural")))
        }
        Some(Suffix::Supernatural) => {
            let magnitude = match shape {
                Shape::Based => parse_based(body)?,
                Shape::Decimal => parse_decimal_integer(body)?,
                Shape::Floating => {
                    return Err(NumericError("floating literal cannot carry a Supernatural suffix".to_owned()));
                }
            };
            u64::try_from(magnitude)
                .map(ParsedNumber::Supernatural)
                .map_err(|_| NumericError(format!("{magnitude} does not fit a Supernatural")))
        }
        Some(Suffix::Byte) => {
            let magnitude = match shape {
                Shape::Based => parse_based(body)?,
                Shape::Decimal => parse_decimal_integer(body)?,
                Shape::Floating => return Err(NumericError("floating literal cannot carry a Byte suffix".to_owned())),
            };
            u8::try_from(magnitude)
                .map(ParsedNumber::Byte)
                .map_err(|_| NumericError(format!("{magnitude} does not fit a Byte")))
        }
        None => match shape {
            Shape::Floating => Ok(ParsedNumber::Number(parse_floating(body)?)),
            Shape::Based => {
                let magnitude = parse_based(body)?;
                match i64::try_from(magnitude) {
                    Ok(natural) => Ok(ParsedNumber::Natural(natural)),
                    Err(_) => u64::try_from(magnitude)
                        .map(ParsedNumber::Supernatural)
                        .map_err(|_| NumericError(format!("{magnitude} does not fit a Supernatural"))),
                }
            }
            Shape::Decimal => {
                let magnitude = parse_decimal_integer(body)?;
                match i64::try_from(magnitude) {
                    Ok(natural) => Ok(ParsedNumber::Natural(natural)),
                    Err(_) => u64::try_from(magnitude)
                        .map(ParsedNumber::Supernatural)
                        .map_err(|_| NumericError(format!("{magnitude} does not fit a Supernatural"))),
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{ParsedNumber, parse_numeral};

    #[test]
    fn decimal_fits_natural() {
        assert_eq!(parse_numeral("42").unwrap(), ParsedNumber::Natural(42));
    }

    #[test]
    fn underscored_floating_with_negative_exponent() {
        // S7: lex "1_000_000.5E-3" as a single Number token, evaluate to 1000.0005.
        let value = parse_numeral("1_000_000.5E-3").unwrap();
        match value {
            ParsedNumber::Number(n) => assert!((n - 1000.0005).abs() < 1e-9),
            other => panic!("expected Number, got {other:?}"),
        }
    }

    #[test]
    fn based_literal_hex() {
        assert_eq!(parse_numeral("16#FF#").unwrap(), ParsedNumber::Natural(255));
    }

    #[test]
    fn suffix_forces_type() {
        assert_eq!(parse_numeral("10d").unwrap(), ParsedNumber::Number(10.0));
        assert_eq!(parse_numeral("10u").unwrap(), ParsedNumber::Supernatural(10));
        assert_eq!(parse_numeral("10b").unwrap(), ParsedNumber::Byte(10));
    }

    #[test]
    fn overflow_decimal_becomes_supernatural() {
        let value = parse_numeral("18446744073709551615").unwrap();
        assert_eq!(value, ParsedNumber::Supernatural(u64::MAX));
    }
}
