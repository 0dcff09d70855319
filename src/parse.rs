//! Codepoint Argument Parsing
//!
//! Parses codepoints and codepoint ranges from command-line style text:
//! decimal (`768`), hexadecimal (`0x300`), the `U+0300` convention, and
//! inclusive ranges (`0x300..0x31F`).

use std::ops::RangeInclusive;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCodepointError {
    #[error("'{0}' is not a codepoint")]
    Invalid(String),
    #[error("{0:#x} is not a Unicode scalar value")]
    NotScalar(u32),
    #[error("range end {end:#x} is below start {start:#x}")]
    Backwards { start: u32, end: u32 },
}

fn parse_scalar(text: &str) -> Result<char, ParseCodepointError> {
    let (digits, radix) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix("U+"))
        .or_else(|| text.strip_prefix("u+"))
    {
        (hex, 16)
    } else {
        (text, 10)
    };

    let value = u32::from_str_radix(digits, radix)
        .map_err(|_| ParseCodepointError::Invalid(text.to_string()))?;
    char::from_u32(value).ok_or(ParseCodepointError::NotScalar(value))
}

/// Parse a single codepoint.
pub fn parse_codepoint(text: &str) -> Result<char, ParseCodepointError> {
    parse_scalar(text.trim())
}

/// Parse a codepoint or an inclusive `a..b` range. A bare codepoint parses
/// as the degenerate range `c..=c`.
pub fn parse_codepoint_range(text: &str) -> Result<RangeInclusive<char>, ParseCodepointError> {
    let text = text.trim();
    match text.split_once("..") {
        Some((start, end)) => {
            let start = parse_scalar(start)?;
            let end = parse_scalar(end)?;
            if end < start {
                return Err(ParseCodepointError::Backwards {
                    start: start as u32,
                    end: end as u32,
                });
            }
            Ok(start..=end)
        }
        None => {
            let c = parse_scalar(text)?;
            Ok(c..=c)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_and_hex() {
        assert_eq!(parse_codepoint("768"), Ok('\u{300}'));
        assert_eq!(parse_codepoint("0x300"), Ok('\u{300}'));
        assert_eq!(parse_codepoint("0X300"), Ok('\u{300}'));
        assert_eq!(parse_codepoint("U+0300"), Ok('\u{300}'));
        assert_eq!(parse_codepoint("u+300"), Ok('\u{300}'));
    }

    #[test]
    fn ranges() {
        assert_eq!(parse_codepoint_range("0x300..0x31F"), Ok('\u{300}'..='\u{31F}'));
        assert_eq!(parse_codepoint_range("0x4E2D"), Ok('中'..='中'));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_codepoint("xyz").is_err());
        assert!(parse_codepoint("0x").is_err());
        assert!(parse_codepoint("").is_err());
    }

    #[test]
    fn rejects_surrogates_and_overflow() {
        assert_eq!(parse_codepoint("0xD800"), Err(ParseCodepointError::NotScalar(0xD800)));
        assert!(parse_codepoint("0x110000").is_err());
    }

    #[test]
    fn rejects_backwards_range() {
        assert_eq!(
            parse_codepoint_range("0x31F..0x300"),
            Err(ParseCodepointError::Backwards { start: 0x31F, end: 0x300 })
        );
    }
}
