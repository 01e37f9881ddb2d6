//! Exact string parsing for both value types.
//!
//! Digits accumulate directly into a word pair through the kernel's multiply
//! and add; no floating-point intermediate touches the value, so every
//! representable literal parses losslessly. Literals are decimal by default,
//! with `0x`/`0X` and `0b`/`0B` prefixes for hex and binary, and an optional
//! leading sign. Unlike arithmetic, parsing rejects out-of-range literals
//! instead of wrapping them.

use std::cmp::Ordering;
use std::str::FromStr;

use soft64_common::WordPair;

use crate::error::ParseError;
use crate::int64::Int64;
use crate::uint64::Uint64;

struct Literal<'a> {
    negative: bool,
    digits: &'a str,
    base: u32,
}

fn split_literal(input: &str, allow_negative: bool) -> Result<Literal<'_>, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut rest = input;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('-') {
        if !allow_negative {
            return Err(ParseError::InvalidSign('-'));
        }
        negative = true;
        rest = stripped;
    }

    let (digits, base) = if let Some(stripped) =
        rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))
    {
        (stripped, 16)
    } else if let Some(stripped) = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B")) {
        (stripped, 2)
    } else {
        (rest, 10)
    };

    if digits.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(Literal {
        negative,
        digits,
        base,
    })
}

/// Accumulate `digits` in `base` into a word pair, detecting overflow
/// exactly: the accumulator may not exceed ⌊(2^64 − 1) / base⌋ before a
/// multiply, and a wrapped addition leaves the accumulator below the digit
/// just added.
fn parse_words(digits: &str, base: u32) -> Result<WordPair, ParseError> {
    let base_pair = WordPair::new(base, 0);
    let (limit, _) = WordPair::new(0xFFFF_FFFF, 0xFFFF_FFFF).div_rem(base_pair);

    let mut acc = WordPair::ZERO;
    for c in digits.chars() {
        let digit = c
            .to_digit(base)
            .ok_or(ParseError::InvalidDigit(c, base))?;
        if acc.cmp_unsigned(limit) == Ordering::Greater {
            return Err(ParseError::Overflow);
        }
        let digit_pair = WordPair::new(digit, 0);
        acc = acc.wrapping_mul(base_pair).wrapping_add(digit_pair);
        if acc.cmp_unsigned(digit_pair) == Ordering::Less {
            return Err(ParseError::Overflow);
        }
    }

    Ok(acc)
}

impl FromStr for Uint64 {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, ParseError> {
        let literal = split_literal(input, false)?;
        let words = parse_words(literal.digits, literal.base)?;
        Ok(Self::from_pair(words))
    }
}

impl FromStr for Int64 {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, ParseError> {
        let literal = split_literal(input, true)?;
        let magnitude = parse_words(literal.digits, literal.base)?;

        // Negative literals may reach 2^63 (MIN), positive ones only 2^63 − 1.
        let bound = if literal.negative {
            Int64::MIN.words()
        } else {
            Int64::MAX.words()
        };
        if magnitude.cmp_unsigned(bound) == Ordering::Greater {
            return Err(ParseError::Overflow);
        }

        Ok(Self::from_pair(if literal.negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }))
    }
}
