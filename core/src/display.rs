//! Exact string rendering for both value types.
//!
//! Base 10 goes through repeated division by ten on the magnitude words, so
//! every digit is exact even where the float conversion would round. Bases 2
//! and 16 extract bits and nibbles straight from the words, high word first.
//! Negative signed values render as a minus sign plus their magnitude, not
//! as their two's-complement bit pattern.

use std::fmt::{self, Binary, Display, Formatter, LowerHex, UpperHex};

use soft64_common::WordPair;

use crate::int64::Int64;
use crate::uint64::Uint64;

const TEN: WordPair = WordPair::new(10, 0);

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Exact base-10 digits of `words`, read unsigned.
fn decimal(words: WordPair) -> String {
    if words.is_zero() {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    let mut value = words;
    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem(TEN);
        digits.push(DIGITS[remainder.lo as usize]);
        value = quotient;
    }

    digits.iter().rev().map(|&d| d as char).collect()
}

/// Digits of `words` in a power-of-two base, one digit per `bits` bits,
/// high word first, leading zeros stripped.
fn radix_pow2(words: WordPair, bits: u32, upper: bool) -> String {
    let mask = (1u32 << bits) - 1;
    let mut out = String::new();

    for i in (0..64 / bits).rev() {
        let word = if i * bits >= 32 { words.hi } else { words.lo };
        let digit = (word >> (i * bits % 32)) & mask;
        if out.is_empty() && digit == 0 && i != 0 {
            continue;
        }
        let c = DIGITS[digit as usize] as char;
        out.push(if upper { c.to_ascii_uppercase() } else { c });
    }

    out
}

/// The magnitude to render and whether a sign goes in front. The magnitude
/// of `MIN` is its own bit pattern read unsigned (2^63), which is exactly
/// why the negation below still produces something printable.
fn signed_parts(value: Int64) -> (bool, WordPair) {
    if value.is_negative() {
        (true, value.words().wrapping_neg())
    } else {
        (false, value.words())
    }
}

impl Display for Uint64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &decimal(self.words()))
    }
}

impl Display for Int64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (negative, magnitude) = signed_parts(*self);
        f.pad_integral(!negative, "", &decimal(magnitude))
    }
}

impl LowerHex for Uint64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &radix_pow2(self.words(), 4, false))
    }
}

impl UpperHex for Uint64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &radix_pow2(self.words(), 4, true))
    }
}

impl Binary for Uint64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &radix_pow2(self.words(), 1, false))
    }
}

impl LowerHex for Int64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (negative, magnitude) = signed_parts(*self);
        f.pad_integral(!negative, "0x", &radix_pow2(magnitude, 4, false))
    }
}

impl UpperHex for Int64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (negative, magnitude) = signed_parts(*self);
        f.pad_integral(!negative, "0x", &radix_pow2(magnitude, 4, true))
    }
}

impl Binary for Int64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (negative, magnitude) = signed_parts(*self);
        f.pad_integral(!negative, "0b", &radix_pow2(magnitude, 1, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint(value: u64) -> Uint64 {
        Uint64::from_words(value as u32, (value >> 32) as u32)
    }

    fn int(value: i64) -> Int64 {
        Int64::from_words(value as u32, ((value as u64) >> 32) as u32)
    }

    #[test]
    fn test_decimal_exact_at_the_edges() {
        assert_eq!(Uint64::MAX.to_string(), "18446744073709551615");
        assert_eq!(Int64::MIN.to_string(), "-9223372036854775808");
        assert_eq!(Int64::MAX.to_string(), "9223372036854775807");
        assert_eq!(Uint64::ZERO.to_string(), "0");
        assert_eq!(Int64::ZERO.to_string(), "0");
    }

    #[test]
    fn test_decimal_matches_native() {
        for value in [0i64, 1, -1, 42, -42, 1 << 33, -(1 << 33), i64::MAX, i64::MIN] {
            assert_eq!(int(value).to_string(), value.to_string());
        }
        for value in [0u64, 1, 10, 99, 100, u64::MAX, 1 << 63] {
            assert_eq!(uint(value).to_string(), value.to_string());
        }
    }

    #[test]
    fn test_hex() {
        assert_eq!(format!("{:x}", Uint64::MAX), "ffffffffffffffff");
        assert_eq!(format!("{:X}", uint(0xFF)), "FF");
        assert_eq!(format!("{:x}", uint(0)), "0");
        assert_eq!(format!("{:x}", uint(0x8000_0000)), "80000000");
        assert_eq!(format!("{:#x}", uint(42)), "0x2a");
    }

    #[test]
    fn test_hex_signed_magnitude() {
        assert_eq!(format!("{:x}", int(42)), "2a");
        assert_eq!(format!("{:x}", int(-42)), "-2a");
        assert_eq!(format!("{:x}", Int64::MIN), "-8000000000000000");
        assert_eq!(format!("{:#x}", int(-42)), "-0x2a");
    }

    #[test]
    fn test_binary() {
        assert_eq!(format!("{:b}", uint(5)), "101");
        assert_eq!(format!("{:b}", uint(0)), "0");
        assert_eq!(format!("{:b}", int(-5)), "-101");
        assert_eq!(
            format!("{:b}", Uint64::MAX),
            "1".repeat(64)
        );
        assert_eq!(
            format!("{:b}", Uint64::from_words(0, 1)),
            format!("1{}", "0".repeat(32))
        );
    }

    #[test]
    fn test_width_and_fill() {
        assert_eq!(format!("{:5}", uint(42)), "   42");
        assert_eq!(format!("{:<5}", uint(42)), "42   ");
        assert_eq!(format!("{:05}", int(-42)), "-0042");
        assert_eq!(format!("{:08x}", uint(0xBEEF)), "0000beef");
    }

    #[test]
    fn test_high_word_digit_extraction() {
        // The shift-right test vector: 2^32 >> 1 renders from the low word of
        // the result after the bit crossed the boundary.
        let shifted = Uint64::from_words(0, 1) >> 1;
        assert_eq!(format!("{shifted:x}"), "80000000");
    }
}
