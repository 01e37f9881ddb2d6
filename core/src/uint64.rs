use std::cmp::Ordering;
use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Not, Shl, Shr, Sub};

use serde::{Deserialize, Serialize};
use soft64_common::WordPair;

use crate::convert;
use crate::error::{ArithError, Result};
use crate::int64::Int64;

/// An unsigned 64-bit integer emulated as two 32-bit words.
///
/// Arithmetic wraps modulo 2^64; division and remainder by zero are the only
/// failing operations. Values are immutable: every operation returns a new
/// value.
///
/// The arithmetic operators (`+`, `-`, `*`, `<<`, `>>`) carry the same
/// wrapping semantics as the named `wrapping_*` methods, in the manner of
/// [`std::num::Wrapping`]. The right shift is logical: vacated bits fill
/// with zero regardless of bit 63.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uint64(WordPair);

impl Uint64 {
    pub const ZERO: Self = Self(WordPair::ZERO);
    pub const ONE: Self = Self(WordPair::ONE);
    pub const MIN: Self = Self::ZERO;

    /// 2^64 − 1.
    pub const MAX: Self = Self(WordPair::new(0xFFFF_FFFF, 0xFFFF_FFFF));

    /// Build a value from its raw words, `lo` carrying bits 0..32 and `hi`
    /// bits 32..64.
    #[inline]
    pub const fn from_words(lo: u32, hi: u32) -> Self {
        Self(WordPair::new(lo, hi))
    }

    #[inline]
    pub(crate) const fn from_pair(words: WordPair) -> Self {
        Self(words)
    }

    #[inline]
    pub(crate) const fn words(self) -> WordPair {
        self.0
    }

    #[inline]
    pub const fn low_word(self) -> u32 {
        self.0.lo
    }

    #[inline]
    pub const fn high_word(self) -> u32 {
        self.0.hi
    }

    /// Truncate a native float toward zero and reduce it modulo 2^64. Zero
    /// and non-finite inputs produce zero; negative and out-of-range inputs
    /// wrap silently rather than erroring.
    pub fn from_f64(value: f64) -> Self {
        Self(convert::words_from_f64(value))
    }

    /// Approximate conversion to the native float, `hi * 2^32 + lo`.
    ///
    /// Exact up to 2^53; above that the low bits round away. Callers that
    /// need the digits intact should format the value instead.
    pub fn to_f64(self) -> f64 {
        convert::words_to_f64(self.0)
    }

    /// Reinterpret the bits as signed; no numeric conversion happens.
    #[inline]
    pub const fn cast_signed(self) -> Int64 {
        Int64::from_pair(self.0)
    }

    /// Number of leading zero bits, 0..=64.
    pub fn leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }

    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    /// Quotient and remainder in one step; the kernel computes both anyway.
    pub fn div_rem(self, rhs: Self) -> Result<(Self, Self)> {
        if rhs == Self::ZERO {
            return Err(ArithError::DivisionByZero);
        }
        let (quotient, remainder) = self.0.div_rem(rhs.0);
        Ok((Self(quotient), Self(remainder)))
    }

    pub fn try_div(self, rhs: Self) -> Result<Self> {
        Ok(self.div_rem(rhs)?.0)
    }

    pub fn try_rem(self, rhs: Self) -> Result<Self> {
        Ok(self.div_rem(rhs)?.1)
    }

    /// Shift left by `n % 64` bits.
    pub fn wrapping_shl(self, n: u32) -> Self {
        Self(self.0.wrapping_shl(n))
    }

    /// Logical shift right by `n % 64` bits, zero-filling from the top.
    pub fn wrapping_shr(self, n: u32) -> Self {
        Self(self.0.wrapping_shr(n))
    }

    /// Smallest of `values` under the unsigned order, folded from the `MAX`
    /// identity; the empty iterator therefore yields `MAX`.
    pub fn min_of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        values.into_iter().fold(Self::MAX, |a, b| a.min(b))
    }

    /// Largest of `values` under the unsigned order, folded from the zero
    /// identity.
    pub fn max_of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        values.into_iter().fold(Self::MIN, |a, b| a.max(b))
    }
}

impl From<Int64> for Uint64 {
    /// Bit-level reinterpretation, the signed/unsigned pass-through.
    fn from(value: Int64) -> Self {
        value.cast_unsigned()
    }
}

impl Ord for Uint64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_unsigned(other.0)
    }
}

impl PartialOrd for Uint64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Uint64 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for Uint64 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl Mul for Uint64 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl Not for Uint64 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl BitAnd for Uint64 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Uint64 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for Uint64 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Shl<u32> for Uint64 {
    type Output = Self;

    #[inline]
    fn shl(self, n: u32) -> Self {
        self.wrapping_shl(n)
    }
}

impl Shr<u32> for Uint64 {
    type Output = Self;

    #[inline]
    fn shr(self, n: u32) -> Self {
        self.wrapping_shr(n)
    }
}
