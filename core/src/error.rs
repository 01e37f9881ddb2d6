use thiserror::Error;

/// Errors from the arithmetic surface.
///
/// Overflow is never one of them: every arithmetic operation wraps modulo
/// 2^64 by design, matching two's-complement hardware.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArithError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors from parsing a 64-bit value out of a string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    // No digits at all, or nothing after a sign/base prefix
    #[error("cannot parse a 64-bit value from an empty string")]
    Empty,

    #[error("invalid digit '{0}' for base {1}")]
    InvalidDigit(char, u32),

    // Parsing rejects out-of-range literals instead of wrapping them
    #[error("number too large to fit in 64 bits")]
    Overflow,

    #[error("sign '{0}' is not valid for this type")]
    InvalidSign(char),
}

/// Result type for operations that can fail.
pub type Result<T, E = ArithError> = std::result::Result<T, E>;
