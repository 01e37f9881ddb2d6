//! Float conversion: the one boundary where native numeric values enter and
//! leave the two-word world.

use soft64_common::WordPair;

pub(crate) const POW2_32: f64 = 4_294_967_296.0;
pub(crate) const POW2_63: f64 = 9_223_372_036_854_775_808.0;
pub(crate) const POW2_64: f64 = 18_446_744_073_709_551_616.0;

/// Truncate a native float toward zero and reduce it modulo 2^64, producing
/// the word pair both value types construct themselves from.
///
/// Zero and non-finite inputs (NaN, ±∞) collapse to zero. Everything stays
/// in f64: `%` of exactly-representable values is exact, and splitting on
/// 2^32 only moves the exponent, so no precision is lost beyond what the
/// input already lacked. Negative inputs wrap through the word-level
/// two's-complement negation, which is what "modulo 2^64" means for them;
/// a float-side `2^64 - m` would round for small `m`, and native
/// float-to-int casts saturate out of range, so the wrap cannot be had from
/// `as` either.
pub(crate) fn words_from_f64(value: f64) -> WordPair {
    if value == 0.0 || !value.is_finite() {
        return WordPair::ZERO;
    }

    let magnitude = value.trunc().abs() % POW2_64;
    let words = WordPair::new(
        (magnitude % POW2_32) as u32,
        (magnitude / POW2_32) as u32,
    );

    if value < 0.0 {
        words.wrapping_neg()
    } else {
        words
    }
}

/// The magnitude `hi * 2^32 + lo` as a native float; rounds above 2^53.
pub(crate) fn words_to_f64(words: WordPair) -> f64 {
    words.hi as f64 * POW2_32 + words.lo as f64
}
