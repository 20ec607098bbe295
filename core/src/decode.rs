//! Positional decoding of share values written in an arbitrary radix.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::DecodeError;
use crate::params::validate_base;

/// Decode `digits` written in `base` (2..=36) into an integer.
///
/// Digits are `0-9` followed by `a-z`, case-insensitively, so `"fF"` in
/// base 16 is 255. Surrounding whitespace is ignored. A digit that is not
/// valid for `base` is rejected rather than accumulated.
pub fn decode_value(digits: &str, base: u32) -> Result<BigInt, DecodeError> {
    if !validate_base(base) {
        return Err(DecodeError::UnsupportedBase(base));
    }
    let digits = digits.trim();
    if digits.is_empty() {
        return Err(DecodeError::EmptyValue);
    }

    digits.chars().try_fold(BigInt::zero(), |acc, digit| {
        let value = digit
            .to_digit(base)
            .ok_or(DecodeError::InvalidDigit { digit, base })?;
        Ok(acc * base + value)
    })
}

/// Parse a radix given as text, e.g. the `"base": "16"` field of a share.
pub fn parse_base(literal: &str) -> Result<u32, DecodeError> {
    let base = literal
        .trim()
        .parse::<u32>()
        .map_err(|_| DecodeError::InvalidBaseLiteral(literal.to_owned()))?;
    if !validate_base(base) {
        return Err(DecodeError::UnsupportedBase(base));
    }
    Ok(base)
}
