//! Fixed parameters and validation helpers for secret recovery.

/// Default agreement tolerance for `|P(x) - y|`.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Tolerance the legacy two-case driver applied to its first test case.
pub const LEGACY_FIRST_CASE_TOLERANCE: f64 = 1.0;

/// Tolerance the legacy two-case driver applied to every later test case.
pub const LEGACY_OTHER_CASE_TOLERANCE: f64 = 1000.0;

/// Smallest radix accepted for encoded share values.
pub const MIN_BASE: u32 = 2;

/// Largest radix accepted for encoded share values (`0-9` then `a-z`).
pub const MAX_BASE: u32 = 36;

/// `k` must be positive and no larger than the number of shares `n`.
#[inline]
pub const fn validate_threshold_config(k: usize, n: usize) -> bool {
    k > 0 && k <= n
}

/// Tolerances must be non-negative; NaN is rejected.
#[inline]
pub fn validate_tolerance(tolerance: f64) -> bool {
    tolerance >= 0.0
}

#[inline]
pub const fn validate_base(base: u32) -> bool {
    base >= MIN_BASE && base <= MAX_BASE
}
