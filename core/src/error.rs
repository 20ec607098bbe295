use std::path::PathBuf;

use math::error::MathError;
use thiserror::Error;

/// Result type specialized for secret recovery.
pub type RecoveryResult<T> = std::result::Result<T, RecoveryError>;

/// Errors that abort recovery of a single test case.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("Insufficient points: need {required}, got {provided}")]
    InsufficientPoints { required: usize, provided: usize },
    #[error("Degenerate parameters: k = {k}, n = {n} (require 0 < k <= n)")]
    DegenerateParameters { n: usize, k: usize },
    #[error("Duplicate x coordinate: {0}")]
    DuplicateXCoordinate(i64),
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] InputError),
    #[error("No candidate subset was accepted after examining {examined}")]
    NoAcceptableCandidate { examined: usize },
    #[error("Reconstructed constant term {0} is not a finite number")]
    NonFiniteSecret(f64),
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Upstream failures while reading or decoding a test case.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing \"keys\" object")]
    MissingKeys,
    #[error("{name} must be a non-negative integer, got {value}")]
    InvalidParameter { name: &'static str, value: String },
    #[error("share key {0:?} is not an integer x coordinate")]
    InvalidShareKey(String),
    #[error("share at x = {x}: {source}")]
    Decode {
        x: i64,
        #[source]
        source: DecodeError,
    },
}

/// Errors raised while decoding a base-N digit string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("empty digit string")]
    EmptyValue,
    #[error("base {0} is outside the supported range 2..=36")]
    UnsupportedBase(u32),
    #[error("base {0:?} is not an integer")]
    InvalidBaseLiteral(String),
    #[error("digit {digit:?} is not valid in base {base}")]
    InvalidDigit { digit: char, base: u32 },
}
