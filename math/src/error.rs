use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("interpolation requires at least one point")]
    EmptyInterpolationSet,
    #[error("got {xs} x-coordinates but {ys} y-coordinates")]
    MismatchedCoordinates { xs: usize, ys: usize },
}

pub type Error = MathError;
