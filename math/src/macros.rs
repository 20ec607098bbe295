//! Shared macros for constructing core math primitives.

/// Construct a [`Polynomial`](crate::poly::Polynomial) from coefficients,
/// lowest degree first.
///
/// Integer and float literals are both accepted and widened to `f64`.
///
/// ```
/// use math::prelude::*;
///
/// let p = poly![1, 2.5, 3];
/// assert_eq!(p.coefficients(), &[1.0, 2.5, 3.0]);
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::poly::Polynomial::default()
    };
    ($c:expr; $n:expr) => {
        $crate::poly::Polynomial::from(vec![($c) as f64; $n])
    };
    ($($c:expr),+ $(,)?) => {
        $crate::poly::Polynomial::from(vec![$(($c) as f64),+])
    };
}
