pub use crate::poly;
pub use crate::{
    combinations::{binomial, combinations, Combinations},
    error::MathError,
    poly::Polynomial,
};
