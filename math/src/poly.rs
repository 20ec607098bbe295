//! Real-coefficient polynomials used to reconstruct shared secrets.
//!
//! Coefficients are stored lowest degree first, so index `i` holds the
//! coefficient of `x^i`. All arithmetic is plain `f64`; callers comparing
//! evaluations against observed values are expected to use a tolerance.

use std::ops::Index;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};

/// A dense polynomial with `f64` coefficients.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// The zero polynomial with `len` coefficient slots.
    pub fn zero(len: usize) -> Self {
        Self {
            coefficients: vec![0.0; len],
        }
    }

    /// The constant polynomial `1`, padded to `len` coefficient slots.
    pub fn one(len: usize) -> Self {
        let mut poly = Self::zero(len.max(1));
        poly.coefficients[0] = 1.0;
        poly
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficients
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Index of the highest non-zero coefficient, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|c| !c.is_zero())
    }

    /// Value at `x = 0`.
    pub fn constant_term(&self) -> f64 {
        self.coefficients.first().copied().unwrap_or(0.0)
    }

    /// Evaluate `Σ c_d · x^d` by accumulating successive powers of `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut result = 0.0;
        let mut power = 1.0;
        for &coeff in &self.coefficients {
            result += coeff * power;
            power *= x;
        }
        result
    }

    /// Multiply by the linear factor `(x - root) / denominator`.
    ///
    /// The coefficient vector keeps its length; the caller sizes it so the
    /// product's degree always fits.
    pub fn mul_linear_factor(&self, root: f64, denominator: f64) -> Self {
        let shift = 1.0 / denominator;
        let scale = -root / denominator;
        let coefficients = (0..self.len())
            .map(|d| {
                let lower = if d == 0 {
                    0.0
                } else {
                    self.coefficients[d - 1]
                };
                lower * shift + self.coefficients[d] * scale
            })
            .collect();
        Self { coefficients }
    }

    /// Accumulate `scale · other` into `self`, coefficient by coefficient.
    pub fn add_scaled(&mut self, other: &Polynomial, scale: f64) {
        if self.len() < other.len() {
            self.coefficients.resize(other.len(), 0.0);
        }
        for (acc, &coeff) in self.coefficients.iter_mut().zip(&other.coefficients)
        {
            *acc += scale * coeff;
        }
    }

    /// The Lagrange basis polynomial `L_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)`.
    ///
    /// The x-coordinates must be pairwise distinct.
    pub fn lagrange_basis(xs: &[f64], i: usize) -> Self {
        let xi = xs[i];
        xs.iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(Self::one(xs.len()), |basis, (_, &xj)| {
                basis.mul_linear_factor(xj, xi - xj)
            })
    }

    /// Interpolate the unique polynomial of degree `< xs.len()` through
    /// `(xs[i], ys[i])`.
    ///
    /// The x-coordinates must be pairwise distinct. That is a precondition
    /// the caller establishes once, not something checked per point here.
    pub fn lagrange_interpolate(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(MathError::MismatchedCoordinates {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(MathError::EmptyInterpolationSet);
        }

        let mut result = Self::zero(xs.len());
        for (i, &yi) in ys.iter().enumerate() {
            result.add_scaled(&Self::lagrange_basis(xs, i), yi);
        }
        Ok(result)
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coefficients: &[f64]) -> Self {
        Self {
            coefficients: coefficients.to_vec(),
        }
    }
}

impl Index<usize> for Polynomial {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coefficients[index]
    }
}

pub mod other {
    use rand::Rng;

    use super::Polynomial;

    /// Sample a polynomial of the given degree with integer-valued
    /// coefficients drawn uniformly from `-bound..=bound`.
    pub fn random_polynomial<R>(rng: &mut R, degree: usize, bound: i64) -> Polynomial
    where
        R: Rng + ?Sized,
    {
        (0..=degree)
            .map(|_| rng.random_range(-bound..=bound) as f64)
            .collect::<Vec<_>>()
            .into()
    }
}
