//! Error-tolerant reconstruction: pick the first `k`-subset of shares whose
//! interpolating polynomial the acceptance rule is satisfied with.

use std::collections::BTreeSet;

use math::{Combinations, Polynomial};
use num_bigint::BigInt;
use num_traits::FromPrimitive;
use serde::Serialize;
use tracing::{debug, debug_span, info};

use crate::error::{RecoveryError, RecoveryResult};
use crate::params::validate_tolerance;
use crate::point::{Point, PointSet};

/// A `k`-subset of the shares, the polynomial through it, and the shares
/// outside the subset that disagree with that polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Positions within the [`PointSet`], ascending.
    pub indices: Vec<usize>,
    pub coefficients: Polynomial,
    /// `x` of every non-subset share with `|P(x) - y| >= tolerance`.
    pub wrong: BTreeSet<i64>,
    pub all_agree: bool,
}

impl Candidate {
    pub fn disagreements(&self) -> usize {
        self.wrong.len()
    }

    /// The constant term rounded to the nearest integer (ties away from zero).
    pub fn secret(&self) -> RecoveryResult<BigInt> {
        let constant = self.coefficients.constant_term();
        BigInt::from_f64(constant.round())
            .ok_or(RecoveryError::NonFiniteSecret(constant))
    }

    pub fn to_resolution(&self) -> RecoveryResult<Resolution> {
        Ok(Resolution {
            secret: self.secret()?,
            erroneous_x: self.wrong.clone(),
        })
    }
}

/// Outcome of resolving one test case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub secret: BigInt,
    pub erroneous_x: BTreeSet<i64>,
}

/// Decides whether an evaluated candidate ends the search.
///
/// `outside` is the number of shares not in the candidate's subset.
pub trait AcceptanceRule {
    fn accepts(&self, candidate: &Candidate, outside: usize) -> bool;
}

impl<F> AcceptanceRule for F
where
    F: Fn(&Candidate, usize) -> bool,
{
    fn accepts(&self, candidate: &Candidate, outside: usize) -> bool {
        self(candidate, outside)
    }
}

/// Accept when every outside share agrees or when the disagreements number
/// at most `outside`.
///
/// The second clause always holds, so the first subset enumerated is always
/// accepted. This reproduces the legacy resolver's output exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PermissiveQuorum;

impl AcceptanceRule for PermissiveQuorum {
    fn accepts(&self, candidate: &Candidate, outside: usize) -> bool {
        candidate.all_agree || candidate.disagreements() <= outside
    }
}

/// Accept only candidates with at most the given number of disagreeing shares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxDisagreements(pub usize);

impl AcceptanceRule for MaxDisagreements {
    fn accepts(&self, candidate: &Candidate, _outside: usize) -> bool {
        candidate.all_agree || candidate.disagreements() <= self.0
    }
}

/// Whether `point` lies on `coefficients` within `tolerance` (strict `<`).
///
/// A non-finite evaluation or share value never agrees.
pub fn agrees(coefficients: &Polynomial, point: &Point, tolerance: f64) -> bool {
    let residual = (coefficients.evaluate(point.x_f64()) - point.y_f64()).abs();
    residual < tolerance
}

/// Searches `k`-subsets of a [`PointSet`] in lexicographic index order and
/// returns the first candidate its [`AcceptanceRule`] accepts.
#[derive(Clone, Debug)]
pub struct Resolver<R = PermissiveQuorum> {
    k: usize,
    tolerance: f64,
    rule: R,
}

impl Resolver<PermissiveQuorum> {
    pub fn new(k: usize, tolerance: f64) -> RecoveryResult<Self> {
        Resolver::with_rule(k, tolerance, PermissiveQuorum)
    }
}

impl<R: AcceptanceRule> Resolver<R> {
    pub fn with_rule(k: usize, tolerance: f64, rule: R) -> RecoveryResult<Self> {
        if k == 0 {
            return Err(RecoveryError::DegenerateParameters { n: 0, k });
        }
        if !validate_tolerance(tolerance) {
            return Err(RecoveryError::InvalidTolerance(tolerance));
        }
        Ok(Self { k, tolerance, rule })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Interpolate the shares at `indices` and classify every other share.
    ///
    /// `indices` must be ascending and name exactly `k` distinct positions.
    pub fn evaluate_subset(
        &self,
        points: &PointSet,
        indices: Vec<usize>,
    ) -> RecoveryResult<Candidate> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = points
            .select(&indices)
            .into_iter()
            .map(|point| (point.x_f64(), point.y_f64()))
            .unzip();
        let coefficients = Polynomial::lagrange_interpolate(&xs, &ys)?;

        let wrong: BTreeSet<i64> = points
            .iter()
            .enumerate()
            .filter(|(i, _)| indices.binary_search(i).is_err())
            .filter(|(_, point)| !agrees(&coefficients, point, self.tolerance))
            .map(|(_, point)| point.x)
            .collect();

        Ok(Candidate {
            all_agree: wrong.is_empty(),
            indices,
            coefficients,
            wrong,
        })
    }

    /// Every candidate in enumeration order, evaluated lazily.
    pub fn candidates<'a>(
        &'a self,
        points: &'a PointSet,
    ) -> impl Iterator<Item = RecoveryResult<Candidate>> + 'a {
        Combinations::new(points.len(), self.k)
            .map(move |indices| self.evaluate_subset(points, indices))
    }

    /// Return the first accepted candidate. The winner is final.
    pub fn resolve(&self, points: &PointSet) -> RecoveryResult<Candidate> {
        if points.len() < self.k {
            return Err(RecoveryError::InsufficientPoints {
                required: self.k,
                provided: points.len(),
            });
        }

        let span = debug_span!(
            "resolve",
            n = points.len(),
            k = self.k,
            tolerance = self.tolerance
        );
        let _enter = span.enter();

        let outside = points.len() - self.k;
        let mut examined = 0usize;
        for candidate in self.candidates(points) {
            let candidate = candidate?;
            examined += 1;
            debug!(
                indices = ?candidate.indices,
                disagreements = candidate.disagreements(),
                "evaluated candidate subset"
            );
            if self.rule.accepts(&candidate, outside) {
                info!(
                    examined,
                    constant_term = candidate.coefficients.constant_term(),
                    erroneous_x = ?candidate.wrong,
                    "accepted candidate subset"
                );
                return Ok(candidate);
            }
        }

        Err(RecoveryError::NoAcceptableCandidate { examined })
    }
}

/// Resolve `points` with threshold `k` under the permissive default rule.
pub fn resolve(
    points: &PointSet,
    k: usize,
    tolerance: f64,
) -> RecoveryResult<Candidate> {
    Resolver::new(k, tolerance)?.resolve(points)
}
