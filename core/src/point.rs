use std::ops::Index;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{RecoveryError, RecoveryResult};

/// One decoded share: the polynomial's value `y` at participant `x`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: i64, y: impl Into<BigInt>) -> Self {
        Self { x, y: y.into() }
    }

    /// `x` widened to `f64` for interpolation.
    pub fn x_f64(&self) -> f64 {
        self.x as f64
    }

    /// `y` as the nearest `f64`. Values beyond `f64::MAX` become infinite.
    pub fn y_f64(&self) -> f64 {
        self.y.to_f64().unwrap_or(f64::NAN)
    }
}

impl<Y: Into<BigInt>> From<(i64, Y)> for Point {
    fn from((x, y): (i64, Y)) -> Self {
        Point::new(x, y)
    }
}

/// Shares of one test case, sorted ascending by `x` with no repeated `x`.
///
/// The order fixes which subsets the resolver tries first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Sort `points` by `x` and reject any `x` that appears twice.
    pub fn new(mut points: Vec<Point>) -> RecoveryResult<Self> {
        points.sort_by_key(|point| point.x);
        if let Some(pair) = points.windows(2).find(|pair| pair[0].x == pair[1].x)
        {
            return Err(RecoveryError::DuplicateXCoordinate(pair[0].x));
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// The points at `indices`, in the order given.
    pub fn select(&self, indices: &[usize]) -> Vec<&Point> {
        indices.iter().map(|&i| &self.points[i]).collect()
    }

    pub fn xs(&self) -> Vec<i64> {
        self.points.iter().map(|point| point.x).collect()
    }
}

impl Index<usize> for PointSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl TryFrom<Vec<Point>> for PointSet {
    type Error = RecoveryError;

    fn try_from(points: Vec<Point>) -> RecoveryResult<Self> {
        PointSet::new(points)
    }
}
