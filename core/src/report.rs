//! Console rendering of resolved test cases.

use std::collections::BTreeSet;
use std::fmt;

use crate::case::TestCase;
use crate::resolver::Resolution;

/// Space-separated x coordinates, empty for an empty set.
pub fn join_x(xs: &BTreeSet<i64>) -> String {
    xs.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Per-case block: parameters, decoded shares and the outcome.
pub struct CaseReport<'a> {
    pub number: usize,
    pub case: &'a TestCase,
    pub resolution: &'a Resolution,
}

impl fmt::Display for CaseReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== TEST CASE {} ===", self.number)?;
        writeln!(f, "n: {}, k: {}", self.case.n, self.case.k)?;
        writeln!(f, "Points:")?;
        for point in &self.case.points {
            writeln!(f, "({}, {})", point.x, point.y)?;
        }
        writeln!(f, "Secret (constant term): {}", self.resolution.secret)?;
        writeln!(f, "Wrong points: {}", join_x(&self.resolution.erroneous_x))
    }
}

/// Closing block listing every successfully resolved case.
#[derive(Debug, Default)]
pub struct Summary {
    entries: Vec<(usize, Resolution)>,
}

impl Summary {
    pub fn push(&mut self, number: usize, resolution: Resolution) {
        self.entries.push((number, resolution));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== ANSWERS FOR FORM ===")?;
        for (number, resolution) in &self.entries {
            writeln!(f, "Output for TestCase-{number}: {}", resolution.secret)?;
        }
        for (number, resolution) in &self.entries {
            writeln!(
                f,
                "Wrong Data Set Points for Test Case-{number}: {}",
                join_x(&resolution.erroneous_x)
            )?;
        }
        Ok(())
    }
}
