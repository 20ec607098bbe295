use std::collections::BTreeSet;

use math::prelude::*;
use num_bigint::BigInt;
use shamir_recovery::{
    resolve, Point, PointSet, RecoveryError, RecoveryResult, Resolver,
};

fn point_set(pairs: &[(i64, i64)]) -> RecoveryResult<PointSet> {
    PointSet::new(pairs.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

#[test]
fn interpolation_matches_resolver_coefficients() -> RecoveryResult<()> {
    // x^3 - x + 6
    let original = poly![6, -1, 0, 1];
    let pairs: Vec<(i64, i64)> = (1..=4)
        .map(|x| (x, original.evaluate(x as f64) as i64))
        .collect();
    let candidate = resolve(&point_set(&pairs)?, 4, 1e-6)?;
    for (got, want) in candidate
        .coefficients
        .coefficients()
        .iter()
        .zip(original.coefficients())
    {
        assert!((got - want).abs() < 1e-9, "{got} != {want}");
    }
    assert_eq!(candidate.secret()?, BigInt::from(6));
    Ok(())
}

#[test]
fn scenario_clean_line() -> RecoveryResult<()> {
    let candidate = resolve(&point_set(&[(1, 3), (2, 5), (3, 7), (4, 9)])?, 2, 1e-6)?;
    let resolution = candidate.to_resolution()?;
    assert_eq!(resolution.secret, BigInt::from(1));
    assert_eq!(resolution.erroneous_x, BTreeSet::new());
    Ok(())
}

#[test]
fn scenario_corrupted_line() -> RecoveryResult<()> {
    let points = point_set(&[(1, 3), (2, 5), (3, 999), (4, 9)])?;
    let resolution = resolve(&points, 2, 1e-6)?.to_resolution()?;
    assert_eq!(resolution.secret, BigInt::from(1));
    assert_eq!(resolution.erroneous_x, BTreeSet::from([3]));
    Ok(())
}

#[test]
fn every_candidate_is_visited_in_lexicographic_order() -> RecoveryResult<()> {
    let points = point_set(&[(1, 3), (2, 5), (3, 999), (4, 9)])?;
    let resolver = Resolver::new(2, 1e-6)?;
    let orders: Vec<Vec<usize>> = resolver
        .candidates(&points)
        .map(|candidate| candidate.map(|c| c.indices))
        .collect::<RecoveryResult<_>>()?;
    let expected: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
    assert_eq!(orders, expected);
    Ok(())
}

#[test]
fn duplicate_x_never_reaches_the_resolver() {
    assert!(matches!(
        point_set(&[(5, 1), (5, 2), (6, 3)]),
        Err(RecoveryError::DuplicateXCoordinate(5))
    ));
}
