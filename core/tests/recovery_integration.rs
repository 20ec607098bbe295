use std::collections::BTreeSet;
use std::path::PathBuf;

use math::poly::other::random_polynomial;
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shamir_recovery::error::InputError;
use shamir_recovery::{
    resolve, AcceptanceConfig, Point, PointSet, RecoveryError, ResolverConfig,
    TestCase, TolerancePolicy,
};

fn point_set(pairs: &[(i64, i64)]) -> PointSet {
    PointSet::new(pairs.iter().map(|&(x, y)| Point::new(x, y)).collect())
        .expect("distinct x coordinates")
}

fn write_case(name: &str, json: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("shamir-recovery-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir is writable");
    let path = dir.join(name);
    std::fs::write(&path, json).expect("case file is writable");
    path
}

/// Encode `value` in `base` the way the case files do.
fn encode(mut value: u64, base: u32) -> String {
    if value == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while value > 0 {
        let digit = (value % base as u64) as u32;
        digits.push(char::from_digit(digit, base).expect("digit below base"));
        value /= base as u64;
    }
    digits.iter().rev().collect()
}

#[test]
fn every_pair_of_a_clean_line_agrees() {
    let points = point_set(&[(1, 3), (2, 5), (3, 7), (4, 9)]);
    let candidate = resolve(&points, 2, 1e-6).expect("resolution succeeds");
    let resolution = candidate.to_resolution().expect("finite secret");
    assert_eq!(resolution.secret, BigInt::from(1));
    assert!(resolution.erroneous_x.is_empty());
}

#[test]
fn corrupted_share_on_a_line_is_flagged() {
    let points = point_set(&[(1, 3), (2, 5), (3, 999), (4, 9)]);
    let candidate = resolve(&points, 2, 1e-6).expect("resolution succeeds");
    assert_eq!(candidate.indices, vec![0, 1]);
    let resolution = candidate.to_resolution().expect("finite secret");
    assert_eq!(resolution.secret, BigInt::from(1));
    assert_eq!(resolution.erroneous_x, BTreeSet::from([3]));
}

#[test]
fn duplicate_x_is_rejected_before_interpolation() {
    let err = PointSet::new(vec![
        Point::new(5, 1),
        Point::new(1, 2),
        Point::new(5, 3),
    ])
    .unwrap_err();
    assert!(matches!(err, RecoveryError::DuplicateXCoordinate(5)));
}

#[test]
fn too_few_points_is_insufficient() {
    let points = point_set(&[(1, 3), (2, 5)]);
    assert!(matches!(
        resolve(&points, 3, 1e-6),
        Err(RecoveryError::InsufficientPoints {
            required: 3,
            provided: 2
        })
    ));
}

#[test]
fn seeded_random_polynomial_is_reconstructed_from_encoded_shares() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let polynomial = random_polynomial(&mut rng, 3, 50);
    let k = polynomial.len();
    let constant = polynomial.constant_term();

    let mut shares = Vec::new();
    for x in 1..=7i64 {
        // Shift so every share is non-negative and encodable.
        let y = polynomial.evaluate(x as f64) + 100_000.0;
        let base = 2 + (x as u32 * 5) % 35;
        shares.push(format!(
            r#""{x}": {{"base": "{base}", "value": "{}"}}"#,
            encode(y as u64, base)
        ));
    }
    let json = format!(
        r#"{{"keys": {{"n": 7, "k": {k}}}, {}}}"#,
        shares.join(", ")
    );

    let resolution = TestCase::from_json(&json)
        .expect("case decodes")
        .solve(&ResolverConfig::default().with_tolerance(1e-3))
        .expect("case resolves");
    assert_eq!(
        resolution.secret,
        BigInt::from(constant as i64 + 100_000)
    );
    assert!(resolution.erroneous_x.is_empty());
}

#[test]
fn loads_and_solves_case_from_disk() {
    let path = write_case(
        "line.json",
        r#"{
            "keys": {"n": 4, "k": 2},
            "1": {"base": "10", "value": "3"},
            "2": {"base": "2", "value": "101"},
            "3": {"base": "16", "value": "3e7"},
            "4": {"base": "3", "value": "100"}
        }"#,
    );
    let case = TestCase::load(&path).expect("case loads");
    let resolution = case
        .solve(&ResolverConfig::default())
        .expect("case resolves");
    assert_eq!(resolution.secret, BigInt::from(1));
    assert_eq!(resolution.erroneous_x, BTreeSet::from([3]));
}

#[test]
fn strict_acceptance_skips_corrupted_first_pair() {
    let case = TestCase::new(
        4,
        2,
        point_set(&[(1, 100), (2, 5), (3, 7), (4, 9)]),
    );
    let permissive = case
        .solve(&ResolverConfig::default())
        .expect("permissive resolves");
    assert_eq!(permissive.erroneous_x, BTreeSet::from([3, 4]));

    let strict = case
        .solve(
            &ResolverConfig::default()
                .with_acceptance(AcceptanceConfig::MaxDisagreements(1)),
        )
        .expect("strict resolves");
    assert_eq!(strict.secret, BigInt::from(1));
    assert_eq!(strict.erroneous_x, BTreeSet::from([1]));
}

#[test]
fn legacy_tolerance_absorbs_small_noise_in_later_cases() {
    // 2x + 1 with +400 noise on the last share.
    let case = TestCase::new(
        3,
        2,
        point_set(&[(1, 3), (2, 5), (3, 407)]),
    );
    let policy = TolerancePolicy::Legacy;

    let first = case
        .solve(&ResolverConfig::default().with_tolerance(policy.tolerance_for(1)))
        .expect("first case resolves");
    assert_eq!(first.erroneous_x, BTreeSet::from([3]));

    let later = case
        .solve(&ResolverConfig::default().with_tolerance(policy.tolerance_for(2)))
        .expect("later case resolves");
    assert!(later.erroneous_x.is_empty());
}

#[test]
fn one_bad_case_does_not_affect_another() {
    let good = write_case(
        "good.json",
        r#"{"keys": {"n": 2, "k": 2}, "1": {"base": "10", "value": "3"}, "2": {"base": "10", "value": "5"}}"#,
    );
    let bad = write_case(
        "bad.json",
        r#"{"keys": {"n": 2, "k": 2}, "1": {"base": "8", "value": "9"}, "2": {"base": "10", "value": "5"}}"#,
    );

    let results: Vec<_> = [&bad, &good]
        .iter()
        .map(|path| {
            TestCase::load(path)
                .and_then(|case| case.solve(&ResolverConfig::default()))
        })
        .collect();

    assert!(matches!(
        results[0],
        Err(RecoveryError::MalformedInput(InputError::Decode { x: 1, .. }))
    ));
    assert_eq!(
        results[1].as_ref().expect("good case resolves").secret,
        BigInt::from(1)
    );
}
