#[cfg(test)]
mod integration;

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use shamir_recovery::{
        report::{CaseReport, Summary},
        RecoveryResult, ResolverConfig, TestCase, TolerancePolicy,
    };

    const FIRST_CASE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    // 3x^2 - 2x + 50 at x = 1..6, with the share at x = 4 corrupted.
    const SECOND_CASE: &str = r#"{
        "keys": { "n": 6, "k": 3 },
        "1": { "base": "10", "value": "51" },
        "2": { "base": "16", "value": "3a" },
        "3": { "base": "8", "value": "107" },
        "4": { "base": "10", "value": "9999" },
        "5": { "base": "2", "value": "1110011" },
        "6": { "base": "36", "value": "42" }
    }"#;

    #[test]
    fn test_complete_workflow() -> RecoveryResult<()> {
        let policy = TolerancePolicy::Legacy;
        let mut summary = Summary::default();
        let mut rendered = String::new();

        for (number, json) in [(1, FIRST_CASE), (2, SECOND_CASE)] {
            let case = TestCase::from_json(json)?;
            let config = ResolverConfig::default()
                .with_tolerance(policy.tolerance_for(number));
            let resolution = case.solve(&config)?;
            rendered.push_str(
                &CaseReport {
                    number,
                    case: &case,
                    resolution: &resolution,
                }
                .to_string(),
            );
            summary.push(number, resolution);
        }
        rendered.push_str(&summary.to_string());

        assert!(rendered.contains("Secret (constant term): 3\n"));
        assert!(rendered.contains("Output for TestCase-1: 3\n"));
        assert!(rendered.contains("Output for TestCase-2: 50\n"));
        assert!(rendered.contains("Wrong Data Set Points for Test Case-1: \n"));
        assert!(rendered.contains("Wrong Data Set Points for Test Case-2: 4\n"));
        Ok(())
    }

    #[test]
    fn second_case_decodes_to_expected_shares() -> RecoveryResult<()> {
        let case = TestCase::from_json(SECOND_CASE)?;
        let ys: Vec<BigInt> = case.points.iter().map(|p| p.y.clone()).collect();
        let expected: Vec<BigInt> = [51, 58, 71, 9999, 115, 146]
            .into_iter()
            .map(BigInt::from)
            .collect();
        assert_eq!(ys, expected);
        Ok(())
    }
}
