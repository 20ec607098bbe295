//! Resolver configuration and the per-case tolerance policy.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, RecoveryResult};
use crate::params::{
    DEFAULT_TOLERANCE, LEGACY_FIRST_CASE_TOLERANCE,
    LEGACY_OTHER_CASE_TOLERANCE,
};
use crate::resolver::{
    AcceptanceRule, Candidate, MaxDisagreements, PermissiveQuorum, Resolver,
};

/// Which acceptance rule a configured resolver applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptanceConfig {
    #[default]
    Permissive,
    MaxDisagreements(usize),
}

impl AcceptanceRule for AcceptanceConfig {
    fn accepts(&self, candidate: &Candidate, outside: usize) -> bool {
        match *self {
            AcceptanceConfig::Permissive => {
                PermissiveQuorum.accepts(candidate, outside)
            }
            AcceptanceConfig::MaxDisagreements(limit) => {
                MaxDisagreements(limit).accepts(candidate, outside)
            }
        }
    }
}

/// Settings shared by every test case a resolver is built for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub tolerance: f64,
    pub acceptance: AcceptanceConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            acceptance: AcceptanceConfig::default(),
        }
    }
}

impl ResolverConfig {
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    pub fn with_acceptance(self, acceptance: AcceptanceConfig) -> Self {
        Self { acceptance, ..self }
    }

    pub fn from_json(json: &str) -> RecoveryResult<Self> {
        Ok(serde_json::from_str(json).map_err(InputError::from)?)
    }

    pub fn load(path: impl AsRef<Path>) -> RecoveryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| {
            InputError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&json)
    }

    /// Build a resolver for threshold `k`.
    pub fn resolver(&self, k: usize) -> RecoveryResult<Resolver<AcceptanceConfig>> {
        Resolver::with_rule(k, self.tolerance, self.acceptance)
    }
}

/// How the tolerance for each test case is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TolerancePolicy {
    /// Same tolerance for every case.
    Fixed(f64),
    /// `1.0` for the first case and `1000.0` for every later one.
    Legacy,
}

impl Default for TolerancePolicy {
    fn default() -> Self {
        TolerancePolicy::Fixed(DEFAULT_TOLERANCE)
    }
}

impl TolerancePolicy {
    /// Tolerance for the one-based `case_number`.
    pub fn tolerance_for(&self, case_number: usize) -> f64 {
        match *self {
            TolerancePolicy::Fixed(tolerance) => tolerance,
            TolerancePolicy::Legacy if case_number <= 1 => {
                LEGACY_FIRST_CASE_TOLERANCE
            }
            TolerancePolicy::Legacy => LEGACY_OTHER_CASE_TOLERANCE,
        }
    }
}
