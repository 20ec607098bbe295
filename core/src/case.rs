//! Loading test cases from their JSON form.
//!
//! A test case looks like
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every key other than `keys` is the share's x coordinate, and `value` is
//! its y coordinate written in `base`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info_span, warn};

use crate::config::ResolverConfig;
use crate::decode::{decode_value, parse_base};
use crate::error::{InputError, RecoveryError, RecoveryResult};
use crate::params::validate_threshold_config;
use crate::point::{Point, PointSet};
use crate::resolver::Resolution;

const KEYS_FIELD: &str = "keys";

/// Integers the input may spell either as JSON numbers or as strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Integral {
    Number(u64),
    Text(String),
}

impl Integral {
    fn to_usize(&self, name: &'static str) -> Result<usize, InputError> {
        let invalid = || InputError::InvalidParameter {
            name,
            value: self.to_string(),
        };
        match self {
            Integral::Number(value) => {
                usize::try_from(*value).map_err(|_| invalid())
            }
            Integral::Text(text) => text.trim().parse().map_err(|_| invalid()),
        }
    }
}

impl std::fmt::Display for Integral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Integral::Number(value) => write!(f, "{value}"),
            Integral::Text(text) => write!(f, "{text:?}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Keys {
    n: Integral,
    k: Integral,
}

#[derive(Debug, Deserialize)]
struct EncodedShare {
    base: Integral,
    value: String,
}

impl EncodedShare {
    fn decode(&self, x: i64) -> Result<Point, InputError> {
        let base = match &self.base {
            Integral::Number(base) => parse_base(&base.to_string()),
            Integral::Text(text) => parse_base(text),
        };
        base.and_then(|base| decode_value(&self.value, base))
            .map(|y| Point::new(x, y))
            .map_err(|source| InputError::Decode { x, source })
    }
}

/// A decoded test case: declared parameters plus its shares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    /// Number of shares the case declares.
    pub n: usize,
    /// Shares needed to determine the polynomial (degree `k - 1`).
    pub k: usize,
    pub points: PointSet,
}

impl TestCase {
    pub fn new(n: usize, k: usize, points: PointSet) -> Self {
        Self { n, k, points }
    }

    pub fn from_json(json: &str) -> RecoveryResult<Self> {
        let mut fields: BTreeMap<String, Value> =
            serde_json::from_str(json).map_err(InputError::from)?;
        let keys = fields.remove(KEYS_FIELD).ok_or(InputError::MissingKeys)?;
        let keys: Keys = serde_json::from_value(keys).map_err(InputError::from)?;
        let n = keys.n.to_usize("n")?;
        let k = keys.k.to_usize("k")?;

        let points = fields
            .into_iter()
            .map(|(key, value)| {
                let x = key
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| InputError::InvalidShareKey(key.clone()))?;
                let share: EncodedShare = serde_json::from_value(value)?;
                share.decode(x)
            })
            .collect::<Result<Vec<_>, InputError>>()?;

        Ok(Self::new(n, k, PointSet::new(points)?))
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

    /// Check `k` against the declared `n` and the shares actually present.
    ///
    /// A declared `n` that disagrees with the share count is only warned
    /// about; the shares present are what get resolved.
    pub fn validate(&self) -> RecoveryResult<()> {
        if !validate_threshold_config(self.k, self.n) {
            return Err(RecoveryError::DegenerateParameters {
                n: self.n,
                k: self.k,
            });
        }
        if self.n != self.points.len() {
            warn!(
                declared = self.n,
                present = self.points.len(),
                "declared share count differs from shares present"
            );
        }
        if self.points.len() < self.k {
            return Err(RecoveryError::InsufficientPoints {
                required: self.k,
                provided: self.points.len(),
            });
        }
        Ok(())
    }

    /// Validate, then resolve with `config`.
    pub fn solve(&self, config: &ResolverConfig) -> RecoveryResult<Resolution> {
        let span = info_span!("solve", n = self.n, k = self.k);
        let _enter = span.enter();

        self.validate()?;
        config.resolver(self.k)?.resolve(&self.points)?.to_resolution()
    }
}
