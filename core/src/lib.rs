pub mod case;
pub mod config;
pub mod decode;
pub mod error;
pub mod logging;
pub mod params;
pub mod point;
pub mod report;
pub mod resolver;

pub use case::TestCase;
pub use config::{AcceptanceConfig, ResolverConfig, TolerancePolicy};
pub use error::{RecoveryError, RecoveryResult};
pub use point::{Point, PointSet};
pub use resolver::{
    resolve, AcceptanceRule, Candidate, MaxDisagreements, PermissiveQuorum,
    Resolution, Resolver,
};
