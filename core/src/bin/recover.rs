use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use shamir_recovery::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use shamir_recovery::report::{CaseReport, Summary};
use shamir_recovery::{
    AcceptanceConfig, Resolution, ResolverConfig, TestCase, TolerancePolicy,
};
use tracing::info;

struct Options {
    config: ResolverConfig,
    policy: Option<TolerancePolicy>,
    log: LogConfig,
    cases: Vec<PathBuf>,
}

impl Options {
    /// Resolver settings for the one-based `number`-th case.
    fn config_for(&self, number: usize) -> ResolverConfig {
        match self.policy {
            Some(policy) => {
                self.config.clone().with_tolerance(policy.tolerance_for(number))
            }
            None => self.config.clone(),
        }
    }
}

fn print_usage() {
    eprintln!("Usage: recover [options] <case.json>...");
    eprintln!("  --tolerance <t>       agreement tolerance for every case");
    eprintln!("  --legacy-tolerance    1.0 for the first case, 1000.0 after");
    eprintln!("  --strict <max>        accept at most <max> disagreeing shares");
    eprintln!("  --config <file.json>  resolver settings (flags override)");
    eprintln!("  --log-format <fmt>    compact | pretty | json");
    eprintln!("  -v, --verbose         log every candidate subset");
}

fn next_value(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<String> {
    args.next()
        .with_context(|| format!("missing value for '{flag}'"))
}

/// `Ok(None)` means help was requested.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Options>> {
    let mut config_path = None;
    let mut policy = None;
    let mut strict = None;
    let mut log = LogConfig::default();
    let mut cases = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--tolerance" => {
                let value = next_value(&mut args, &arg)?;
                let tolerance: f64 = value
                    .parse()
                    .with_context(|| format!("invalid tolerance '{value}'"))?;
                policy = Some(TolerancePolicy::Fixed(tolerance));
            }
            "--legacy-tolerance" => policy = Some(TolerancePolicy::Legacy),
            "--strict" => {
                let value = next_value(&mut args, &arg)?;
                let limit: usize = value.parse().with_context(|| {
                    format!("invalid disagreement limit '{value}'")
                })?;
                strict = Some(limit);
            }
            "--config" => {
                config_path = Some(PathBuf::from(next_value(&mut args, &arg)?))
            }
            "--log-format" => {
                let value = next_value(&mut args, &arg)?;
                log.format =
                    value.parse::<LogFormat>().map_err(anyhow::Error::msg)?;
            }
            "-v" | "--verbose" => log.level = LogLevel::Debug,
            flag if flag.starts_with('-') => bail!("unknown option '{flag}'"),
            _ => cases.push(PathBuf::from(&arg)),
        }
    }

    if cases.is_empty() {
        bail!("no test case files given");
    }

    let mut config = match config_path {
        Some(path) => ResolverConfig::load(&path).with_context(|| {
            format!("loading resolver config {}", path.display())
        })?,
        None => ResolverConfig::default(),
    };
    if let Some(limit) = strict {
        config =
            config.with_acceptance(AcceptanceConfig::MaxDisagreements(limit));
    }

    Ok(Some(Options {
        config,
        policy,
        log,
        cases,
    }))
}

fn run_case(
    number: usize,
    path: &Path,
    config: &ResolverConfig,
) -> Result<Resolution> {
    info!(
        case = number,
        path = %path.display(),
        tolerance = config.tolerance,
        "solving test case"
    );
    let case = TestCase::load(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let resolution = case
        .solve(config)
        .with_context(|| format!("resolving {}", path.display()))?;

    println!(
        "{}",
        CaseReport {
            number,
            case: &case,
            resolution: &resolution,
        }
    );
    Ok(resolution)
}

fn main() -> ExitCode {
    let options = match parse_args(env::args().skip(1)) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err:#}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&options.log) {
        eprintln!("logging disabled: {err}");
    }

    let mut summary = Summary::default();
    let mut failures = 0usize;
    for (index, path) in options.cases.iter().enumerate() {
        let number = index + 1;
        match run_case(number, path, &options.config_for(number)) {
            Ok(resolution) => summary.push(number, resolution),
            Err(err) => {
                failures += 1;
                eprintln!("Error in test case {number}: {err:#}");
            }
        }
    }

    if !summary.is_empty() {
        print!("{summary}");
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
