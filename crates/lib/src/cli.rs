//! CLI helpers.

mod bencher;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use core::time::Duration;
use std::ffi::OsString;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

pub use self::bencher::Bencher;
use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
    /// Warmup period in milliseconds.
    warmup: Option<u64>,
    /// Bench period in milliseconds.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--warmup" => {
                    opts.warmup = Some(number(arg, it.next())?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(number(arg, it.next())?);
                }
                "--count" => {
                    opts.count = Some(number(arg, it.next())?);
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }
}

/// Parse a numerical argument to the given option.
fn number<T>(name: &str, arg: Option<OsString>) -> Result<T>
where
    T: FromStr,
{
    let arg = arg.with_context(|| anyhow!("missing argument to `{name}`"))?;

    let Some(arg) = arg.to_str() else {
        bail!("non-utf8 argument to `{name}`");
    };

    arg.parse()
        .map_err(|_| anyhow!("bad argument to `{name}`: {arg}"))
}

/// Run the given solver according to the parsed options.
///
/// In the default mode the solver runs exactly once and its answer and wall
/// time are reported; under `--bench` it is sampled repeatedly instead. When
/// an expected answer is provided the produced answer is checked against it.
pub fn run<O, C, T>(opts: &Opts, expected: Option<C>, mut solve: T) -> Result<()>
where
    T: FnMut() -> Result<O>,
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    match opts.mode {
        Mode::Default => {
            let stdout = std::io::stdout();

            let mut o = Output::new(
                stdout.lock(),
                if opts.json {
                    OutputKind::Json
                } else {
                    OutputKind::Normal
                },
            );

            let start = Instant::now();
            let value = solve()?;
            let time = start.elapsed();

            if let Some(expect) = &expected {
                if !value.output_eq(expect) {
                    bail!("{value:?} (value) != {expect:?} (expected)");
                }
            }

            o.answer(format_args!("{value:?}"), time)?;
            Ok(())
        }
        Mode::Bench => Bencher::new().iter(opts, expected, solve),
    }
}

/// Timing report over the collected samples.
#[derive(Default, Debug, Deserialize, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl Report {
    /// Build a report from a sorted collection of samples.
    fn from_samples(samples: &[Duration]) -> Self {
        let count = samples.len();

        let avg = if count == 0 {
            Duration::default()
        } else {
            samples.iter().sum::<Duration>() / count as u32
        };

        let pct = |n: usize| match samples {
            [] => Duration::default(),
            _ => samples[(count - 1) * n / 100],
        };

        Self {
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
            p50: pct(50),
            p95: pct(95),
            p99: pct(99),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            count,
            min,
            max,
            avg,
            p50,
            p95,
            p99,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}
