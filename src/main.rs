use std::cmp::Ordering;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rpm_vercmp::{Evr, label_compare};

/// The first argument is the newer one
const FIRST_NEWER: u8 = 11;
/// The second argument is the newer one
const SECOND_NEWER: u8 = 12;
const USAGE: u8 = 1;

/// Compare two RPM `[epoch:]version[-release]` strings and report which one is newer.
///
/// Exits with 11 if the first is newer, 12 if the second is newer and 0 if they are equal.
#[derive(Parser, Debug)]
#[command(name = "rpm-version-compare", version)]
struct Cli {
    /// Reject malformed epochs and empty versions instead of ignoring them
    #[arg(short = 's', long = "strict")]
    strict: bool,

    /// Log more details, repeat for even more
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(value_name = "EVR1")]
    first: String,

    #[arg(value_name = "EVR2")]
    second: String,
}

impl Cli {
    fn parse_evr<'a>(&self, raw: &'a str) -> Result<Evr<'a>> {
        if self.strict {
            Evr::try_parse(raw).with_context(|| format!("failed to parse {:?}", raw))
        } else {
            Ok(Evr::parse(raw))
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let first = cli.parse_evr(&cli.first)?;
    let second = cli.parse_evr(&cli.second)?;
    log::debug!("Comparing {:?} with {:?}", first, second);

    let code = match label_compare(&first, &second) {
        Ordering::Greater => {
            println!("{} is newer", first.as_normalized_form());
            ExitCode::from(FIRST_NEWER)
        }
        Ordering::Equal => {
            println!("These are equal");
            ExitCode::SUCCESS
        }
        Ordering::Less => {
            println!("{} is newer", second.as_normalized_form());
            ExitCode::from(SECOND_NEWER)
        }
    };
    Ok(code)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are reported through the error path too
            return if err.use_stderr() {
                ExitCode::from(USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(cli.verbose);

    run(&cli).unwrap_or_else(|err| {
        eprintln!("error: {:#}", err);
        ExitCode::from(USAGE)
    })
}
