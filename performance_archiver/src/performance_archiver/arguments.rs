//!
//! The performance archiver arguments.
//!

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

///
/// The performance archiver arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Enables debug logging, unless overridden by `RUST_LOG`.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The action to perform.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The performance archiver action.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Checks a benchmark run against the archive, recording it if it is new.
    Run {
        /// The archive file path.
        #[arg(long)]
        archive: PathBuf,

        /// The test name.
        #[arg(long)]
        test: String,

        /// The machine name.
        #[arg(long, env = "HOSTNAME")]
        host: String,

        /// A machine description entry as `key=value`.
        #[arg(long = "machine-config", value_parser = parse_key_value)]
        machine_config: Vec<(String, String)>,

        /// A run configuration entry as `key=value`.
        #[arg(long = "config", value_parser = parse_key_value)]
        config: Vec<(String, String)>,

        /// A result as `name=value`, or `name=value@tolerance` for a relative tolerance.
        #[arg(long = "result", value_parser = parse_result)]
        result: Vec<(String, f64, Option<f64>)>,
    },
    /// Prints the archive for inspection.
    Print {
        /// The archive file path.
        #[arg(long)]
        archive: PathBuf,

        /// The output format: `yaml` or `json`.
        #[arg(long, default_value_t = performance_archiver::OutputFormat::Yaml)]
        format: performance_archiver::OutputFormat,
    },
}

///
/// Parses a `key=value` pair.
///
fn parse_key_value(string: &str) -> anyhow::Result<(String, String)> {
    let (key, value) = string
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected `key=value`, found `{string}`"))?;
    Ok((key.to_owned(), value.to_owned()))
}

///
/// Parses a `name=value[@tolerance]` result.
///
fn parse_result(string: &str) -> anyhow::Result<(String, f64, Option<f64>)> {
    let (name, measurement) = parse_key_value(string)?;
    let (value, tolerance) = match measurement.split_once('@') {
        Some((value, tolerance)) => (value, Some(tolerance.parse::<f64>()?)),
        None => (measurement.as_str(), None),
    };
    Ok((name, value.parse::<f64>()?, tolerance))
}

#[cfg(test)]
mod tests {
    #[test]
    fn parse_result() {
        assert_eq!(
            super::parse_result("Time=10.5@0.1").expect("Always valid"),
            ("Time".to_owned(), 10.5, Some(0.1))
        );
        assert_eq!(
            super::parse_result("Counter=22").expect("Always valid"),
            ("Counter".to_owned(), 22.0, None)
        );
        assert!(super::parse_result("Counter").is_err());
        assert!(super::parse_result("Time=fast").is_err());
    }
}
