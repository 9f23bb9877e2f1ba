//!
//! The performance archiver binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let default_level = if arguments.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match arguments.command {
        Command::Run {
            archive,
            test,
            host,
            machine_config,
            config,
            result,
        } => {
            let mut archiver = performance_archiver::Archiver::new();
            for (label, value) in machine_config.into_iter() {
                archiver.set_machine_config(label, performance_archiver::Value::parse(&value));
            }
            for (name, value) in config.into_iter() {
                archiver.set_config(name, performance_archiver::Value::parse(&value));
            }
            for (name, value, tolerance) in result.into_iter() {
                match tolerance {
                    Some(tolerance) => archiver.set_result_with_tolerance(name, value, tolerance),
                    None => archiver.set_result(name, value),
                };
            }

            let outcome = archiver.run(archive.as_path(), test.as_str(), host.as_str())?;
            println!("{}", outcome.print());
            if outcome.is_success() {
                println!("End Result: {}", "TEST PASSED".green());
            } else {
                println!("End Result: {}", "TEST FAILED".bright_red());
                std::process::exit(1);
            }
        }
        Command::Print { archive, format } => {
            print!("{}", performance_archiver::print_archive(archive, format)?);
        }
    }

    Ok(())
}
