use std::io::{self, Write};

use argument::{normalize_legacy_flags, Cli};
use clap::{CommandFactory, Parser};
#[cfg(feature = "log")]
use hide_my_proxy::initialize_logging;
use hide_my_proxy::{ArgumentError, Configuration};

mod argument;

/// Exit status for a bad invocation, same as clap's own usage errors.
const USAGE_EXIT_CODE: i32 = 2;

fn main() {
    if let Err(e) = run_application() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Prints the usage line and `<program>: error: <message>`, then exits.
fn report_usage_error(error: &ArgumentError) -> ! {
    let mut command = Cli::command();
    eprintln!("{}", command.render_usage());
    eprintln!("{}: error: {}", command.get_name(), error);
    std::process::exit(USAGE_EXIT_CODE)
}

fn run_application() -> anyhow::Result<()> {
    let options = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));

    #[cfg(feature = "log")]
    {
        let log_level = match options.log_level.as_str() {
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Off,
        };
        initialize_logging(log_level)?;
    }

    let configuration = match options.to_raw_arguments().process() {
        Ok(configuration) => configuration,
        Err(error) => report_usage_error(&error),
    };

    #[cfg(feature = "log")]
    log::info!(
        "Arguments validated: {} countries, ports [{}], saving to {}",
        configuration.countries().len(),
        configuration.ports(),
        configuration.database_file().display()
    );

    write_configuration(&configuration, &options.format, io::stdout().lock())
}

/// Writes the validated configuration for the scraping engine.
///
/// A reader that went away early (`| head`) is not an error.
fn write_configuration<W: Write>(
    configuration: &Configuration,
    format: &str,
    mut out: W,
) -> anyhow::Result<()> {
    let output = match format {
        "json" => configuration.as_json()?,
        _ => configuration.to_string(),
    };
    match writeln!(out, "{}", output).and_then(|_| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => Ok(result?),
    }
}
