pub mod countries;
pub mod proxy;
pub mod validator;

pub use countries::CountriesSource;
pub use proxy::models::{AnonymityLevel, Ports, Protocol, Tier};
pub use validator::{ArgumentError, Configuration, PortArgument, RawArguments};

/// Initializes the logging system for the application.
///
/// Log messages go to stderr so they never mix with the configuration written
/// to stdout.
///
/// # Arguments
///
/// * `log_level`: The desired verbosity level for logging. Determines which log messages will be displayed.
///
/// # Returns
///
/// A result indicating the success or failure of the logging setup.
#[cfg(feature = "log")]
pub fn initialize_logging(log_level: log::LevelFilter) -> anyhow::Result<()> {
    stderrlog::new()
        .module(module_path!()) // Configures the module path for log messages.
        .show_module_names(true) // Enables module names in log output.
        .verbosity(log_level) // Sets the specified log verbosity level.
        .init()?; // Initializes the logger.
    Ok(())
}
