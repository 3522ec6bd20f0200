use std::{io, path::PathBuf};

use super::PortArgument;

/// Usage errors raised while turning raw arguments into a [`Configuration`].
///
/// The messages name the offending flag and value so they can be shown as-is
/// after the program name.
///
/// [`Configuration`]: super::Configuration
#[derive(Debug, thiserror::Error)]
pub enum ArgumentError {
    #[error("argument -n: invalid value (a positive integer is required): {0}")]
    NegativeProxyCount(i64),

    #[error("argument -p: invalid value (maximum 20 ports): {0} ports given")]
    TooManyPorts(usize),

    #[error("argument -p: invalid value (port must be between 1 and 65535): {0}")]
    PortOutOfRange(PortArgument),

    #[error("argument -ct: can't open '{}': {}", .path.display(), .source)]
    CountriesUnavailable { path: PathBuf, source: io::Error },

    #[error("argument -ct: can't read countries: {0}")]
    CountriesUnreadable(#[source] io::Error),
}
