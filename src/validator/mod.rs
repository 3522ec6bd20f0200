mod config;
mod error;

use std::io::BufRead;

pub use config::{Configuration, PortArgument, RawArguments};
pub use error::ArgumentError;
use hashbrown::HashSet;

use crate::{
    countries::load_countries,
    proxy::models::{AnonymityLevel, Ports, Protocol, Tier},
};

/// The proxy list search form accepts at most this many ports.
pub const MAX_PORTS: usize = 20;

impl RawArguments {
    /// Opens the countries source and validates the arguments against it.
    ///
    /// The countries source is opened first, so an unreadable file is reported
    /// before any other problem with the arguments.
    ///
    /// # Returns
    ///
    /// The normalized `Configuration`, or the first usage error found.
    pub fn process(self) -> Result<Configuration, ArgumentError> {
        let countries = self.countries.open()?;
        self.process_with(countries)
    }

    /// Validates the arguments, reading the countries from `countries` instead
    /// of the configured source.
    ///
    /// Checks run in a fixed order: proxy count, countries, ports, protocols,
    /// then the level caps. The reader is consumed and dropped before returning.
    pub fn process_with<R: BufRead>(self, countries: R) -> Result<Configuration, ArgumentError> {
        if self.max_proxies < 0 {
            return Err(ArgumentError::NegativeProxyCount(self.max_proxies));
        }
        let max_proxies = self.max_proxies as u64;

        let countries = load_countries(countries)?;
        #[cfg(feature = "log")]
        log::debug!("Loaded {} countries", countries.len());

        let ports = normalize_ports(&self.ports)?;
        #[cfg(feature = "log")]
        log::debug!("Ports: {:?}", ports);

        let protocols = normalize_protocols(&self.protocols);
        #[cfg(feature = "log")]
        log::debug!("Protocols: {:?}", protocols);

        let anonymity_level = AnonymityLevel::from_occurrences(self.anonymity);
        let speed_level = Tier::from_occurrences(self.speed);
        let connection_time_level = Tier::from_occurrences(self.connection_time);
        #[cfg(feature = "log")]
        log::debug!(
            "Minimum levels: anonymity {}, speed {}, connection time {}",
            anonymity_level,
            speed_level,
            connection_time_level
        );

        Ok(Configuration {
            database_file: self.database_file,
            max_proxies,
            countries,
            ports,
            protocols,
            anonymity_level,
            keep_alive_allowed: self.keep_alive,
            speed_level,
            connection_time_level,
        })
    }
}

/// Deduplicates the given ports and checks their count and range.
///
/// An empty list means every port. Duplicates are dropped before the count is
/// checked, and the first out-of-range value (in the order given) is reported.
pub fn normalize_ports(ports: &[PortArgument]) -> Result<Ports, ArgumentError> {
    if ports.is_empty() {
        return Ok(Ports::Any);
    }

    let mut seen = HashSet::new();
    let distinct: Vec<&PortArgument> = ports.iter().filter(|port| seen.insert(*port)).collect();
    if distinct.len() > MAX_PORTS {
        return Err(ArgumentError::TooManyPorts(distinct.len()));
    }

    distinct
        .into_iter()
        .map(|port| match port {
            PortArgument::Number(value) => u16::try_from(*value)
                .ok()
                .filter(|port| *port >= 1)
                .ok_or_else(|| ArgumentError::PortOutOfRange(port.clone())),
            PortArgument::Oversized(_) => Err(ArgumentError::PortOutOfRange(port.clone())),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Ports::Only)
}

/// Deduplicates the given protocols, defaulting to every protocol when none
/// were given.
pub fn normalize_protocols(protocols: &[Protocol]) -> Vec<Protocol> {
    if protocols.is_empty() {
        return Protocol::ALL.to_vec();
    }
    let mut seen = HashSet::new();
    protocols
        .iter()
        .copied()
        .filter(|protocol| seen.insert(*protocol))
        .collect()
}
