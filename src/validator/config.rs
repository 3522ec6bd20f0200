use std::{
    fmt::Display,
    num::{IntErrorKind, ParseIntError},
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Serialize;

use crate::{
    countries::CountriesSource,
    proxy::models::{AnonymityLevel, Ports, Protocol, Tier},
};

/// A port exactly as typed on the command line.
///
/// Any integer is accepted, however large, so range checking can report the
/// value instead of failing to parse it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PortArgument {
    Number(i64),
    /// An integer too large for `i64`, in canonical form (no `+`, no leading
    /// zeros).
    Oversized(String),
}

impl From<i64> for PortArgument {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl FromStr for PortArgument {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(value) => Ok(Self::Number(value)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                let (sign, digits) = match s.strip_prefix('-') {
                    Some(digits) => ("-", digits),
                    None => ("", s.strip_prefix('+').unwrap_or(s)),
                };
                Ok(Self::Oversized(format!(
                    "{}{}",
                    sign,
                    digits.trim_start_matches('0')
                )))
            }
            Err(e) => Err(e),
        }
    }
}

impl Display for PortArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Oversized(digits) => write!(f, "{}", digits),
        }
    }
}

/// Arguments exactly as the command line supplied them, before any semantic
/// checks.
#[derive(Debug, Clone, Default)]
pub struct RawArguments {
    /// Database file the proxies will be saved to.
    pub database_file: PathBuf,
    /// Maximum number of proxies to retrieve; may be negative until validated.
    pub max_proxies: i64,
    /// Where to read the allowed countries from.
    pub countries: CountriesSource,
    /// Ports as given, possibly repeated or out of range.
    pub ports: Vec<PortArgument>,
    /// Protocols as given, possibly repeated.
    pub protocols: Vec<Protocol>,
    /// Occurrences of the anonymity flag.
    pub anonymity: u8,
    /// Whether proxies with Keep Alive may be returned.
    pub keep_alive: bool,
    /// Occurrences of the speed flag.
    pub speed: u8,
    /// Occurrences of the connection time flag.
    pub connection_time: u8,
}

/// Validated options handed to the scraping engine.
///
/// Only [`RawArguments::process`] and [`RawArguments::process_with`] build one,
/// so every instance upholds the documented ranges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    pub(super) database_file: PathBuf,
    pub(super) max_proxies: u64,
    pub(super) countries: Vec<String>,
    pub(super) ports: Ports,
    pub(super) protocols: Vec<Protocol>,
    pub(super) anonymity_level: AnonymityLevel,
    pub(super) keep_alive_allowed: bool,
    pub(super) speed_level: Tier,
    pub(super) connection_time_level: Tier,
}

impl Configuration {
    pub fn database_file(&self) -> &Path {
        &self.database_file
    }

    /// Maximum number of proxies to retrieve, `0` meaning all of them.
    pub fn max_proxies(&self) -> u64 {
        self.max_proxies
    }

    /// Same as [`Configuration::max_proxies`] with "all" spelled as `None`.
    pub fn limit(&self) -> Option<u64> {
        (self.max_proxies > 0).then_some(self.max_proxies)
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn ports(&self) -> &Ports {
        &self.ports
    }

    pub fn protocols(&self) -> &[Protocol] {
        &self.protocols
    }

    pub fn anonymity_level(&self) -> AnonymityLevel {
        self.anonymity_level
    }

    pub fn keep_alive_allowed(&self) -> bool {
        self.keep_alive_allowed
    }

    pub fn speed_level(&self) -> Tier {
        self.speed_level
    }

    pub fn connection_time_level(&self) -> Tier {
        self.connection_time_level
    }

    /// Renders the configuration as pretty-printed JSON.
    pub fn as_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "database file   : {}", self.database_file.display())?;
        match self.limit() {
            Some(limit) => writeln!(f, "max proxies     : {}", limit)?,
            None => writeln!(f, "max proxies     : all")?,
        }
        writeln!(f, "countries       : {}", self.countries.len())?;
        if self.ports.is_any() {
            writeln!(f, "ports           : all")?;
        } else {
            writeln!(f, "ports           : {}", self.ports)?;
        }
        writeln!(
            f,
            "protocols       : {}",
            self.protocols
                .iter()
                .map(|protocol| protocol.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        writeln!(f, "anonymity       : >= {}", self.anonymity_level)?;
        writeln!(
            f,
            "keep alive      : {}",
            if self.keep_alive_allowed { "yes" } else { "no" }
        )?;
        writeln!(f, "speed           : >= {}", self.speed_level)?;
        write!(f, "connection time : >= {}", self.connection_time_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_arguments_parse_any_integer() {
        assert_eq!("443".parse(), Ok(PortArgument::Number(443)));
        assert_eq!("-1".parse(), Ok(PortArgument::Number(-1)));
        assert_eq!(
            "99999999999999999999".parse(),
            Ok(PortArgument::Oversized("99999999999999999999".to_string()))
        );
        assert_eq!(
            "+00099999999999999999999".parse(),
            Ok(PortArgument::Oversized("99999999999999999999".to_string()))
        );
        assert_eq!(
            "-99999999999999999999".parse::<PortArgument>().unwrap().to_string(),
            "-99999999999999999999"
        );
    }

    #[test]
    fn port_arguments_reject_non_integers() {
        assert!("http".parse::<PortArgument>().is_err());
        assert!("80.5".parse::<PortArgument>().is_err());
        assert!("".parse::<PortArgument>().is_err());
    }
}
