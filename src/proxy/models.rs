use std::fmt::Display;

use serde::Serialize;

/// Minimum anonymity level a proxy must reach, as ranked by the proxy list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AnonymityLevel {
    /// No minimum; transparent proxies are accepted.
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    /// No IP address or headers are leaked.
    Elite = 4,
}

impl AnonymityLevel {
    /// Derives the level from the number of times the anonymity flag was given,
    /// clamping at `Elite`.
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => Self::None,
            1 => Self::Low,
            2 => Self::Medium,
            3 => Self::High,
            _ => Self::Elite,
        }
    }

    /// Numeric level in `0..=4`.
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl Display for AnonymityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Elite => write!(f, "Elite"),
        }
    }
}

/// Coarse responsiveness tier used for both speed and connection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Tier {
    Slow = 1,
    Medium = 2,
    Fast = 3,
}

impl Tier {
    /// Every tier starts at `Slow`; each occurrence of the flag raises it by one,
    /// clamping at `Fast`.
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => Self::Slow,
            1 => Self::Medium,
            _ => Self::Fast,
        }
    }

    /// Numeric level in `1..=3`.
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slow => write!(f, "Slow"),
            Self::Medium => write!(f, "Medium"),
            Self::Fast => write!(f, "Fast"),
        }
    }
}

/// Represents the protocols a proxy can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
    /// SOCKS4 and SOCKS5.
    Socks,
}

impl Protocol {
    /// Every protocol, in the order the proxy list presents them.
    pub const ALL: [Protocol; 3] = [Protocol::Http, Protocol::Https, Protocol::Socks];
}

impl Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http => write!(f, "http"),
            Self::Https => write!(f, "https"),
            Self::Socks => write!(f, "socks"),
        }
    }
}

/// Ports the proxies may listen on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ports {
    /// No port filtering.
    Any,
    /// Distinct ports, in the order they were first given.
    Only(Vec<u16>),
}

impl Ports {
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn as_slice(&self) -> &[u16] {
        match self {
            Self::Any => &[],
            Self::Only(ports) => ports,
        }
    }
}

/// Renders the comma-separated list the proxy list search form takes, e.g.
/// `80, 443`. `Any` renders as an empty string.
impl Display for Ports {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.as_slice()
                .iter()
                .map(|port| port.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
