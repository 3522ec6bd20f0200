use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use crate::validator::ArgumentError;

/// Every country the proxy list knows about, one per line.
pub const BUNDLED_COUNTRIES: &str = include_str!("../countries_all");

/// Where the list of allowed countries comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountriesSource {
    /// The list shipped with the binary.
    #[default]
    Bundled,
    /// A user supplied text file, one country per line.
    File(PathBuf),
}

impl CountriesSource {
    /// Opens the source for reading.
    ///
    /// # Returns
    ///
    /// A buffered reader over the list, or a usage error naming the path when
    /// the file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>, ArgumentError> {
        match self {
            Self::Bundled => Ok(Box::new(BUNDLED_COUNTRIES.as_bytes())),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| ArgumentError::CountriesUnavailable {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Reads one country per line, in order, consuming the reader.
///
/// Only the line terminator is removed. Blank lines are kept as empty entries.
pub fn load_countries<R: BufRead>(reader: R) -> Result<Vec<String>, ArgumentError> {
    let mut countries = Vec::new();
    for line in reader.lines() {
        let country = line.map_err(ArgumentError::CountriesUnreadable)?;
        if country.is_empty() {
            #[cfg(feature = "log")]
            log::warn!("countries line {} is blank", countries.len() + 1);
        }
        countries.push(country);
    }
    Ok(countries)
}
