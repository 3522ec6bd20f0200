use std::ffi::OsString;

use clap::builder::styling::AnsiColor;
use clap::builder::{PossibleValue, Styles};
use clap::{ArgAction, Parser};
use hide_my_proxy::{CountriesSource, PortArgument, Protocol, RawArguments};

/// Single-dash spellings accepted by earlier releases, with the long
/// flag each one stands for.
const LEGACY_FLAGS: [(&str, &str); 3] = [
    ("-ct", "--countries"),
    ("-pr", "--protocols"),
    ("-ka", "--keep-alive"),
];

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::BrightGreen.on_default())
        .placeholder(AnsiColor::Cyan.on_default())
}

/// Rewrites `-ct`, `-pr` and `-ka` (alone or as `-ct=FILE`) into their long
/// forms so clap does not read them as clusters of short flags. Nothing after
/// `--` is touched.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            let arg = arg.into();
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            for (legacy, long) in LEGACY_FLAGS {
                if text == legacy {
                    return OsString::from(long);
                }
                if let Some(value) = text.strip_prefix(legacy).and_then(|rest| rest.strip_prefix('=')) {
                    return OsString::from(format!("{}={}", long, value));
                }
            }
            arg
        })
        .collect()
}

/// A parser to retrieve proxies from HideMyAss!
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hide_my_proxy",
    version,
    after_help = "Go to https://hidemyass.com/proxy-list/ to see the different available options.",
    styles=get_styles()
)]
pub struct Cli {
    /// Database file where the proxies will be saved.
    #[arg(short = 'o', long = "output", value_name = "DATABASE_FILE")]
    pub database_file: std::path::PathBuf,

    /// Maximum number of proxies to retrieve (default: all).
    #[arg(
        short = 'n',
        long = "number",
        default_value = "0",
        allow_negative_numbers = true
    )]
    pub number_of_proxies: i64,

    /// File containing the countries where the proxies can be based, one per
    /// line (default: every country). Also accepted as -ct.
    #[arg(long = "countries", value_name = "FILE")]
    pub countries_file: Option<std::path::PathBuf>,

    /// List of ports (max: 20 ports) the proxies listen on (default: every port).
    #[arg(short = 'p', long, num_args(1..), allow_negative_numbers = true)]
    pub ports: Vec<PortArgument>,

    /// Protocols used by the proxies (default: HTTP, HTTPS and SOCKS4/5). Also
    /// accepted as -pr.
    #[arg(long, value_enum, num_args(1..))]
    pub protocols: Vec<Protocol>,

    /// Raises the proxies minimum anonymity level, e.g. -a sets it to Low, -aa to
    /// Medium, -aaa to High, etc. (default minimum level: None).
    #[arg(short = 'a', long, action = ArgAction::Count)]
    pub anonymity: u8,

    /// Return proxies with the Keep Alive option, which are likely honey pots
    /// (default: no). Also accepted as -ka.
    #[arg(long = "keep-alive")]
    pub keep_alive: bool,

    /// Raises the proxies minimum speed level, e.g. -s sets it to Medium, -ss to
    /// Fast (default minimum level: Slow).
    #[arg(short = 's', long, action = ArgAction::Count)]
    pub speed: u8,

    /// Raises the proxies minimum connection time level, e.g. -c sets it to
    /// Medium, -cc to Fast (default minimum level: Slow).
    #[arg(short = 'c', long = "connection-time", action = ArgAction::Count)]
    pub connection_time: u8,

    /// Log level for application output.
    #[arg(
        long = "log",
        default_value = "off",
        value_parser([
            PossibleValue::new("debug"),
            PossibleValue::new("info"),
            PossibleValue::new("warn"),
            PossibleValue::new("error"),
            PossibleValue::new("trace"),
            PossibleValue::new("off"),
        ])
    )]
    pub log_level: String,

    /// Output format for the validated options.
    #[arg(
        short,
        long,
        default_value = "default",
        value_parser([
            PossibleValue::new("default"),
            PossibleValue::new("json"),
        ])
    )]
    pub format: String,
}

impl Cli {
    /// Hands the parsed values over to the validator untouched.
    pub fn to_raw_arguments(&self) -> RawArguments {
        RawArguments {
            database_file: self.database_file.clone(),
            max_proxies: self.number_of_proxies,
            countries: self
                .countries_file
                .clone()
                .map(CountriesSource::File)
                .unwrap_or_default(),
            ports: self.ports.clone(),
            protocols: self.protocols.clone(),
            anonymity: self.anonymity,
            keep_alive: self.keep_alive,
            speed: self.speed,
            connection_time: self.connection_time,
        }
    }
}
