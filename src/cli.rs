use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;

use crate::cidr::parse_cidr;
use crate::config::{self, ConfigError, ScanConfig};
use crate::mode::ProbeMode;

pub const USAGE: &str = "usage: cidr-sweep [-d | -o | -p] [-n domain] [-w seconds] [-q] [-v] [-y] <cidr>";

/// Process exit code for a failed `Cli::try_parse`: help and version requests
/// succeed, every usage error is 1.
pub fn parse_error_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// cidr-sweep — reverse DNS and ping every usable host in an IPv4 CIDR block, as CSV.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cidr-sweep",
    version,
    about = "Reverse DNS and ping every usable host in an IPv4 CIDR block, printing CSV rows.",
    long_about = None
)]
pub struct Cli {
    /// Block to sweep, e.g. 192.168.1.0/24. A host address inside the block is accepted.
    pub cidr: Option<String>,

    /// Ping only hosts that have a DNS entry.
    #[arg(short = 'd')]
    pub ping_if_in_dns: bool,

    /// DNS lookup only, no ping.
    #[arg(short = 'o')]
    pub dns_only: bool,

    /// Ping only, skip DNS.
    #[arg(short = 'p')]
    pub ping_only: bool,

    /// DNS domain stripped from names (default: resolver search domain).
    #[arg(short = 'n', value_name = "domain")]
    pub domain: Option<String>,

    /// Seconds to wait before each host.
    #[arg(short = 'w', value_name = "seconds", default_value_t = 0.125, allow_negative_numbers = true)]
    pub wait: f64,

    /// Ping timeout in milliseconds.
    #[arg(short = 't', long = "timeout-ms", default_value_t = 1000)]
    pub timeout_ms: u64,

    /// Reverse lookup timeout in milliseconds.
    #[arg(long = "dns-timeout-ms", default_value_t = 2000)]
    pub dns_timeout_ms: u64,

    /// Only print column headings and data.
    #[arg(short = 'q')]
    pub quiet: bool,

    /// Print the resolved configuration first.
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Do not ask before sweeping 512 or more addresses.
    #[arg(short = 'y')]
    pub yes: bool,
}

impl Cli {
    /// Validate and freeze the options.
    pub fn into_config(self) -> Result<ScanConfig, ConfigError> {
        let mode = ProbeMode::from_flags(self.ping_if_in_dns, self.dns_only, self.ping_only)?;
        let input = self.cidr.ok_or(ConfigError::MissingCidr)?;
        let cidr = parse_cidr(&input).map_err(|source| ConfigError::InvalidCidr { input, source })?;
        let wait = config::wait_from_secs(self.wait)?;
        let domain = self.domain.unwrap_or_else(config::default_domain);

        let mut cfg = ScanConfig::new(cidr, mode, domain);
        cfg.wait = wait;
        cfg.probe_timeout = Duration::from_millis(self.timeout_ms);
        cfg.dns_timeout = Duration::from_millis(self.dns_timeout_ms);
        cfg.quiet = self.quiet;
        cfg.verbose = self.verbose;
        cfg.assume_yes = self.yes;
        Ok(cfg)
    }
}
