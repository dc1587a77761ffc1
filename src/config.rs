use std::fs;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::cidr::{CidrError, CidrSpec};
use crate::mode::ProbeMode;

/// Used when neither the command line nor the environment names a domain.
pub const FALLBACK_DOMAIN: &str = "localdomain";
pub const RESOLV_CONF: &str = "/etc/resolv.conf";

pub const DEFAULT_WAIT: Duration = Duration::from_millis(125);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1000);
pub const DEFAULT_DNS_TIMEOUT: Duration = Duration::from_millis(2000);

/// Startup problems. All of them are fatal before any host is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing CIDR address argument")]
    MissingCidr,
    #[error("invalid CIDR address {input:?}: {source}")]
    InvalidCidr {
        input: String,
        #[source]
        source: CidrError,
    },
    #[error("conflicting mode flags: {0} (choose at most one of -d, -o, -p)")]
    ConflictingModes(String),
    #[error("invalid wait time {0:?}: must be a non-negative number of seconds")]
    InvalidWait(f64),
}

/// Everything a sweep needs, fixed before the first host is processed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub cidr: CidrSpec,
    pub mode: ProbeMode,
    /// Suffix stripped from reverse-DNS names; empty keeps names whole.
    pub domain: String,
    /// Pause before each host.
    pub wait: Duration,
    pub probe_timeout: Duration,
    pub dns_timeout: Duration,
    pub quiet: bool,
    pub verbose: bool,
    pub assume_yes: bool,
}

impl ScanConfig {
    pub fn new(cidr: CidrSpec, mode: ProbeMode, domain: impl Into<String>) -> Self {
        Self {
            cidr,
            mode,
            domain: normalize_domain(&domain.into()),
            wait: DEFAULT_WAIT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            dns_timeout: DEFAULT_DNS_TIMEOUT,
            quiet: false,
            verbose: false,
            assume_yes: false,
        }
    }
}

/// Seconds from the command line into a `Duration`.
pub fn wait_from_secs(secs: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidWait(secs))
}

/// Domain lookup order: `LOCALDOMAIN`, then resolv.conf, then [`FALLBACK_DOMAIN`].
pub fn default_domain() -> String {
    if let Some(d) = std::env::var("LOCALDOMAIN")
        .ok()
        .and_then(|v| first_token(&v).map(normalize_domain))
        .filter(|d| !d.is_empty())
    {
        return d;
    }
    match fs::read_to_string(Path::new(RESOLV_CONF)) {
        Ok(content) => {
            if let Some(d) = search_domain(&content) {
                return d;
            }
        }
        Err(e) => warn!("cannot read {RESOLV_CONF}: {e}; using {FALLBACK_DOMAIN}"),
    }
    FALLBACK_DOMAIN.to_string()
}

/// First entry of the first `search` or `domain` line.
pub fn search_domain(resolv_conf: &str) -> Option<String> {
    resolv_conf
        .lines()
        .map(|line| line.split(['#', ';']).next().unwrap_or("").trim())
        .find_map(|line| {
            let mut words = line.split_whitespace();
            match words.next() {
                Some("search") | Some("domain") => words.next().map(normalize_domain),
                _ => None,
            }
        })
        .filter(|d| !d.is_empty())
}

fn first_token(s: &str) -> Option<&str> {
    s.split_whitespace().next()
}

fn normalize_domain(d: &str) -> String {
    d.trim().trim_matches('.').to_string()
}
