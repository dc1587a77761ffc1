use std::fmt;

use crate::resolver::NO_ENTRY;

/// DNS column of a row whose host was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsName {
    Found(String),
    NoEntry,
}

impl fmt::Display for DnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(name) => f.write_str(name),
            Self::NoEntry => f.write_str(NO_ENTRY),
        }
    }
}

impl From<Option<String>> for DnsName {
    fn from(name: Option<String>) -> Self {
        name.map_or(Self::NoEntry, Self::Found)
    }
}

/// Outcome for one host, rendered as a single output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostResult {
    pub address: String,
    /// `None` when DNS was not queried.
    pub dns_name: Option<DnsName>,
    /// `None` when the probe was skipped.
    pub reachable: Option<bool>,
}

impl HostResult {
    pub fn is_named(&self) -> bool {
        matches!(self.dns_name, Some(DnsName::Found(_)))
    }

    pub fn status(&self) -> Option<&'static str> {
        self.reachable
            .map(|up| if up { "Active" } else { "Offline" })
    }
}

impl fmt::Display for HostResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)?;
        if let Some(name) = &self.dns_name {
            write!(f, ", {name}")?;
        }
        if let Some(status) = self.status() {
            write!(f, ", {status}")?;
        }
        Ok(())
    }
}

/// Counters for a finished sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub hosts_visited: u64,
    pub rows_emitted: u64,
    pub dns_named: u64,
    pub active: u64,
}
