use std::fmt;

use crate::config::ConfigError;

/// Which collaborators run for each host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeMode {
    /// Reverse lookup, then ping every host.
    #[default]
    FullDnsThenPing,
    /// Reverse lookup; ping and report only hosts that have a name.
    PingIfInDns,
    DnsOnly,
    PingOnly,
}

/// What to do with a host once its DNS outcome (if any) is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStep {
    Probe,
    /// Emit the row without a status column.
    Report,
    /// No row at all.
    Skip,
}

impl ProbeMode {
    /// Resolve the mutually exclusive `-d`, `-o`, `-p` flags.
    pub fn from_flags(ping_if_in_dns: bool, dns_only: bool, ping_only: bool) -> Result<Self, ConfigError> {
        let mut chosen = Vec::new();
        if ping_if_in_dns {
            chosen.push("-d");
        }
        if dns_only {
            chosen.push("-o");
        }
        if ping_only {
            chosen.push("-p");
        }
        if chosen.len() > 1 {
            return Err(ConfigError::ConflictingModes(chosen.join(", ")));
        }

        Ok(if ping_if_in_dns {
            Self::PingIfInDns
        } else if dns_only {
            Self::DnsOnly
        } else if ping_only {
            Self::PingOnly
        } else {
            Self::FullDnsThenPing
        })
    }

    pub fn queries_dns(self) -> bool {
        !matches!(self, Self::PingOnly)
    }

    pub fn probes(self) -> bool {
        !matches!(self, Self::DnsOnly)
    }

    /// Decide the rest of a host's processing. `dns_found` is `None` when no
    /// lookup ran.
    pub fn next_step(self, dns_found: Option<bool>) -> ProbeStep {
        match self {
            Self::FullDnsThenPing | Self::PingOnly => ProbeStep::Probe,
            Self::DnsOnly => ProbeStep::Report,
            Self::PingIfInDns => {
                if dns_found.unwrap_or(false) {
                    ProbeStep::Probe
                } else {
                    ProbeStep::Skip
                }
            }
        }
    }

    pub fn header(self) -> &'static str {
        match (self.queries_dns(), self.probes()) {
            (true, true) => "IP address, DNS Name, Status",
            (true, false) => "IP address, DNS Name",
            (false, true) => "IP address, Status",
            (false, false) => "IP address",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::FullDnsThenPing => "reverse DNS lookup and ping for every host",
            Self::PingIfInDns => "ping only hosts found in DNS",
            Self::DnsOnly => "reverse DNS lookup only, no ping",
            Self::PingOnly => "ping only, no DNS lookup",
        }
    }
}

impl fmt::Display for ProbeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
