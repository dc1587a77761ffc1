use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::random;
use surge_ping::{Client, Config, PingIdentifier, PingSequence, SurgeError};

const PAYLOAD: [u8; 56] = [0; 56];

/// Reachability collaborator.
#[async_trait]
pub trait Prober: Send + Sync {
    /// One attempt, bounded by `timeout`. `Ok(false)` for a clean timeout;
    /// other failures come back as errors.
    async fn probe(&self, addr: Ipv4Addr, timeout: Duration) -> Result<bool>;
}

/// Single ICMP echo request per call.
pub struct IcmpProber {
    client: Client,
}

impl IcmpProber {
    /// Opens the ICMP socket; usually needs root or `CAP_NET_RAW`.
    pub fn new() -> Result<Self> {
        let client = Client::new(&Config::default())
            .context("failed to open ICMP socket (are you root or do you have CAP_NET_RAW?)")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for IcmpProber {
    async fn probe(&self, addr: Ipv4Addr, timeout: Duration) -> Result<bool> {
        let mut pinger = self
            .client
            .pinger(IpAddr::V4(addr), PingIdentifier(random()))
            .await;
        pinger.timeout(timeout);
        match pinger.ping(PingSequence(0), &PAYLOAD).await {
            Ok(_) => Ok(true),
            Err(SurgeError::Timeout { .. }) => Ok(false),
            Err(e) => Err(e).with_context(|| format!("ping {addr}")),
        }
    }
}

/// Stand-in for modes that never ping. Every call is an error.
pub struct Disabled;

#[async_trait]
impl Prober for Disabled {
    async fn probe(&self, addr: Ipv4Addr, _timeout: Duration) -> Result<bool> {
        anyhow::bail!("probing disabled, refusing to ping {addr}")
    }
}
