use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

/// Printed in the DNS column when no usable name came back.
pub const NO_ENTRY: &str = "No entry";

/// Reverse DNS collaborator.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Names registered for `addr`. An empty list means no entry.
    async fn reverse_lookup(&self, addr: Ipv4Addr) -> Result<Vec<String>>;
}

/// PTR queries against the nameservers from the system configuration.
pub struct SystemResolver {
    inner: TokioAsyncResolver,
    timeout: Duration,
}

impl SystemResolver {
    /// One attempt per query, each bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let (config, mut opts) =
            read_system_conf().context("failed to read system resolver configuration")?;
        opts.timeout = timeout;
        opts.attempts = 1;
        Ok(Self {
            inner: TokioAsyncResolver::tokio(config, opts),
            timeout,
        })
    }
}

#[async_trait]
impl Resolver for SystemResolver {
    async fn reverse_lookup(&self, addr: Ipv4Addr) -> Result<Vec<String>> {
        let answer = tokio::time::timeout(self.timeout, self.inner.reverse_lookup(IpAddr::V4(addr)))
            .await
            .map_err(|_| anyhow!("reverse lookup of {addr} timed out after {:?}", self.timeout))?;

        match answer {
            Ok(lookup) => Ok(lookup.iter().map(|ptr| ptr.to_string()).collect()),
            Err(e) if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) => Ok(Vec::new()),
            Err(e) => Err(e).with_context(|| format!("reverse lookup of {addr}")),
        }
    }
}

/// Stand-in for modes that never query DNS. Every call is an error.
pub struct Disabled;

#[async_trait]
impl Resolver for Disabled {
    async fn reverse_lookup(&self, addr: Ipv4Addr) -> Result<Vec<String>> {
        anyhow::bail!("DNS disabled, refusing to look up {addr}")
    }
}

/// Build the DNS column from resolver output.
///
/// Names outside `domain` are dropped; the rest lose the trailing root dot and
/// the `.domain` suffix, then get joined with `/`. `None` if nothing is left.
/// An empty `domain` keeps every name.
pub fn format_names(names: &[String], domain: &str) -> Option<String> {
    let kept: Vec<&str> = names
        .iter()
        .filter_map(|name| short_name(name, domain))
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join("/"))
    }
}

fn short_name<'a>(name: &'a str, domain: &str) -> Option<&'a str> {
    let name = name.trim().trim_end_matches('.');
    if name.is_empty() {
        return None;
    }
    if domain.is_empty() {
        return Some(name);
    }
    if name.eq_ignore_ascii_case(domain) {
        return Some(name);
    }
    let cut = name.len().checked_sub(domain.len() + 1)?;
    if !name.is_char_boundary(cut) {
        return None;
    }
    let (host, suffix) = name.split_at(cut);
    if suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(domain) && !host.is_empty() {
        Some(host)
    } else {
        None
    }
}
