use std::io::Write;
use std::net::Ipv4Addr;

use anyhow::{Context, Result};
use tokio::time;
use tracing::debug;

use crate::config::ScanConfig;
use crate::mode::ProbeStep;
use crate::netcalc::{to_dotted, NetworkRange};
use crate::prober::Prober;
use crate::resolver::{format_names, Resolver};
use crate::types::{DnsName, HostResult, SweepSummary};

/// Walk every usable host of `range` in ascending order and stream one row per host to `out`.
///
/// - One host at a time; the lookup and probe for a host finish before the next host starts.
/// - Sleeps `config.wait` before each host, whatever the mode.
/// - Resolver errors read as "no entry" and probe errors as offline; neither stops the sweep.
/// - Only write errors on `out` abort.
pub async fn sweep<R, P, W>(
    config: &ScanConfig,
    range: &NetworkRange,
    resolver: &R,
    prober: &P,
    out: &mut W,
) -> Result<SweepSummary>
where
    R: Resolver + ?Sized,
    P: Prober + ?Sized,
    W: Write + ?Sized,
{
    let mut summary = SweepSummary::default();

    for addr in range.hosts().addrs() {
        if !config.wait.is_zero() {
            time::sleep(config.wait).await;
        }
        summary.hosts_visited += 1;

        let Some(row) = process_host(config, addr, resolver, prober).await else {
            continue;
        };

        if row.is_named() {
            summary.dns_named += 1;
        }
        if row.reachable == Some(true) {
            summary.active += 1;
        }
        writeln!(out, "{row}").with_context(|| format!("failed to write row for {addr}"))?;
        out.flush().context("failed to flush output")?;
        summary.rows_emitted += 1;
    }

    Ok(summary)
}

async fn process_host<R, P>(config: &ScanConfig, addr: Ipv4Addr, resolver: &R, prober: &P) -> Option<HostResult>
where
    R: Resolver + ?Sized,
    P: Prober + ?Sized,
{
    let mode = config.mode;

    let dns_name = if mode.queries_dns() {
        let names = match resolver.reverse_lookup(addr).await {
            Ok(names) => names,
            Err(e) => {
                debug!(%addr, error = %e, "reverse lookup failed");
                Vec::new()
            }
        };
        let formatted = format_names(&names, &config.domain);
        debug!(%addr, ?names, ?formatted, "reverse lookup");
        Some(formatted)
    } else {
        None
    };

    let reachable = match mode.next_step(dns_name.as_ref().map(Option::is_some)) {
        ProbeStep::Skip => {
            debug!(%addr, "not in DNS, skipped");
            return None;
        }
        ProbeStep::Report => None,
        ProbeStep::Probe => {
            let up = match prober.probe(addr, config.probe_timeout).await {
                Ok(up) => up,
                Err(e) => {
                    debug!(%addr, error = ?e, "probe failed");
                    false
                }
            };
            debug!(%addr, up, "probe");
            Some(up)
        }
    };

    Some(HostResult {
        address: to_dotted(u32::from(addr)),
        dns_name: dns_name.map(DnsName::from),
        reachable,
    })
}
