//! Text around the data rows: preamble, headings, verbose dump, and the
//! large-scan prompt.
use std::io::{self, BufRead, Write};

use crate::config::ScanConfig;
use crate::netcalc::{to_dotted, NetworkRange};

/// `#` lines describing the block and mode. Skipped entirely under `-q`.
pub fn write_preamble(out: &mut impl Write, config: &ScanConfig, range: &NetworkRange) -> io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(out, "# Network: {}/{}", to_dotted(range.network), range.prefix_len)?;
    writeln!(out, "# Netmask: {}", to_dotted(range.netmask))?;
    writeln!(out, "# Broadcast: {}", to_dotted(range.broadcast))?;
    writeln!(
        out,
        "# Hosts: {} - {} ({} hosts)",
        to_dotted(range.first_host),
        to_dotted(range.last_host),
        range.host_count()
    )?;
    writeln!(out, "# Mode: {}", config.mode)
}

pub fn write_header(out: &mut impl Write, config: &ScanConfig) -> io::Result<()> {
    writeln!(out, "{}", config.mode.header())
}

/// Resolved settings, printed for `-v`.
pub fn write_config(out: &mut impl Write, config: &ScanConfig) -> io::Result<()> {
    writeln!(out, "# Configuration:")?;
    writeln!(out, "#   cidr          : {}", config.cidr)?;
    writeln!(out, "#   mode          : {}", config.mode)?;
    writeln!(
        out,
        "#   domain        : {}",
        if config.domain.is_empty() { "<none>" } else { config.domain.as_str() }
    )?;
    writeln!(out, "#   wait          : {:.3}s", config.wait.as_secs_f64())?;
    writeln!(out, "#   probe timeout : {}ms", config.probe_timeout.as_millis())?;
    writeln!(out, "#   dns timeout   : {}ms", config.dns_timeout.as_millis())?;
    writeln!(out, "#   quiet         : {}", config.quiet)?;
    writeln!(out, "#   assume yes    : {}", config.assume_yes)
}

/// Whether the sweep may start: small blocks and `-y` go ahead without asking,
/// large blocks need a yes from [`confirm_large_scan`].
pub fn should_proceed(
    config: &ScanConfig,
    range: &NetworkRange,
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> io::Result<bool> {
    if config.assume_yes || !range.needs_confirmation() {
        return Ok(true);
    }
    confirm_large_scan(range, input, prompt)
}

/// Ask before sweeping a large block. Only `y`/`yes` proceed; EOF declines.
pub fn confirm_large_scan(
    range: &NetworkRange,
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> io::Result<bool> {
    write!(
        prompt,
        "{}/{} contains {} hosts and may take a long time. Continue? [y/N] ",
        to_dotted(range.network),
        range.prefix_len,
        range.host_count()
    )?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
