use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cidr_sweep::cli::{parse_error_exit_code, Cli, USAGE};
use cidr_sweep::config::ScanConfig;
use cidr_sweep::netcalc::NetworkRange;
use cidr_sweep::prober::{IcmpProber, Prober};
use cidr_sweep::resolver::{Resolver, SystemResolver};
use cidr_sweep::{prober, report, resolver, scanner};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_error_exit_code(e.kind()));
        }
    };

    init_logging();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(config: &ScanConfig) -> Result<()> {
    let range = NetworkRange::from(config.cidr);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.verbose {
        report::write_config(&mut out, config)?;
        out.flush()?;
    }

    if !report::should_proceed(config, &range, &mut io::stdin().lock(), &mut io::stderr())? {
        eprintln!("Aborted.");
        return Ok(());
    }

    let resolver: Box<dyn Resolver> = if config.mode.queries_dns() {
        Box::new(SystemResolver::new(config.dns_timeout)?)
    } else {
        Box::new(resolver::Disabled)
    };
    let prober: Box<dyn Prober> = if config.mode.probes() {
        Box::new(IcmpProber::new()?)
    } else {
        Box::new(prober::Disabled)
    };

    report::write_preamble(&mut out, config, &range)?;
    report::write_header(&mut out, config)?;
    out.flush()?;

    let summary = scanner::sweep(config, &range, resolver.as_ref(), prober.as_ref(), &mut out).await?;
    info!(
        hosts = summary.hosts_visited,
        rows = summary.rows_emitted,
        named = summary.dns_named,
        active = summary.active,
        "sweep finished"
    );
    Ok(())
}
