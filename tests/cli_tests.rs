use cidr_sweep::cli::Cli;
use cidr_sweep::config::ConfigError;
use cidr_sweep::mode::ProbeMode;
use clap::Parser;
use std::time::Duration;

fn config(args: &[&str]) -> Result<cidr_sweep::config::ScanConfig, ConfigError> {
    let mut argv = vec!["cidr-sweep"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("clap accepts args").into_config()
}

#[test]
fn defaults() {
    let cfg = config(&["-n", "corp.example", "10.0.0.0/24"]).unwrap();
    assert_eq!(cfg.mode, ProbeMode::FullDnsThenPing);
    assert_eq!(cfg.domain, "corp.example");
    assert_eq!(cfg.wait, Duration::from_millis(125));
    assert_eq!(cfg.probe_timeout, Duration::from_millis(1000));
    assert!(!cfg.quiet && !cfg.verbose && !cfg.assume_yes);
}

#[test]
fn flags_fill_config() {
    let cfg = config(&["-o", "-q", "-v", "-y", "-n", "lab.example", "-w", "0.5", "-t", "250", "10.1.0.0/16"]).unwrap();
    assert_eq!(cfg.mode, ProbeMode::DnsOnly);
    assert_eq!(cfg.wait, Duration::from_millis(500));
    assert_eq!(cfg.probe_timeout, Duration::from_millis(250));
    assert!(cfg.quiet && cfg.verbose && cfg.assume_yes);
    assert_eq!(cfg.cidr.prefix_len(), 16);
}

#[test]
fn conflicting_modes_rejected() {
    for args in [["-d", "-p"], ["-o", "-p"], ["-d", "-o"]] {
        let mut argv = args.to_vec();
        argv.push("10.0.0.0/24");
        assert!(matches!(config(&argv), Err(ConfigError::ConflictingModes(_))));
    }
}

#[test]
fn invalid_cidrs_rejected() {
    for bad in ["10.0.0/24", "10.0.0.0/33", "abc/24"] {
        assert!(
            matches!(config(&["-n", "x", bad]), Err(ConfigError::InvalidCidr { .. })),
            "{bad}"
        );
    }
}

#[test]
fn missing_cidr_rejected() {
    assert!(matches!(config(&["-p"]), Err(ConfigError::MissingCidr)));
}

#[test]
fn negative_wait_rejected() {
    assert!(matches!(config(&["-w", "-1", "-n", "x", "10.0.0.0/24"]), Err(ConfigError::InvalidWait(_))));
}

#[test]
fn parse_errors_map_to_exit_codes() {
    use cidr_sweep::cli::parse_error_exit_code;

    let help = Cli::try_parse_from(["cidr-sweep", "-h"]).unwrap_err();
    assert_eq!(parse_error_exit_code(help.kind()), 0);
    let version = Cli::try_parse_from(["cidr-sweep", "-V"]).unwrap_err();
    assert_eq!(parse_error_exit_code(version.kind()), 0);
    let unknown = Cli::try_parse_from(["cidr-sweep", "--bogus"]).unwrap_err();
    assert_eq!(parse_error_exit_code(unknown.kind()), 1);
}
