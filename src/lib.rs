//! Library crate for cidr-sweep exposing reusable modules.
pub mod cidr;
pub mod cli;
pub mod config;
pub mod mode;
pub mod netcalc;
pub mod prober;
pub mod report;
pub mod resolver;
pub mod scanner;
pub mod types;
