//! Command line arguments

use crate::config::LogFormat;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// not_woo shop settings server
#[derive(Debug, Default, Parser)]
#[command(version, about)]
pub struct Cli {
    /// YAML config file (defaults to config/not-woo.yaml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// Database connection URL
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}
