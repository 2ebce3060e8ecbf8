pub mod scan;
pub mod services;

use clap::{ArgAction, Parser, Subcommand};
use harbor_common::network::range::PortRange;

#[derive(Parser)]
#[command(name = "harbor")]
#[command(about = "A TCP port range scanner.", version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Skip the banner line
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print less; repeat to print results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Log every probe outcome
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe a range of TCP ports on one host
    #[command(alias = "s")]
    Scan {
        /// IPv4 or IPv6 address of the host
        target: String,

        /// Ports to probe, as START-END or a single port
        #[arg(short, long, default_value_t = PortRange::default())]
        ports: PortRange,

        /// Seconds to wait for each connection
        #[arg(short, long, default_value_t = 1.0)]
        timeout: f64,

        /// Also accept hostnames as the target
        #[arg(long)]
        allow_hostnames: bool,

        /// Do not listen for 'q' to stop the scan early
        #[arg(long)]
        disable_input: bool,
    },
    /// List the port to service name table
    #[command(alias = "l")]
    Services,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
