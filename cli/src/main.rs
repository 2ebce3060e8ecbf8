mod commands;
mod terminal;

use std::time::Duration;

use anyhow::{Context, bail};
use commands::{CommandLine, Commands, scan, services};
use harbor_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let mut cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        ..Config::default()
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Services => {
            print::section("service catalog", cfg.quiet);
            services::services(&cfg);
            Ok(())
        }
        Commands::Scan {
            target,
            ports,
            timeout,
            allow_hostnames,
            disable_input,
        } => {
            cfg.timeout = parse_timeout(timeout)?;
            cfg.allow_hostnames = allow_hostnames;
            cfg.disable_input = disable_input;

            print::section("starting scanner", cfg.quiet);
            scan::scan(&target, ports, &cfg).await
        }
    }
}

fn parse_timeout(seconds: f64) -> anyhow::Result<Duration> {
    if seconds.is_nan() || seconds <= 0.0 {
        bail!("Timeout must be positive");
    }
    Duration::try_from_secs_f64(seconds).context("Timeout is out of range")
}
