use std::sync::Arc;

use anyhow::Context;
use colored::*;
use tracing::{Instrument, info, warn};

use crate::terminal::{colors, format, input::InputHandle, print, progress};
use harbor_common::{
    config::Config,
    network::{range::PortRange, target::ScanTarget},
    success,
};
use harbor_core::scanner::{self, RangeScanner, ScanReport};
use harbor_core::session::{CancelToken, ScanSession};

pub async fn scan(target: &str, range: PortRange, cfg: &Config) -> anyhow::Result<()> {
    let target: ScanTarget = ScanTarget::parse(target, cfg.allow_hostnames)?;
    let session: ScanSession = ScanSession::new(target.clone(), range, cfg.timeout)?;

    if !target.is_loopback() {
        warn!("Only scan networks you own or have permission to test.");
    }
    info!("Starting scan of {target} ports {range}");

    let span = progress::scan_span(!cfg.disable_input);
    let progress_span = span.clone();

    let handle = scanner::spawn(
        Arc::new(RangeScanner::new()),
        session,
        move |percent| progress::report_progress(&progress_span, percent),
        |port, service| success!("Open port found: {port} ({service})"),
    );

    let cancel: CancelToken = handle.cancel_token();
    let input: Option<InputHandle> = (!cfg.disable_input).then(|| InputHandle::start(cancel.clone()));
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Stopping scan...");
            cancel.cancel();
        }
    });

    let report = handle.join().instrument(span).await;
    ctrl_c.abort();
    drop(input);

    let report: ScanReport = report.context("Scan failed")?;
    scan_ends(&report, cfg);
    Ok(())
}

fn scan_ends(report: &ScanReport, cfg: &Config) {
    if report.cancelled {
        warn!("Scan stopped by user.");
    } else {
        success!(
            "Scan completed - {} found",
            format::count(report.open_ports.len(), "open port", "open ports")
        );
    }

    if report.open_ports.is_empty() {
        print::section("zero open ports", cfg.quiet);
        if cfg.quiet == 0 {
            print::no_results(&report.range);
        }
    } else {
        print::section("scan results", cfg.quiet);
        print_results(report, cfg);
    }

    print_summary(report, cfg);
}

fn print_results(report: &ScanReport, cfg: &Config) {
    if cfg.quiet < 2 {
        print::print(&format::table_header());
    }
    for result in &report.open_ports {
        print::print(&format::port_row(result));
    }
}

fn print_summary(report: &ScanReport, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::section("summary", cfg.quiet);

    let open: ColoredString = report.open_ports.len().to_string().color(colors::PORT_OPEN).bold();
    let examined: String = format!("{}/{}", report.examined, report.range.len());
    let status: ColoredString = if report.cancelled {
        "stopped".yellow()
    } else {
        "completed".green()
    };

    let fields = print::Fields::new(["Target", "Ports", "Examined", "Open", "Elapsed", "Status"]);
    fields.line("Target", report.target.to_string().color(colors::TEXT_DEFAULT));
    fields.line("Ports", report.range.to_string().color(colors::TEXT_DEFAULT));
    fields.line("Examined", examined.color(colors::TEXT_DEFAULT));
    fields.line("Open", open);
    fields.line("Elapsed", format::elapsed(report.elapsed).color(colors::TEXT_DEFAULT));
    fields.line("Status", status);
    print::rule();
}
