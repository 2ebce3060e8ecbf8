use crate::terminal::colors;
use colored::*;
use harbor_common::services::UNKNOWN_SERVICE;
use harbor_core::session::ProbeResult;
use std::time::Duration;

const PORT_COLUMN: usize = 10;
const SERVICE_COLUMN: usize = 16;

pub fn table_header() -> String {
    format!(
        "{:<PORT_COLUMN$}{:<SERVICE_COLUMN$}{}",
        "PORT", "SERVICE", "STATUS"
    )
    .bright_black()
    .to_string()
}

/// One result line, e.g. `8080/tcp  HTTP-Alt        open`. Only open ports
/// are ever reported.
pub fn port_row(result: &ProbeResult) -> String {
    let port: String = format!("{:<PORT_COLUMN$}", format!("{}/tcp", result.port));
    let service: String = format!("{:<SERVICE_COLUMN$}", result.service);
    let service: ColoredString = if result.service == UNKNOWN_SERVICE {
        service.color(colors::SERVICE_UNKNOWN)
    } else {
        service.color(colors::ACCENT)
    };
    let status: ColoredString = "open".color(colors::PORT_OPEN).bold();

    format!("{}{}{}", port.color(colors::TEXT_DEFAULT), service, status)
}

pub fn progress_message(percent: f64) -> String {
    format!("Scanning... {percent:.1}%")
}

pub fn elapsed(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f64())
}

pub fn count(n: usize, singular: &str, plural: &str) -> String {
    let unit: &str = if n == 1 { singular } else { plural };
    format!("{n} {unit}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
