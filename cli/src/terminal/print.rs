use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use harbor_common::network::range::PortRange;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "harbor::print";

/// Writes `msg` through the logger untouched, so it stays above progress bars.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ HARBOR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
}

/// `┌─ TITLE ───…` padded to [`TOTAL_WIDTH`].
fn section_line(title: &str) -> String {
    let title: String = format!(" {} ", title.to_uppercase());
    let used: usize = 2 + UnicodeWidthStr::width(title.as_str());
    let fill: String = "─".repeat(TOTAL_WIDTH.saturating_sub(used));

    format!(
        "{}{}{}",
        "┌─".color(colors::SEPARATOR),
        title.color(colors::PRIMARY).bold(),
        fill.color(colors::SEPARATOR)
    )
}

pub fn section(title: &str, q_level: u8) {
    if q_level == 0 {
        print(&section_line(title));
    }
}

/// Key/value lines with the keys padded to a shared column.
pub struct Fields {
    width: usize,
}

impl Fields {
    pub fn new<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let width: usize = keys.into_iter().map(UnicodeWidthStr::width).max().unwrap_or(0);
        Self { width }
    }

    fn render(&self, key: &str, value: impl Display) -> String {
        let pad: usize = self.width.saturating_sub(UnicodeWidthStr::width(key));
        format!(
            "{} {}{} {} {}",
            "│".color(colors::SEPARATOR),
            key.color(colors::PRIMARY),
            " ".repeat(pad),
            "·".color(colors::SEPARATOR),
            value
        )
    }

    /// Values are printed as given; callers color them.
    pub fn line(&self, key: &str, value: impl Display) {
        print(&self.render(key, value));
    }
}

fn no_results_line(range: &PortRange) -> String {
    format!(
        "{} {}",
        "│".color(colors::SEPARATOR),
        format!("nothing accepted connections on ports {range}").color(colors::SERVICE_UNKNOWN)
    )
}

pub fn no_results(range: &PortRange) {
    print(&no_results_line(range));
}

pub fn rule() {
    print(&format!(
        "{}{}",
        "└".color(colors::SEPARATOR),
        "─".repeat(TOTAL_WIDTH - 1).color(colors::SEPARATOR)
    ));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
