use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::format;

/// Bar positions per percent, so the bar moves at 0.1% resolution.
const STEPS_PER_PERCENT: f64 = 10.0;
const BAR_LENGTH: u64 = 1_000;
const TIP: &str = "You can press 'q' to finish early";

/// Creates the span whose progress bar tracks a scan.
pub fn scan_span(show_tip: bool) -> Span {
    let span = info_span!("scan", indicatif.pb_show = true);
    let style = ProgressStyle::with_template("{spinner:.blue} [{bar:32.green/bright_black}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ])
        .progress_chars("━╸─");

    span.pb_set_style(&style);
    span.pb_set_length(BAR_LENGTH);
    span.pb_set_message(if show_tip { TIP } else { "Starting scan..." });
    span
}

pub fn report_progress(span: &Span, percent: f64) {
    let position = (percent * STEPS_PER_PERCENT).round() as u64;
    span.pb_set_position(position.min(BAR_LENGTH));
    span.pb_set_message(&format::progress_message(percent));
}
