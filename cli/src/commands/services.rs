use colored::*;

use crate::terminal::{colors, print};
use harbor_common::{config::Config, services::SERVICE_CATALOG};

pub fn services(cfg: &Config) {
    let fields = print::Fields::new(SERVICE_CATALOG.iter().map(|(_, name)| name));

    for (port, name) in SERVICE_CATALOG.iter() {
        if cfg.quiet > 1 {
            print::print(&format!("{port}\t{name}"));
        } else {
            fields.line(name, port.to_string().color(colors::ACCENT));
        }
    }

    if cfg.quiet == 0 {
        print::rule();
    }
}
