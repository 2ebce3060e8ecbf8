//! Well-known port to service name table.

pub const UNKNOWN_SERVICE: &str = "Unknown";

/// Catalog entries, sorted by port for binary search.
const ENTRIES: &[(u16, &str)] = &[
    (21, "FTP"),
    (22, "SSH"),
    (23, "Telnet"),
    (25, "SMTP"),
    (53, "DNS"),
    (80, "HTTP"),
    (110, "POP3"),
    (143, "IMAP"),
    (443, "HTTPS"),
    (993, "IMAPS"),
    (995, "POP3S"),
    (1433, "MSSQL"),
    (3306, "MySQL"),
    (3389, "RDP"),
    (5432, "PostgreSQL"),
    (5900, "VNC"),
    (6379, "Redis"),
    (8080, "HTTP-Alt"),
    (8443, "HTTPS-Alt"),
    (9000, "Test-Web"),
    (9001, "Test-API"),
    (9002, "Test-DB"),
    (9200, "Elasticsearch"),
    (9999, "Test-Service"),
];

/// Read-only port to name lookup.
#[derive(Debug, Clone, Copy)]
pub struct ServiceCatalog {
    entries: &'static [(u16, &'static str)],
}

pub static SERVICE_CATALOG: ServiceCatalog = ServiceCatalog { entries: ENTRIES };

impl ServiceCatalog {
    /// Name registered for `port`, or [`UNKNOWN_SERVICE`].
    ///
    /// Defined for every integer; anything outside `u16` misses.
    pub fn lookup(&self, port: i64) -> &'static str {
        u16::try_from(port)
            .ok()
            .and_then(|port| self.get(port))
            .unwrap_or(UNKNOWN_SERVICE)
    }

    pub fn get(&self, port: u16) -> Option<&'static str> {
        self.entries
            .binary_search_by_key(&port, |&(p, _)| p)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shorthand for [`SERVICE_CATALOG`]`.lookup(port)`.
pub fn lookup(port: i64) -> &'static str {
    SERVICE_CATALOG.lookup(port)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_sorted_and_unique() {
        assert!(ENTRIES.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn lookup_known_ports() {
        assert_eq!(lookup(80), "HTTP");
        assert_eq!(lookup(443), "HTTPS");
        assert_eq!(lookup(22), "SSH");
        assert_eq!(lookup(21), "FTP");
        assert_eq!(lookup(8080), "HTTP-Alt");
        assert_eq!(lookup(9999), "Test-Service");
    }

    #[test]
    fn lookup_misses_return_unknown() {
        for port in [0, -1, -80, 1, 12345, 65535, 65536, 99999, i64::MIN, i64::MAX] {
            assert_eq!(lookup(port), UNKNOWN_SERVICE, "port {port}");
        }
    }

    #[test]
    fn every_entry_resolves_through_get() {
        for (port, name) in SERVICE_CATALOG.iter() {
            assert_eq!(SERVICE_CATALOG.get(port), Some(name));
            assert_eq!(lookup(port.into()), name);
        }
        assert_eq!(SERVICE_CATALOG.len(), 24);
    }
}
