#![cfg(test)]
use harbor_common::network::range::PortRange;
use harbor_common::network::target::{self, ScanTarget};
use harbor_common::services;
use harbor_core::scanner::{self, RangeScanner, ScanReport};
use harbor_core::session::{ProbeResult, ScanSession};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

fn loopback_session(start: u16, end: u16) -> ScanSession {
    let target = ScanTarget::Addr(IpAddr::V4(Ipv4Addr::LOCALHOST));
    let range = PortRange::new(start.into(), end.into()).unwrap();
    ScanSession::new(target, range, PROBE_TIMEOUT).unwrap()
}

async fn listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// A single listening port scanned on its own yields one result and one
/// progress update at 100%.
#[tokio::test]
async fn scan_single_listening_port() {
    let (_listener, port) = listener().await;
    let scanner = RangeScanner::new();
    let mut session = loopback_session(port, port);
    let mut progress: Vec<f64> = Vec::new();
    let mut opened: Vec<(u16, String)> = Vec::new();

    let results = scanner
        .scan(
            &mut session,
            |p| progress.push(p),
            |port, service| opened.push((port, service.to_string())),
        )
        .await
        .expect("scan failed");

    let service = services::lookup(port.into());
    assert_eq!(results, vec![ProbeResult::open(port, service)]);
    assert_eq!(progress, vec![100.0]);
    assert_eq!(opened, vec![(port, service.to_string())]);
}

/// Other processes may hold neighbouring ports, so only our listener and the
/// callback counts are asserted exactly.
#[tokio::test]
async fn scan_small_range_around_listener() {
    let (_listener, port) = listener().await;
    let end = port.saturating_add(4);
    let scanner = RangeScanner::new();
    let mut session = loopback_session(port, end);
    let mut progress: Vec<f64> = Vec::new();

    let results = scanner
        .scan(&mut session, |p| progress.push(p), |_, _| {})
        .await
        .expect("scan failed");

    assert_eq!(results.first().map(|r| r.port), Some(port));
    assert!(results.windows(2).all(|w| w[0].port < w[1].port));
    assert!(results.iter().all(|r| r.open));
    assert_eq!(progress.len(), usize::from(end - port) + 1);
    assert_eq!(progress.last().copied(), Some(100.0));
}

#[tokio::test]
async fn spawned_scan_stops_when_caller_cancels() {
    let session = loopback_session(1, 65535);
    let token = session.cancel_token();
    let seen = Arc::new(Mutex::new(0usize));
    let counter = seen.clone();

    let handle = scanner::spawn(
        Arc::new(RangeScanner::new()),
        session,
        move |_| {
            let mut calls = counter.lock().unwrap();
            *calls += 1;
            if *calls == 3 {
                token.cancel();
            }
        },
        |_, _| {},
    );
    let report: ScanReport = handle.join().await.expect("scan failed");

    assert!(report.cancelled);
    assert_eq!(report.examined, 3);
    assert_eq!(*seen.lock().unwrap(), 3);
}

#[tokio::test]
async fn independent_sessions_scan_concurrently() {
    let (_first, first_port) = listener().await;
    let (_second, second_port) = listener().await;
    let scanner = Arc::new(RangeScanner::new());

    let first = scanner::spawn(
        scanner.clone(),
        loopback_session(first_port, first_port),
        |_| {},
        |_, _| {},
    );
    let second = scanner::spawn(
        scanner,
        loopback_session(second_port, second_port),
        |_| {},
        |_, _| {},
    );

    let first = first.join().await.unwrap();
    let second = second.join().await.unwrap();

    assert_eq!(first.open_ports.len(), 1);
    assert_eq!(first.open_ports[0].port, first_port);
    assert_eq!(second.open_ports.len(), 1);
    assert_eq!(second.open_ports[0].port, second_port);
    assert!(!first.cancelled && !second.cancelled);
}

#[test]
fn targets_are_validated_before_sessions_exist() {
    assert!(target::validate("127.0.0.1"));
    assert!(target::validate("::1"));
    assert!(!target::validate("256.256.256.256"));
    assert!(!target::validate(""));
    assert!(PortRange::new(0, 80).is_err());
    assert!(PortRange::new(80, 70000).is_err());
}

/// Returns early when 8080 is taken or anything already listens on 8081-8085.
#[tokio::test]
async fn scan_http_alt_fixture() {
    let Ok(_listener) = TcpListener::bind("127.0.0.1:8080").await else {
        return;
    };
    for port in 8081..=8085 {
        if std::net::TcpListener::bind(("127.0.0.1", port)).is_err() {
            return;
        }
    }

    let scanner = RangeScanner::new();
    let mut session = loopback_session(8080, 8085);
    let mut progress: Vec<f64> = Vec::new();
    let mut opened: Vec<(u16, String)> = Vec::new();

    let results = scanner
        .scan(
            &mut session,
            |p| progress.push(p),
            |port, service| opened.push((port, service.to_string())),
        )
        .await
        .unwrap();

    assert_eq!(results, vec![ProbeResult::open(8080, "HTTP-Alt")]);
    assert_eq!(progress.len(), 6);
    assert_eq!(progress.last().copied(), Some(100.0));
    assert_eq!(opened, vec![(8080, "HTTP-Alt".to_string())]);
}
