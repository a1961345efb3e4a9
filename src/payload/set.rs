use std::time::Duration;

/// Probe corpus and classifier family a payload list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScannerKind {
    Xss,
    Sqli,
    Lfi,
    Rce,
    Api,
}

impl ScannerKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ScannerKind::Xss => "XSS",
            ScannerKind::Sqli => "SQLi",
            ScannerKind::Lfi => "LFI",
            ScannerKind::Rce => "RCE",
            ScannerKind::Api => "API",
        }
    }

    /// Per-request timeout. TLS errors never abort a scan; timeouts bound it.
    pub fn request_timeout(&self) -> Duration {
        match self {
            ScannerKind::Api => Duration::from_secs(6),
            _ => Duration::from_secs(8),
        }
    }

    /// Politeness delay between requests. Cancellation latency is bounded by
    /// one request timeout plus this delay.
    pub fn request_delay(&self) -> Duration {
        match self {
            ScannerKind::Xss | ScannerKind::Api => Duration::from_millis(250),
            _ => Duration::from_millis(300),
        }
    }
}

/// Ordered, immutable list of probe strings for one scanner kind.
///
/// Order matters: an operator watches the live log sequentially, so payloads
/// run strictly in list position.
#[derive(Debug, Clone)]
pub struct PayloadSet {
    pub kind: ScannerKind,
    pub items: Vec<String>,
}

impl PayloadSet {
    pub fn new(kind: ScannerKind, items: Vec<String>) -> Self {
        Self { kind, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
