//! Wordlist loading with built-in fallbacks.
//!
//! Sourcing payloads is a loader concern, kept apart from the scan loop:
//! scanners receive already-materialized `PayloadSet`s by constructor
//! injection and never touch the filesystem.

use std::fs;
use std::path::Path;

use crate::payload::set::{PayloadSet, ScannerKind};

const XSS_DEFAULTS: &[&str] = &[
    "<script>alert(1)</script>",
    "\"><img src=x onerror=alert(1)>",
    "<svg/onload=alert(1)>",
];

const SQLI_DEFAULTS: &[&str] = &["' OR '1'='1", "' UNION SELECT NULL--"];

const LFI_DEFAULTS: &[&str] = &["../../../../etc/passwd", "/etc/passwd"];

const RCE_DEFAULTS: &[&str] = &["id", "whoami", "uname -a"];

const USERNAME_DEFAULTS: &[&str] = &["admin", "user", "test"];

const PASSWORD_DEFAULTS: &[&str] = &["password", "123456", "admin123"];

const ENDPOINT_DEFAULTS: &[&str] = &["/api/", "/api/v1/", "/v1/", "/graphql"];

/// All payload corpora for one orchestrator instance.
#[derive(Debug, Clone)]
pub struct PayloadLibrary {
    pub xss: PayloadSet,
    pub sqli: PayloadSet,
    pub lfi: PayloadSet,
    pub rce: PayloadSet,
    pub usernames: Vec<String>,
    pub passwords: Vec<String>,
    pub endpoints: PayloadSet,
}

impl PayloadLibrary {
    /// Built-in minimal lists, used when no payload directory is given.
    pub fn defaults() -> Self {
        Self {
            xss: PayloadSet::new(ScannerKind::Xss, owned(XSS_DEFAULTS)),
            sqli: PayloadSet::new(ScannerKind::Sqli, owned(SQLI_DEFAULTS)),
            lfi: PayloadSet::new(ScannerKind::Lfi, owned(LFI_DEFAULTS)),
            rce: PayloadSet::new(ScannerKind::Rce, owned(RCE_DEFAULTS)),
            usernames: owned(USERNAME_DEFAULTS),
            passwords: owned(PASSWORD_DEFAULTS),
            endpoints: PayloadSet::new(ScannerKind::Api, owned(ENDPOINT_DEFAULTS)),
        }
    }

    /// Load one wordlist file per corpus from `dir`. A missing or empty file
    /// falls back to the built-in default for that corpus only.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            xss: PayloadSet::new(
                ScannerKind::Xss,
                load_list(&dir.join("xss_payloads.txt"), XSS_DEFAULTS),
            ),
            sqli: PayloadSet::new(
                ScannerKind::Sqli,
                load_list(&dir.join("sql_payloads.txt"), SQLI_DEFAULTS),
            ),
            lfi: PayloadSet::new(
                ScannerKind::Lfi,
                load_list(&dir.join("lfi_payloads.txt"), LFI_DEFAULTS),
            ),
            rce: PayloadSet::new(
                ScannerKind::Rce,
                load_list(&dir.join("rce_payloads.txt"), RCE_DEFAULTS),
            ),
            usernames: load_list(&dir.join("brute_usernames.txt"), USERNAME_DEFAULTS),
            passwords: load_list(&dir.join("brute_passwords.txt"), PASSWORD_DEFAULTS),
            endpoints: PayloadSet::new(
                ScannerKind::Api,
                load_list(&dir.join("api_endpoints.txt"), ENDPOINT_DEFAULTS),
            ),
        }
    }

    /// Corpus for one scanner kind.
    pub fn set(&self, kind: ScannerKind) -> &PayloadSet {
        match kind {
            ScannerKind::Xss => &self.xss,
            ScannerKind::Sqli => &self.sqli,
            ScannerKind::Lfi => &self.lfi,
            ScannerKind::Rce => &self.rce,
            ScannerKind::Api => &self.endpoints,
        }
    }
}

fn load_list(path: &Path, fallback: &[&str]) -> Vec<String> {
    match read_lines(path) {
        Some(lines) if !lines.is_empty() => lines,
        _ => {
            tracing::debug!("no usable wordlist at {}, using defaults", path.display());
            owned(fallback)
        }
    }
}

/// Non-blank, non-comment lines of a wordlist file, in file order.
fn read_lines(path: &Path) -> Option<Vec<String>> {
    let content = fs::read_to_string(path).ok()?;
    Some(
        content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect(),
    )
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
