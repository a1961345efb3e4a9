//! Heuristic response classification, one rule per scanner kind.
//!
//! These are best-effort signals for a human operator, not verified
//! vulnerabilities. All functions here are pure.

use crate::payload::ScannerKind;

const SQL_ERROR_MARKERS: &[&str] = &[
    "sql syntax",
    "mysql",
    "sqlite",
    "mssql",
    "oracle",
    "sql error",
    "syntax error",
];

const LFI_MARKERS: &[&str] = &["root:x:", "passwd"];

const SPRAY_FAILURE_MARKERS: &[&str] = &["invalid", "incorrect", "error", "failed"];

/// Finding message for a response, or `None` when nothing matched.
///
/// Rce never classifies automatically: command-execution signatures vary too
/// widely for a fixed marker list, so the scan loop surfaces a body snippet
/// instead. Api success is status-based and handled by the endpoint probe.
pub fn classify(kind: ScannerKind, body: &str, payload: &str) -> Option<String> {
    match kind {
        ScannerKind::Xss => body
            .contains(payload)
            .then(|| format!("payload reflected in response: {payload}")),
        ScannerKind::Sqli => {
            let lower = body.to_lowercase();
            SQL_ERROR_MARKERS
                .iter()
                .any(|m| lower.contains(m))
                .then(|| format!("potential SQL error with payload: {payload}"))
        }
        ScannerKind::Lfi => LFI_MARKERS
            .iter()
            .any(|m| body.contains(m))
            .then(|| format!("possible inclusion with payload: {payload}")),
        ScannerKind::Rce | ScannerKind::Api => None,
    }
}

/// Negative heuristic for credential spraying: success iff no failure
/// language appears. A rejection page that avoids these words still counts
/// as success; that false-positive risk is inherent to the check.
pub fn spray_success(body: &str) -> bool {
    let lower = body.to_lowercase();
    SPRAY_FAILURE_MARKERS.iter().all(|m| !lower.contains(m))
}

/// One-line body excerpt for human review of command-injection probes.
pub fn body_snippet(body: &str) -> String {
    body.replace(['\r', '\n'], " ").chars().take(180).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqli_flags_error_banner() {
        let body = "You have an error in your SQL syntax";
        assert!(classify(ScannerKind::Sqli, body, "'").is_some());
    }

    #[test]
    fn sqli_ignores_clean_body() {
        assert!(classify(ScannerKind::Sqli, "not found", "'").is_none());
    }

    #[test]
    fn sqli_markers_are_case_insensitive() {
        assert!(classify(ScannerKind::Sqli, "MySQL server error", "'").is_some());
    }

    #[test]
    fn xss_flags_verbatim_reflection() {
        let payload = "<script>x</script>";
        let body = format!("you searched for {payload}");
        assert!(classify(ScannerKind::Xss, &body, payload).is_some());
    }

    // HTML-escaped reflection defeats the naive check on purpose: an escaped
    // payload does not execute, so it is not reported.
    #[test]
    fn xss_ignores_escaped_reflection() {
        let body = "you searched for &lt;script&gt;x&lt;/script&gt;";
        assert!(classify(ScannerKind::Xss, body, "<script>x</script>").is_none());
    }

    #[test]
    fn lfi_flags_passwd_content() {
        let body = "root:x:0:0:root:/root:/bin/bash";
        assert!(classify(ScannerKind::Lfi, body, "../../etc/passwd").is_some());
    }

    #[test]
    fn rce_never_classifies() {
        assert!(classify(ScannerKind::Rce, "uid=0(root)", "id").is_none());
    }

    #[test]
    fn spray_success_requires_absence_of_failure_words() {
        assert!(spray_success(""));
        assert!(spray_success("welcome back"));
        assert!(!spray_success("Invalid credentials"));
        assert!(!spray_success("login FAILED"));
        // Known weakness: a rejection worded without the markers passes.
        assert!(spray_success("please try again later"));
    }

    #[test]
    fn snippet_is_bounded_and_single_line() {
        let body = format!("line one\r\nline two {}", "x".repeat(500));
        let snippet = body_snippet(&body);
        assert_eq!(snippet.chars().count(), 180);
        assert!(!snippet.contains('\n'));
        assert!(snippet.starts_with("line one  line two"));
    }
}
