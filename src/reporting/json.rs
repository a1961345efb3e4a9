use serde::Serialize;

use crate::reporting::model::Finding;

#[derive(Serialize)]
struct Report<'a> {
    tool: &'static str,
    version: &'static str,
    total_findings: usize,
    findings: &'a [Finding],
}

pub fn render(findings: &[Finding]) -> anyhow::Result<String> {
    let report = Report {
        tool: "redfang",
        version: env!("CARGO_PKG_VERSION"),
        total_findings: findings.len(),
        findings,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::orchestrator::Module;

    #[test]
    fn report_carries_counts_and_findings() {
        let findings = vec![Finding::new(
            Module::Sqli,
            "http://t/item?id=1::id",
            "' OR '1'='1",
            "potential SQL error with payload: ' OR '1'='1",
        )];
        let json = render(&findings).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_findings"], 1);
        assert_eq!(value["findings"][0]["module"], "SQLi");
    }
}
