use std::path::PathBuf;

use clap::Parser;

use crate::core::orchestrator::Module;

/// redfang – manual web vulnerability probing toolkit
#[derive(Parser, Debug)]
#[command(
    name = "redfang",
    version,
    about = "Manual web vulnerability probing toolkit",
    long_about = r#"
redfang substitutes attack payloads into a target URL parameter, issues one
HTTP request per payload, and inspects each response for heuristic markers
of injection, inclusion, or command-execution success. A brute module sprays
credentials against a login form and an api module probes candidate API
paths.

Target descriptor grammar:
  xss / sqli / lfi / rce :  "<url>::<param>"
  brute                  :  "<baseUrl>::<loginPath>"
  api                    :  "<baseUrl>"

All findings are heuristic signals, not verified vulnerabilities. Only scan
hosts you are authorized to test."#,
    after_help = r#"EXAMPLES:
  redfang sqli "http://target/item?id=1::id"
  redfang xss  "http://target/search?q=hello::q"
  redfang brute "http://target::/login"
  redfang api  "http://target"
  redfang lfi  "http://target/view?file=home::file" -p ./wordlists -o report.json"#
)]
pub struct Cli {
    /// Scan module to run
    #[arg(value_enum)]
    pub module: Module,

    /// Target descriptor (see grammar above)
    pub target: String,

    /// Directory of payload wordlists; built-in defaults fill any gap
    #[arg(short = 'p', long)]
    pub payload_dir: Option<PathBuf>,

    /// Write a JSON findings report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Verbose diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}
