use clap::Parser;

use redfang::cli::args::Cli;
use redfang::core::events::ScanEvent;
use redfang::core::orchestrator::Orchestrator;
use redfang::payload::loader::PayloadLibrary;
use redfang::reporting::json;
use redfang::reporting::model::Finding;
use redfang::reporting::reporter::Reporter;

const BANNER: &str = r#"
 ██████╗ ███████╗██████╗ ███████╗ █████╗ ███╗   ██╗ ██████╗
 ██╔══██╗██╔════╝██╔══██╗██╔════╝██╔══██╗████╗  ██║██╔════╝
 ██████╔╝█████╗  ██║  ██║█████╗  ███████║██╔██╗ ██║██║  ███╗
 ██╔══██╗██╔══╝  ██║  ██║██╔══╝  ██╔══██║██║╚██╗██║██║   ██║
 ██║  ██║███████╗██████╔╝██║     ██║  ██║██║ ╚████║╚██████╔╝
 ╚═╝  ╚═╝╚══════╝╚═════╝ ╚═╝     ╚═╝  ╚═╝╚═╝  ╚═══╝ ╚═════╝

        manual web vulnerability probing toolkit
"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.no_banner {
        println!("\x1b[31m{BANNER}\x1b[0m");
    }

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let library = match &cli.payload_dir {
        Some(dir) => PayloadLibrary::from_dir(dir),
        None => PayloadLibrary::defaults(),
    };

    let orchestrator = Orchestrator::new(library)?;
    let mut handle = orchestrator.start(cli.module, &cli.target)?;

    let tag = cli.module.tag();
    let mut reporter = Reporter::new();

    loop {
        tokio::select! {
            event = handle.next_event() => {
                let Some(event) = event else { break };
                print_event(tag, &event);
                if let ScanEvent::Finding { payload, message } = &event {
                    reporter.add(Finding::new(cli.module, &cli.target, payload, message));
                }
            }
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\n[{tag}] stop requested, letting the current request finish...");
                handle.cancel();
            }
        }
    }
    handle.wait().await;

    if let Some(path) = &cli.output {
        let report = json::render(reporter.findings())?;
        std::fs::write(path, report)?;
        println!("[{tag}] report written to {}", path.display());
    }
    println!("[{tag}] {} finding(s)", reporter.findings().len());

    Ok(())
}

fn print_event(tag: &str, event: &ScanEvent) {
    match event {
        ScanEvent::Info(text) => println!("[{tag}] {text}"),
        ScanEvent::Probe { status, target } => println!("[{tag}] {status} → {target}"),
        ScanEvent::Finding { message, .. } => println!("[{tag}] [+] {message}"),
        ScanEvent::Error(text) => println!("[{tag}] [!] {text}"),
        ScanEvent::Stopped => println!("[{tag}] stopped."),
        ScanEvent::Completed => println!("[{tag}] scan complete."),
    }
}
