//! Scan orchestration: module resolution, lifecycle, single-flight guard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::cancel::CancelToken;
use crate::core::events::{EventSink, ScanEvent};
use crate::core::target::Target;
use crate::http::client::HttpClient;
use crate::payload::loader::PayloadLibrary;
use crate::payload::ScannerKind;
use crate::scanner::api::EndpointProbe;
use crate::scanner::brute::CredentialSpray;
use crate::scanner::injection::InjectionScanner;

/// Scan modules an operator can launch, resolved to handlers at compile
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Module {
    Xss,
    Sqli,
    Lfi,
    Rce,
    Brute,
    Api,
}

impl Module {
    /// Log-line tag, matching the operator-facing module names.
    pub fn tag(&self) -> &'static str {
        match self {
            Module::Xss => "XSS",
            Module::Sqli => "SQLi",
            Module::Lfi => "LFI",
            Module::Rce => "RCE",
            Module::Brute => "BRUTE",
            Module::Api => "API",
        }
    }

    /// Corpus/classifier kind for the injection-class modules.
    fn injection_kind(self) -> Option<ScannerKind> {
        match self {
            Module::Xss => Some(ScannerKind::Xss),
            Module::Sqli => Some(ScannerKind::Sqli),
            Module::Lfi => Some(ScannerKind::Lfi),
            Module::Rce => Some(ScannerKind::Rce),
            Module::Brute | Module::Api => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartError {
    /// A prior scan has not reached a terminal state; scans are rejected,
    /// never queued.
    #[error("a scan is already running")]
    AlreadyRunning,
}

/// One in-flight scan: its cancellation token, event stream, and background
/// task. Terminal handles cannot be reused; relaunching takes a new `start`.
#[derive(Debug)]
pub struct ScanHandle {
    cancel: CancelToken,
    rx: mpsc::UnboundedReceiver<ScanEvent>,
    join: JoinHandle<()>,
}

impl ScanHandle {
    /// Next event in scan order. `None` once the scan task has finished and
    /// the stream is drained.
    pub async fn next_event(&mut self) -> Option<ScanEvent> {
        self.rx.recv().await
    }

    /// Request cooperative cancellation. Does not block on in-flight
    /// requests; takes effect at the next payload boundary. Idempotent and
    /// a no-op after completion.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the background task to finish. After this returns the
    /// orchestrator accepts a new `start`.
    pub async fn wait(self) {
        let _ = self.join.await;
    }
}

/// Sole entry point for front ends: resolves `(module, raw target)` into a
/// concrete scanner run and enforces the one-active-scan invariant.
pub struct Orchestrator {
    client: HttpClient,
    library: PayloadLibrary,
    running: Arc<AtomicBool>,
}

impl Orchestrator {
    pub fn new(library: PayloadLibrary) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: HttpClient::new()?,
            library,
            running: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Launch `module` against `raw_target` on a background task.
    ///
    /// Target-string grammar: `"<url>::<param>"` for the injection modules,
    /// `"<base>::<login-path>"` for brute, `"<base>"` alone for api.
    pub fn start(&self, module: Module, raw_target: &str) -> Result<ScanHandle, StartError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(StartError::AlreadyRunning);
        }

        let (sink, rx) = EventSink::channel();
        let cancel = CancelToken::new();

        let task_cancel = cancel.clone();
        let running = Arc::clone(&self.running);
        let client = self.client.clone();
        let library = self.library.clone();
        let raw = raw_target.to_string();

        tracing::info!("starting {} scan against {raw}", module.tag());

        let join = tokio::spawn(async move {
            run_module(module, &raw, client, &library, &sink, &task_cancel).await;
            running.store(false, Ordering::SeqCst);
        });

        Ok(ScanHandle { cancel, rx, join })
    }
}

async fn run_module(
    module: Module,
    raw: &str,
    client: HttpClient,
    library: &PayloadLibrary,
    sink: &EventSink,
    cancel: &CancelToken,
) {
    match Target::parse(module, raw) {
        Target::UrlParam(target) => {
            // parse() yields UrlParam exactly for the injection modules, so
            // the kind is always present here.
            let Some(kind) = module.injection_kind() else {
                return;
            };
            InjectionScanner::new(client, kind)
                .run(&target, library.set(kind), sink, cancel)
                .await;
        }
        Target::BaseAndPath(target) => {
            CredentialSpray::new(client)
                .run(&target, &library.usernames, &library.passwords, sink, cancel)
                .await;
        }
        Target::BaseOnly(target) => {
            EndpointProbe::new(client)
                .run(&target, &library.endpoints, sink, cancel)
                .await;
        }
    }
}
