//! Shared scan loop for the four injection-class modules.

use crate::core::cancel::CancelToken;
use crate::core::events::{EventSink, ScanEvent};
use crate::core::target::UrlParam;
use crate::http::client::HttpClient;
use crate::payload::{injector, PayloadSet, ScannerKind};
use crate::scanner::classify;

/// Drives payloads × UrlMutator × HTTP client × classifier for one
/// URL/parameter pair. The kinds differ only in classifier, timeout, and
/// inter-request delay.
pub struct InjectionScanner {
    client: HttpClient,
    kind: ScannerKind,
}

impl InjectionScanner {
    pub fn new(client: HttpClient, kind: ScannerKind) -> Self {
        Self { client, kind }
    }

    pub async fn run(
        &self,
        target: &UrlParam,
        payloads: &PayloadSet,
        sink: &EventSink,
        cancel: &CancelToken,
    ) {
        // Precondition violations terminate immediately; they are not
        // transient failures.
        if target.url.is_empty() {
            sink.error("missing url");
            return;
        }
        if target.param.is_empty() {
            sink.error("missing parameter");
            return;
        }

        sink.info(format!("target: {} param={}", target.url, target.param));

        for payload in &payloads.items {
            // Polled before each request only; an in-flight request is left
            // to complete or time out on its own.
            if cancel.is_cancelled() {
                sink.emit(ScanEvent::Stopped);
                return;
            }

            let composed = match injector::compose(&target.url, &target.param, payload) {
                Ok(url) => url,
                Err(e) => {
                    // A payload that breaks URL composition must not kill
                    // the rest of the run.
                    sink.error(e.to_string());
                    continue;
                }
            };

            match self
                .client
                .get(composed.as_str(), self.kind.request_timeout())
                .await
            {
                Ok(response) => {
                    sink.probe(response.status, composed.as_str());
                    if self.kind == ScannerKind::Rce {
                        sink.info(format!(
                            "response snippet: {}",
                            classify::body_snippet(&response.body)
                        ));
                    } else if let Some(message) =
                        classify::classify(self.kind, &response.body, payload)
                    {
                        sink.finding(payload, message);
                    }
                }
                Err(e) => {
                    tracing::debug!("request failed for payload {payload:?}: {e}");
                    sink.error(format!("request error: {e}"));
                }
            }

            tokio::time::sleep(self.kind.request_delay()).await;
        }

        sink.emit(ScanEvent::Completed);
    }
}
