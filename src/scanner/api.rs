//! Candidate API endpoint discovery.

use crate::core::cancel::CancelToken;
use crate::core::events::{EventSink, ScanEvent};
use crate::core::target::BaseOnly;
use crate::http::client::HttpClient;
use crate::payload::{PayloadSet, ScannerKind};

/// Single-dimension variant of the scan loop: walks path suffixes against a
/// base URL, with success defined by HTTP status rather than body content.
pub struct EndpointProbe {
    client: HttpClient,
}

impl EndpointProbe {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn run(
        &self,
        target: &BaseOnly,
        paths: &PayloadSet,
        sink: &EventSink,
        cancel: &CancelToken,
    ) {
        if target.base.is_empty() {
            sink.error("missing url");
            return;
        }

        sink.info(format!("endpoint discovery on {}", target.base));

        for path in &paths.items {
            if cancel.is_cancelled() {
                sink.emit(ScanEvent::Stopped);
                return;
            }

            let url = join(&target.base, path);
            match self
                .client
                .get(&url, ScannerKind::Api.request_timeout())
                .await
            {
                Ok(response) => {
                    sink.probe(response.status, url.as_str());
                    // Exactly 200, not a "success class": 201/204/301
                    // neighbors stay unflagged.
                    if response.status == 200 {
                        sink.finding(path, format!("endpoint found: {url}"));
                    }
                }
                Err(e) => sink.error(format!("request error: {e}")),
            }

            tokio::time::sleep(ScannerKind::Api.request_delay()).await;
        }

        sink.emit(ScanEvent::Completed);
    }
}

fn join(base: &str, path: &str) -> String {
    let sep = if path.starts_with('/') { "" } else { "/" };
    format!("{}{}{}", base.trim_end_matches('/'), sep, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_normalizes_slashes() {
        assert_eq!(join("http://t/", "/api/"), "http://t/api/");
        assert_eq!(join("http://t", "graphql"), "http://t/graphql");
    }
}
