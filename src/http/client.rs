//! Thin reqwest wrapper shared by all scanners.

use std::time::Duration;

use reqwest::redirect::Policy;

use crate::http::response::HttpResponse;

#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        // Scan targets are authorized pentest hosts, frequently behind
        // self-signed or otherwise broken TLS; certificate errors must not
        // abort a run.
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .redirect(Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }

    pub async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, reqwest::Error> {
        let response = self.client.get(url).timeout(timeout).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }

    pub async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<HttpResponse, reqwest::Error> {
        let response = self
            .client
            .post(url)
            .form(form)
            .timeout(timeout)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
