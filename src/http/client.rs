use std::error::Error as _;
use std::time::{Duration, Instant};

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Version};

use crate::config::Config;
use crate::error::RequestError;

use super::request::{OutboundRequest, PreparedRequest};
use super::response::HttpResponse;

/// Shared outbound client with the fixed redirect, timeout and
/// identification policies applied.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
}

impl HttpExecutor {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    pub async fn execute(&self, request: &OutboundRequest) -> Result<HttpResponse, RequestError> {
        let prepared = request.prepare()?;
        self.send(prepared).await
    }

    pub async fn send(&self, request: PreparedRequest) -> Result<HttpResponse, RequestError> {
        let mut req_builder = self.client.request(request.method.into(), request.url.clone());
        for (name, value) in &request.headers {
            req_builder = req_builder.header(name, value);
        }
        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let started = Instant::now();
        let response = req_builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let raw_headers = raw_header_block(response.version(), status, response.headers());
        let bytes = response.bytes().await.map_err(transport_error)?;
        let duration_ms = round_millis(started.elapsed());

        let size_bytes = bytes.len();
        let body = String::from_utf8_lossy(&bytes).into_owned();

        tracing::info!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            duration_ms,
            size_bytes,
            "request completed"
        );

        Ok(HttpResponse {
            url: request.url.to_string(),
            status: status.as_u16(),
            raw_headers,
            body,
            duration_ms,
            size_bytes,
        })
    }
}

/// Flatten a reqwest error and its causes into one message, since the
/// top-level text alone rarely names the DNS/TLS/connect reason.
fn transport_error(err: reqwest::Error) -> RequestError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    tracing::warn!(error = %message, "transport failure");
    RequestError::Transport(message)
}

fn raw_header_block(version: Version, status: StatusCode, headers: &HeaderMap) -> String {
    let mut lines = vec![format!(
        "{version:?} {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )];
    for (name, value) in headers {
        lines.push(format!("{name}: {}", String::from_utf8_lossy(value.as_bytes())));
    }
    lines.push(String::new());
    lines.push(String::new());
    lines.join("\r\n")
}

fn round_millis(elapsed: Duration) -> u64 {
    (elapsed.as_secs_f64() * 1000.0).round() as u64
}
