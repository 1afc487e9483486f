use std::time::Instant;

use hyper::ext::ReasonPhrase;
use reqwest::{Client, StatusCode};

use super::prelude::*;
use crate::error::PingerError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Issues probes against a target and turns each response into a [`ProbeRecord`].
pub struct Prober {
    client: Client,
    selector: HeaderSelector,
}

impl Prober {
    /// Build a prober whose client accepts any server certificate.
    ///
    /// Idle connections are not pooled, so every probe pays for its own
    /// connect and TLS handshake. Proxy environment variables are ignored;
    /// probes always go straight to the target.
    pub fn new(selector: HeaderSelector) -> Result<Self, PingerError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .no_proxy()
            .pool_max_idle_per_host(0)
            .user_agent(USER_AGENT)
            .build()
            .map_err(PingerError::Client)?;

        log::debug!("Built HTTP client, selected headers: {:?}", selector.names());

        Ok(Self { client, selector })
    }

    /// Issue one GET against `url`.
    ///
    /// Latency stops at the response headers; the body is never read and is
    /// closed when the response is dropped.
    pub async fn probe(&self, url: &str) -> Result<ProbeRecord, PingerError> {
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| PingerError::Request {
                url: url.to_string(),
                source,
            })?;
        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let headers = response.headers();
        let record = ProbeRecord {
            status_line: status_line(
                response.status(),
                response.extensions().get::<ReasonPhrase>(),
            ),
            host: header_value(headers, "Host"),
            headers: self.selector.extract(headers),
            latency_ms,
        };
        drop(response);

        log::debug!(
            "Probed {url}: {} in {}ms",
            record.status_line,
            record.latency_ms
        );

        Ok(record)
    }
}

/// Status code plus reason phrase. The server's own phrase wins; hyper only
/// records one when it differs from the canonical reason.
fn status_line(status: StatusCode, reason: Option<&ReasonPhrase>) -> String {
    match reason {
        Some(reason) => format!(
            "{} {}",
            status.as_u16(),
            String::from_utf8_lossy(reason.as_bytes())
        ),
        None => match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        },
    }
}
