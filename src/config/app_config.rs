use std::time::Duration;

use super::cli::Cli;
use crate::http_probe::prelude::HeaderSelector;

/// Process-wide settings, fixed before the first probe and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// The URL exactly as the operator typed it.
    pub target: String,

    /// The target with a scheme guaranteed, see [`normalize_url`].
    pub url: String,

    /// Prefix schemeless targets with `http://` instead of `https://`.
    pub use_http: bool,

    /// Pause between probes. Zero probes back-to-back.
    pub delay: Duration,

    /// Response headers to show for every probe.
    pub headers: HeaderSelector,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let config = Self {
            target: cli.url.clone(),
            url: normalize_url(&cli.url, cli.use_http),
            use_http: cli.use_http,
            delay: Duration::from_secs(cli.delay),
            headers: HeaderSelector::parse(&cli.response_headers),
        };

        log::info!(
            "Probing {} (given {:?}, usehttp={}) every {}s, headers: {:?}",
            config.url,
            config.target,
            config.use_http,
            cli.delay,
            config.headers.names()
        );

        config
    }
}

/// Ensure `raw` carries a scheme.
///
/// Anything already containing `://` is returned as is, even when the scheme
/// is not HTTP; the prober reports those.
pub fn normalize_url(raw: &str, use_http: bool) -> String {
    if raw.contains("://") {
        raw.to_string()
    } else if use_http {
        format!("http://{raw}")
    } else {
        format!("https://{raw}")
    }
}
