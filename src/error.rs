use thiserror::Error;

/// Errors that end the pinger.
///
/// Every variant is fatal: the probe loop never retries or skips a failed probe.
#[derive(Debug, Error)]
pub enum PingerError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// A probe failed at the transport, DNS, TLS or protocol level.
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Writing rows to standard output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Subscribing to interrupt/termination signals failed.
    #[error("failed to install signal handler")]
    Signal(#[source] std::io::Error),
}
