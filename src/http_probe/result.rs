/// Outcome of a single successful probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRecord {
    /// Status code plus reason phrase, e.g. `200 OK`.
    pub status_line: String,

    /// Value of the `Host` response header, empty when the server did not send one.
    pub host: String,

    /// Selected response headers, in the order the operator listed them.
    /// Absent headers map to an empty value.
    pub headers: Vec<(String, String)>,

    /// Milliseconds between issuing the request and receiving the response headers.
    pub latency_ms: u64,
}
