use reqwest::header::HeaderMap;

/// The ordered list of response headers the operator asked to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSelector {
    names: Vec<String>,
}

impl HeaderSelector {
    /// Split a comma delimited list of header names.
    ///
    /// Names are not trimmed, so `"A, B"` selects `"A"` and `" B"`. An empty
    /// string selects a single empty name, which always renders an empty value.
    pub fn parse(raw: &str) -> Self {
        Self {
            names: raw.split(',').map(str::to_owned).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Look up every selected name in `headers`, keeping the configured order.
    pub fn extract(&self, headers: &HeaderMap) -> Vec<(String, String)> {
        self.names
            .iter()
            .map(|name| (name.clone(), header_value(headers, name)))
            .collect()
    }
}

/// First value of `name` in `headers`, or an empty string.
///
/// Lookup is case-insensitive. Names that are not valid header tokens never match.
pub fn header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default()
}
