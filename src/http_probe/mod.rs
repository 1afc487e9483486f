pub mod headers;
pub mod probe;
pub mod result;

pub mod prelude {
    pub use super::headers::{HeaderSelector, header_value};
    pub use super::probe::Prober;
    pub use super::result::ProbeRecord;
}

use std::fmt::Write;

/// Render an error followed by its chain of sources.
pub fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, "\n\nCaused by: {}", src);
        err = src;
    }
    s
}
