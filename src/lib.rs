//! Probe a single URL over HTTP(S) in a loop, printing one aligned row per
//! response until interrupted.

pub mod config;
pub mod error;
pub mod http_probe;
pub mod output;
pub mod probe;

#[cfg(test)]
mod test_support;

pub use error::PingerError;
