//! The probe loop: probe, print, wait, flush, forever.

pub mod signal;

use std::convert::Infallible;
use std::future::Future;
use std::io::Write;

use chrono::Local;
use tokio::time::sleep;

use crate::config::AppConfig;
use crate::error::PingerError;
use crate::http_probe::prelude::*;
use crate::output::RowWriter;

pub use signal::ShutdownSignal;

/// Probe `config.url` until a probe or a write fails.
///
/// `counter` holds the number of rows written so far; the next row is
/// printed with its current value.
pub async fn probe_loop<W: Write>(
    config: &AppConfig,
    prober: &Prober,
    table: &mut RowWriter<W>,
    counter: &mut u64,
) -> Result<Infallible, PingerError> {
    loop {
        let record = prober.probe(&config.url).await?;
        table.write_row(*counter, &config.url, &record, &Local::now())?;
        *counter += 1;

        if !config.delay.is_zero() {
            sleep(config.delay).await;
        }
        table.flush()?;
    }
}

/// Print the header, then run [`probe_loop`] until `shutdown` resolves.
///
/// The in-flight probe or sleep is abandoned on shutdown. Rows already
/// written are flushed before returning, on both the shutdown and the error
/// path. Returns the number of rows printed.
pub async fn run_until_shutdown<W, F>(
    config: &AppConfig,
    prober: &Prober,
    table: &mut RowWriter<W>,
    shutdown: F,
) -> Result<u64, PingerError>
where
    W: Write,
    F: Future<Output = ()>,
{
    table.write_header()?;

    let mut counter = 0;
    let outcome = tokio::select! {
        result = probe_loop(config, prober, table, &mut counter) => {
            result.map(|never| match never {})
        }
        _ = shutdown => Ok(()),
    };

    table.flush()?;
    outcome?;

    log::debug!("Probe loop stopped after {counter} rows");
    Ok(counter)
}
