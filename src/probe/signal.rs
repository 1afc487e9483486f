use crate::error::PingerError;

/// Listener for the signals that end a probing session.
///
/// Installed before the first probe so an early Ctrl-C is not lost.
pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl ShutdownSignal {
    #[cfg(unix)]
    pub fn install() -> Result<Self, PingerError> {
        use tokio::signal::unix::{SignalKind, signal};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt()).map_err(PingerError::Signal)?,
            terminate: signal(SignalKind::terminate()).map_err(PingerError::Signal)?,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> Result<Self, PingerError> {
        Ok(Self {})
    }

    /// Resolve on the first interrupt or termination signal and name it.
    #[cfg(unix)]
    pub async fn recv(mut self) -> &'static str {
        tokio::select! {
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
        }
    }

    #[cfg(not(unix))]
    pub async fn recv(self) -> &'static str {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Ctrl-C listener failed: {e}");
            std::future::pending::<()>().await;
        }
        "Ctrl-C"
    }
}
