use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Installs SIGINT/SIGTERM handlers that cancel the run. The runner only
/// reacts between pages, so an in-flight batch always resolves first.
pub fn install_signal_handlers(cancel: CancellationToken) {
    tokio::spawn(async move {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install SIGINT handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received SIGINT (Ctrl+C), stopping after the current page");
            }
            _ = terminate => {
                info!("Received SIGTERM, stopping after the current page");
            }
        }

        cancel.cancel();
    });
}

/// Exit codes for the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Done = 0,
    Failed = 1,
    Interrupted = 130, // standard exit code for SIGINT
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
