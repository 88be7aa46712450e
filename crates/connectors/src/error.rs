use mongodb::error::{Error as DriverError, ErrorKind};
use thiserror::Error;

/// Failure to establish or verify the client connection.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The connection string did not parse or the client could not be built.
    #[error("invalid connection configuration: {0}")]
    InvalidConfig(#[source] DriverError),

    /// The deployment could not be reached.
    #[error("deployment unreachable: {0}")]
    Unreachable(#[source] DriverError),
}

/// Whether a driver error is worth retrying: connectivity-shaped failures
/// are, everything the server decided (bad query, auth, validation) is not.
pub(crate) fn is_transient(err: &DriverError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Io(_)
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. }
    )
}
