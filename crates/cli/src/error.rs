use connectors::error::ConnectError;
use engine_core::error::SyncError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the env file: {0}")]
    EnvFileRead(#[from] std::io::Error),

    #[error("Invalid env file: {0}")]
    EnvFileParse(String),

    #[error("No connection string provided: pass --uri or set MONGO_URL")]
    MissingConnectionString,

    #[error("Connection failed: {0}")]
    Connect(#[from] ConnectError),

    #[error("Sync failed: {0}")]
    Sync(#[from] SyncError),

    #[error("Failed to serialize the report to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
