use crate::error::ConnectError;
use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::debug;

/// Connection settings for the backing store. The timeouts live here, at
/// the session boundary, rather than inside the sync core.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub uri: String,
    pub app_name: Option<String>,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl StoreSettings {
    pub fn new(uri: impl Into<String>) -> Self {
        StoreSettings {
            uri: uri.into(),
            app_name: Some("denorm".to_string()),
            connect_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self.server_selection_timeout = timeout;
        self
    }
}

/// Builds the one client handle the job uses. Owned by the caller and passed
/// down explicitly; dropped on every exit path when the caller returns.
pub async fn connect(settings: &StoreSettings) -> Result<Client, ConnectError> {
    let mut options = ClientOptions::parse(&settings.uri)
        .await
        .map_err(ConnectError::InvalidConfig)?;
    options.app_name = settings.app_name.clone();
    options.connect_timeout = Some(settings.connect_timeout);
    options.server_selection_timeout = Some(settings.server_selection_timeout);

    let client = Client::with_options(options).map_err(ConnectError::InvalidConfig)?;
    debug!(connect_timeout_ms = settings.connect_timeout.as_millis() as u64, "client built");
    Ok(client)
}

/// Round-trips a ping to verify the deployment is reachable.
pub async fn ping(client: &Client) -> Result<(), ConnectError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(ConnectError::Unreachable)?;
    Ok(())
}
