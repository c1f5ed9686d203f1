use crate::billing::InvoiceLog;
use crate::config::AppConfig;
use crate::menu::Menu;
use crate::session::{OrderSession, SessionClient, SessionError};
use tracing::{error, info};

/// Size of the request queue in front of the session.
const SESSION_BUFFER: usize = 32;

/// The running application session.
///
/// `RestaurantSystem` is responsible for:
/// - **Startup**: loading the house menu and opening the invoice log
/// - **Ownership**: spawning the [`OrderSession`] that holds the one order of the run
/// - **Teardown**: waiting for the session to finish once every client is gone
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(&config)?;
///
/// let view = system.client.add(Category::Dessert, 0).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// Client for talking to the session
    pub client: SessionClient,

    /// Task handle of the session (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl RestaurantSystem {
    /// Builds the house menu and starts the session task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &AppConfig) -> Result<Self, SessionError> {
        let menu = Menu::house()?;
        let log = InvoiceLog::new(config.invoice_log.clone());

        let (session, client) = OrderSession::new(SESSION_BUFFER, menu, log);
        let handle = tokio::spawn(session.run());

        Ok(Self { client, handle })
    }

    /// Gracefully shuts down the session.
    ///
    /// Any clones of [`RestaurantSystem::client`] handed out must already be
    /// dropped, otherwise the session keeps waiting for requests.
    pub async fn shutdown(self) -> Result<(), SessionError> {
        info!("Shutting down session...");

        // Dropping the last sender ends the session loop.
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Session task failed: {:?}", e);
            return Err(SessionError::TaskFailed(e.to_string()));
        }

        info!("Session shutdown complete.");
        Ok(())
    }
}
