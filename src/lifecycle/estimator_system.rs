use super::SystemConfig;
use crate::clients::SheetClient;
use tracing::{error, info};

/// Runtime orchestrator for the mortar estimator.
///
/// Starts the Sheet actor with the configured mailbox and room limit, hands out
/// its client, and stops it again on [`shutdown`](Self::shutdown).
///
/// # Example
///
/// ```rust
/// use mortar_calc::lifecycle::EstimatorSystem;
/// use mortar_calc::model::SheetCreate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = EstimatorSystem::new();
///     let id = system
///         .sheet_client
///         .create_sheet(SheetCreate::default())
///         .await
///         .map_err(|e| e.to_string())?;
///     assert_eq!(id.to_string(), "sheet_1");
///     system.shutdown().await
/// }
/// ```
pub struct EstimatorSystem {
    /// Client for interacting with the Sheet actor
    pub sheet_client: SheetClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for EstimatorSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimatorSystem {
    /// Starts the system with [`SystemConfig::default`]. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        info!(?config, "Starting estimator system");
        let (sheet_actor, sheet_client) = crate::sheet_actor::new(config.mailbox_capacity);
        let sheet_handle = tokio::spawn(sheet_actor.run(config.sheet_context()));

        Self {
            sheet_client,
            handles: vec![sheet_handle],
        }
    }

    /// Drops the client so the actor's channel closes, then waits for the actor task.
    ///
    /// Clones of `sheet_client` held elsewhere keep the actor alive; drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.sheet_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
