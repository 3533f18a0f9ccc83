//! # System Lifecycle
//!
//! Starting, configuring and stopping the actor that backs the estimator.
//!
//! - [`EstimatorSystem`] spawns the Sheet actor and owns its task handle.
//! - [`SystemConfig`] sizes the mailbox and caps the room list; see
//!   [`SystemConfig::from_env`].
//! - [`setup_tracing`] installs the log subscriber.
//!
//! ## Graceful Shutdown
//!
//! Dropping every `SheetClient` closes the actor's channel; `recv()` then returns
//! `None`, the actor logs its final store size and the task ends.
//! [`EstimatorSystem::shutdown`] drops its own client and awaits that task.

pub mod config;
pub mod estimator_system;
pub mod tracing;

pub use config::*;
pub use estimator_system::*;
pub use tracing::*;
