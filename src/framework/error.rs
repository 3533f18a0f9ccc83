//! Errors raised by the actor plumbing itself, as opposed to entity logic.

use thiserror::Error;

/// Why a request to a `ResourceActor` did not produce a value.
///
/// Typed client wrappers turn this into their own error through
/// `From<FrameworkError>`; see [`ActorClient`](super::ActorClient).
#[derive(Debug, Error)]
pub enum FrameworkError {
    /// The actor's mailbox is closed; the request was never delivered.
    #[error("Actor is not running")]
    ActorClosed,

    /// The actor took the request but stopped before replying.
    #[error("Actor stopped before replying")]
    ActorDropped,

    /// No resource is stored under this id.
    #[error("No resource with id {0}")]
    NotFound(String),

    /// A lifecycle hook or action of the entity failed. The entity's own error
    /// is kept intact so clients can downcast it.
    #[error(transparent)]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}
