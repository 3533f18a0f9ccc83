//! # ActorClient Trait
//!
//! Typed client wrappers such as [`SheetClient`](crate::clients::SheetClient)
//! get `get` and `delete` by exposing their inner [`ResourceClient`].

use super::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Shared reads and removal for a wrapper over `ResourceClient<T>`.
///
/// Failures come back as the wrapper's own error type, converted with its
/// `From<FrameworkError>` impl.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    type Error: From<FrameworkError> + Send;

    fn inner(&self) -> &ResourceClient<T>;

    /// Snapshot of the resource, or `None` if nothing is stored under `id`.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Fetching");
        Ok(self.inner().get(id).await?)
    }

    /// Removes the resource. Fails with the wrapper's not-found error for unknown ids.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Deleting");
        Ok(self.inner().delete(id).await?)
    }
}
