//! # ActorEntity Trait
//!
//! The contract a resource implements to be owned by a [`ResourceActor`](crate::framework::ResourceActor).
//! Associated types pin down the id, the create/update payloads, the custom actions
//! and the error type, so a [`Sheet`](crate::model::Sheet) actor only ever accepts
//! sheet payloads.
//!
//! `on_create` and `on_delete` have no-op defaults.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A resource that can be managed by a `ResourceActor`.
///
/// Hooks are async and receive the injected `Context`, which is handed to
/// `run()` rather than `new()` so that actors can be wired after construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier, generated by the actor from a `u32` sequence.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// What an action returns.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at `run()`. `()` when there are none.
    type Context: Send + Sync;

    /// One error enum for the whole resource.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its id and payload. Called before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. An error keeps it in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
