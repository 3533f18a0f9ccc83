//! Generic actor runtime for resources with CRUD operations and custom actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - what a resource implements to be managed
//! - [`ResourceActor`] - owns the resources, one request at a time
//! - [`ResourceClient`] - cloneable async handle to an actor
//! - [`ActorClient`] - shared `get`/`delete` for typed client wrappers
//! - [`FrameworkError`] - plumbing failures (closed actor, missing id, entity error)
//!
//! # Testing
//!
//! See [`mock`] for driving clients without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
