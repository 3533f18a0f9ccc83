//! Data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod sheet;

pub use sheet::*;
