//! # Resource Actor
//!
//! The server half of the framework. A `ResourceActor<T>` owns every `T` it has
//! created and processes requests one at a time in its own task, so the store
//! needs no locking.

use super::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns a store of entities and serves requests from its `ResourceClient`s.
///
/// # Usage
///
/// 1. `ResourceActor::new(capacity)` returns the actor and a client.
/// 2. `tokio::spawn(actor.run(context))` starts the loop with its dependencies.
/// 3. Clone the client freely; the loop ends when every client is dropped.
///
/// ```rust
/// use mortar_calc::framework::ResourceActor;
/// use mortar_calc::model::{Sheet, SheetCreate};
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Sheet>::new(8);
///     tokio::spawn(actor.run(Default::default()));
///
///     let id = client.create(SheetCreate::default()).await.unwrap();
///     assert!(client.get(id).await.unwrap().is_some());
/// }
/// ```
///
/// Ids come from an internal `u32` counter starting at 1 and are never reused.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its first client.
    ///
    /// `buffer_size` is the mailbox capacity; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until all clients are dropped.
    ///
    /// `context` is lent to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Sheet" rather than "mortar_calc::model::sheet::Sheet"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    self.create(entity_type, params, &context, respond_to).await;
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        not_found(entity_type, id, respond_to);
                        continue;
                    };
                    let result = match item.on_update(update, &context).await {
                        Ok(()) => {
                            info!(entity_type, %id, "Updated");
                            Ok(item.clone())
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            Err(FrameworkError::Entity(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        not_found(entity_type, id, respond_to);
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::Entity(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        not_found(entity_type, id, respond_to);
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::Entity(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        entity_type: &str,
        params: T::Create,
        context: &T::Context,
        respond_to: Response<T::Id>,
    ) {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = match T::from_create_params(id.clone(), params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                let _ = respond_to.send(Err(FrameworkError::Entity(Box::new(e))));
                return;
            }
        };
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, error = %e, "on_create failed");
            let _ = respond_to.send(Err(FrameworkError::Entity(Box::new(e))));
            return;
        }

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        let _ = respond_to.send(Ok(id));
    }
}

fn not_found<Id: std::fmt::Display, R>(entity_type: &str, id: Id, respond_to: Response<R>) {
    warn!(entity_type, %id, "Not found");
    let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{RoomField, RoomInput};
    use crate::model::{Sheet, SheetCreate, SheetId, SheetUpdate};
    use crate::sheet_actor::{SheetAction, SheetActionResult, SheetContext};

    fn context() -> SheetContext {
        SheetContext { max_rooms: 10 }
    }

    #[tokio::test]
    async fn test_sheet_full_lifecycle() {
        let (actor, client) = ResourceActor::<Sheet>::new(10);
        let handle = tokio::spawn(actor.run(context()));

        // 1. Create
        let id = client
            .create(SheetCreate {
                cement_ratio: "1".into(),
                sand_ratio: "4".into(),
                rooms: vec![RoomInput::new("Bed", 5, 4, 3, 0.15)],
            })
            .await
            .unwrap();
        assert_eq!(id, SheetId(1));

        // 2. Action
        let outcome = client
            .perform_action(id.clone(), SheetAction::Calculate)
            .await
            .unwrap();
        assert!(matches!(outcome, SheetActionResult::Computed(_)));

        let sheet = client.get(id.clone()).await.unwrap().unwrap();
        assert_eq!(sheet.results.len(), 1);

        // 3. Update
        let updated = client
            .update(
                id.clone(),
                SheetUpdate {
                    cement_ratio: None,
                    sand_ratio: Some("6".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.sand_ratio, "6");
        assert_eq!(updated.cement_ratio, "1");

        // 4. Delete
        client.delete(id.clone()).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_sheet_is_not_found() {
        let (actor, client) = ResourceActor::<Sheet>::new(10);
        tokio::spawn(actor.run(context()));

        let err = client
            .perform_action(
                SheetId(42),
                SheetAction::EditRoom {
                    index: 0,
                    field: RoomField::Name,
                    value: "Hall".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "sheet_42"));

        let err = client.delete(SheetId(42)).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_action_error_is_wrapped() {
        let (actor, client) = ResourceActor::<Sheet>::new(10);
        tokio::spawn(actor.run(context()));

        let id = client.create(SheetCreate::default()).await.unwrap();
        let err = client
            .perform_action(id, SheetAction::SetRoomCount("11".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Entity(_)));
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let (actor, client) = ResourceActor::<Sheet>::new(10);
        tokio::spawn(actor.run(context()));

        let first = client.create(SheetCreate::default()).await.unwrap();
        let second = client.create(SheetCreate::default()).await.unwrap();
        assert_eq!(first, SheetId(1));
        assert_eq!(second, SheetId(2));
    }
}
