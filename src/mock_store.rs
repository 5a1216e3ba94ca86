//! # Mock Store
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_replace`] to assert
//! behavior.

use tokio::sync::{mpsc, oneshot};

use crate::store::{Record, StoreClient, StoreError, StoreRequest};

/// Creates a mock store client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit/integration tests, we don't want to spin up a full
/// `CollectionActor` (and a real file) if we are just testing the *client*
/// logic (e.g., `ReviewClient`).
///
/// Instead, we create a "mock client". This client sends messages to a
/// channel we control (`receiver`). We can then inspect the messages arriving
/// on that channel and assert they are correct. This allows us to simulate
/// the actor's behavior (success, failure, delays) deterministically.
pub fn create_mock_client<T: Record>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request
pub async fn expect_find<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(String, oneshot::Sender<Result<Option<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Find { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::CreatePayload, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Replace request
pub async fn expect_replace<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(String, T::Patch, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Replace { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Remove request
pub async fn expect_remove<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(String, oneshot::Sender<Result<(), StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Remove { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Order, OrderCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Order>(10);

        let create_task = tokio::spawn(async move {
            let payload = OrderCreate {
                user_id: "user_1".to_string(),
                items: Vec::new(),
                total_amount: 10.0,
                address: "addr".to_string(),
                phone: "555".to_string(),
                payment_method: "cod".to_string(),
            };
            client.create(payload).await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.user_id, "user_1");
        let order = Order::from_create("order_1".to_string(), payload);
        responder.send(Ok(order.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(order));
    }
}
