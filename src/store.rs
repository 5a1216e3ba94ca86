use std::fmt::Debug;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

// =============================================================================
// 1. THE ABSTRACTION (Record trait)
// =============================================================================

/// Trait any persisted entity must implement to be managed by a
/// [`CollectionActor`].
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Get the ID of the record.
    fn id(&self) -> &str;

    /// Construct the full record from a freshly minted ID and the payload.
    fn from_create(id: String, payload: Self::CreatePayload) -> Self;

    /// Apply a patch in place. Patches carry only fields that may legally
    /// change after creation.
    fn apply(&mut self, patch: Self::Patch);
}

/// Failures raised by the collection store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Failed to persist collection: {0}")]
    Persist(String),
    #[error("Store actor closed")]
    Closed,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

#[derive(Debug)]
pub enum StoreRequest<T: Record> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Find {
        id: String,
        respond_to: Response<Option<T>>,
    },
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Replace {
        id: String,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Remove {
        id: String,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Exclusive owner of one JSON-backed collection.
///
/// The actor holds the collection in memory and rewrites the whole file after
/// every mutation. Because a single task owns the file, writes to a
/// collection are serialized; there is no cross-collection transaction.
pub struct CollectionActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    path: PathBuf,
    records: Vec<T>,
    id_prefix: &'static str,
    next_id: u64,
}

impl<T: Record> CollectionActor<T> {
    /// Loads the collection at `path` (an absent file bootstraps an empty
    /// collection) and returns the actor together with a cloneable client.
    ///
    /// The ID counter is seeded past the largest `"{prefix}_{n}"` already in
    /// the file so IDs keep increasing across restarts.
    pub fn open(
        path: impl Into<PathBuf>,
        capacity: usize,
        id_prefix: &'static str,
    ) -> Result<(Self, StoreClient<T>), StoreError> {
        let path = path.into();
        let records: Vec<T> = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Persist(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::Persist(format!("{}: {e}", path.display()))),
        };
        let next_id = records
            .iter()
            .filter_map(|r| r.id().strip_prefix(id_prefix)?.strip_prefix('_')?.parse::<u64>().ok())
            .max()
            .map_or(1, |n| n + 1);
        info!(collection = id_prefix, loaded = records.len(), "Collection loaded");

        let (sender, receiver) = mpsc::channel(capacity);
        let actor = Self {
            receiver,
            path,
            records,
            id_prefix,
            next_id,
        };
        Ok((actor, StoreClient::new(sender)))
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.records.clone()));
                }
                StoreRequest::Find { id, respond_to } => {
                    let item = self.records.iter().find(|r| r.id() == id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.create(payload).await);
                }
                StoreRequest::Replace { id, patch, respond_to } => {
                    let _ = respond_to.send(self.replace(&id, patch).await);
                }
                StoreRequest::Remove { id, respond_to } => {
                    let _ = respond_to.send(self.remove(&id).await);
                }
            }
        }
        debug!(collection = self.id_prefix, "Collection actor stopped");
    }

    fn mint_id(&mut self) -> String {
        let id = format!("{}_{}", self.id_prefix, self.next_id);
        self.next_id += 1;
        id
    }

    async fn create(&mut self, payload: T::CreatePayload) -> Result<T, StoreError> {
        let record = T::from_create(self.mint_id(), payload);
        self.records.push(record.clone());
        match self.persist().await {
            Ok(()) => Ok(record),
            Err(e) => {
                self.records.pop();
                Err(e)
            }
        }
    }

    async fn replace(&mut self, id: &str, patch: T::Patch) -> Result<T, StoreError> {
        let index = self.position(id)?;
        let previous = self.records[index].clone();
        self.records[index].apply(patch);
        match self.persist().await {
            Ok(()) => Ok(self.records[index].clone()),
            Err(e) => {
                self.records[index] = previous;
                Err(e)
            }
        }
    }

    async fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);
        match self.persist().await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.records.insert(index, removed);
                Err(e)
            }
        }
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Full-collection write. The rollback in each mutating arm keeps the
    /// in-memory copy identical to what is on disk.
    async fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(&self.records)
            .map_err(|e| StoreError::Persist(e.to_string()))?;
        tokio::fs::write(&self.path, json).await.map_err(|e| {
            error!(collection = self.id_prefix, error = %e, "Collection write failed");
            StoreError::Persist(format!("{}: {e}", self.path.display()))
        })
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct StoreClient<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Record> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Closed)?
    }

    pub async fn find(&self, id: String) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Find { id, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Closed)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { payload, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Closed)?
    }

    pub async fn replace(&self, id: String, patch: T::Patch) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Replace { id, patch, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Closed)?
    }

    pub async fn remove(&self, id: String) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Remove { id, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Closed)?
    }
}

// =============================================================================
// 5. TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    // --- Test record ---

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        body: String,
    }

    #[derive(Debug, Clone)]
    struct NoteCreate {
        body: String,
    }

    #[derive(Debug, Clone)]
    struct NoteBody(String);

    impl Record for Note {
        type CreatePayload = NoteCreate;
        type Patch = NoteBody;

        fn id(&self) -> &str {
            &self.id
        }

        fn from_create(id: String, payload: NoteCreate) -> Self {
            Self { id, body: payload.body }
        }

        fn apply(&mut self, patch: NoteBody) {
            self.body = patch.0;
        }
    }

    fn spawn_store(dir: &TempDir) -> (StoreClient<Note>, tokio::task::JoinHandle<()>) {
        let (actor, client) =
            CollectionActor::<Note>::open(dir.path().join("notes.json"), 8, "note").unwrap();
        let handle = tokio::spawn(actor.run());
        (client, handle)
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let dir = TempDir::new().unwrap();
        let (client, _handle) = spawn_store(&dir);

        let first = client.create(NoteCreate { body: "a".into() }).await.unwrap();
        let second = client.create(NoteCreate { body: "b".into() }).await.unwrap();
        assert_eq!(first.id, "note_1");
        assert_eq!(second.id, "note_2");

        let found = client.find("note_2".into()).await.unwrap();
        assert_eq!(found, Some(second));
    }

    #[tokio::test]
    async fn replace_patches_only_mutable_fields() {
        let dir = TempDir::new().unwrap();
        let (client, _handle) = spawn_store(&dir);

        let note = client.create(NoteCreate { body: "draft".into() }).await.unwrap();
        let updated = client
            .replace(note.id.clone(), NoteBody("final".into()))
            .await
            .unwrap();
        assert_eq!(updated.id, note.id);
        assert_eq!(updated.body, "final");
    }

    #[tokio::test]
    async fn missing_records_fail_with_not_found() {
        let dir = TempDir::new().unwrap();
        let (client, _handle) = spawn_store(&dir);

        assert_eq!(client.find("note_9".into()).await.unwrap(), None);
        assert_eq!(
            client.replace("note_9".into(), NoteBody("x".into())).await,
            Err(StoreError::NotFound("note_9".into()))
        );
        assert_eq!(
            client.remove("note_9".into()).await,
            Err(StoreError::NotFound("note_9".into()))
        );
    }

    #[tokio::test]
    async fn remove_deletes_the_record() {
        let dir = TempDir::new().unwrap();
        let (client, _handle) = spawn_store(&dir);

        let note = client.create(NoteCreate { body: "gone".into() }).await.unwrap();
        client.remove(note.id.clone()).await.unwrap();
        assert_eq!(client.find(note.id).await.unwrap(), None);
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn collection_survives_reopen_and_ids_keep_increasing() {
        let dir = TempDir::new().unwrap();

        let (client, handle) = spawn_store(&dir);
        client.create(NoteCreate { body: "a".into() }).await.unwrap();
        client.create(NoteCreate { body: "b".into() }).await.unwrap();
        drop(client);
        handle.await.unwrap();

        let (client, _handle) = spawn_store(&dir);
        let notes = client.list().await.unwrap();
        assert_eq!(notes.len(), 2);

        let third = client.create(NoteCreate { body: "c".into() }).await.unwrap();
        assert_eq!(third.id, "note_3");
    }
}
