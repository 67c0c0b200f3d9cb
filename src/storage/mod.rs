mod file;
mod memory;
mod selection_bridge;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use selection_bridge::{SelectionBridge, SELECTED_OPTIONS_SLOT};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to access the local store.")]
    Io(#[from] std::io::Error),
    #[error("The local store holds malformed data.")]
    Corrupt(#[from] serde_json::Error),
    #[error("The local store is unavailable: {0}")]
    Unavailable(String),
}

/// Durable string slots, the local equivalent of browser storage. All calls are synchronous.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key succeeds.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        (**self).delete(key)
    }
}
