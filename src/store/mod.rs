//! Checkpoint persistence over a local key-value store.
mod codec;
mod file;
mod memory;
mod persistence;


use crate::error::StoreError;

pub use codec::{decode_checkpoints, encode_checkpoints};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persistence::{DEFAULT_KEY_PREFIX, Persistence};

/// String key-value storage with whole-value, single-key writes.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}
