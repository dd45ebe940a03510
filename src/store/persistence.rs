use crate::assist::Checkpoint;
use crate::error::StoreError;

use super::{KeyValueStore, decode_checkpoints, encode_checkpoints};

/// Key namespace shared by every persisted checkpoint record.
pub const DEFAULT_KEY_PREFIX: &str = "scroll-assist:";

/// Loads and saves checkpoint records keyed by page path.
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
    key_prefix: String,
}

impl<S: KeyValueStore> Persistence<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_prefix(store, DEFAULT_KEY_PREFIX)
    }

    #[must_use]
    pub fn with_prefix(store: S, key_prefix: impl Into<String>) -> Self {
        Self {
            store,
            key_prefix: key_prefix.into(),
        }
    }

    #[must_use]
    pub fn storage_key(&self, page_path: &str) -> String {
        format!("{}{}", self.key_prefix, page_path)
    }

    /// Reads the record for `page_path`. Missing, unreadable or malformed
    /// records all come back empty.
    #[must_use]
    pub fn load(&self, page_path: &str) -> Vec<Checkpoint> {
        let key = self.storage_key(page_path);
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::debug!(%key, "Checkpoint store unreadable: {}", err);
                return Vec::new();
            }
        };

        decode_checkpoints(&raw).unwrap_or_else(|err| {
            tracing::debug!(%key, "Discarding stored checkpoints: {}", err);
            Vec::new()
        })
    }

    /// Overwrites the record for `page_path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the record cannot be encoded or written.
    pub fn save(&mut self, page_path: &str, checkpoints: &[Checkpoint]) -> Result<(), StoreError> {
        let key = self.storage_key(page_path);
        let encoded = encode_checkpoints(checkpoints)?;
        self.store.set(&key, encoded)
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
