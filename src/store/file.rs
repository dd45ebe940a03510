use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

use super::KeyValueStore;

/// Key-value store persisted as a single JSON object on disk.
///
/// The file is read when opened. Every write reloads the file, replaces one
/// key and rewrites the whole object through a temporary sibling and a
/// rename, so keys written by other handles survive and a reader never sees
/// a half-written store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store; a file
    /// that does not hold a JSON object of strings is treated the same way.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = read_entries(&path)?;
        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let encoded = serde_json::to_string_pretty(entries)
            .map_err(|source| StoreError::Encode { source })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|err| self.write_error(err))?;
        }

        let tmp_path = temp_sibling(&self.path);
        std::fs::write(&tmp_path, encoded).map_err(|err| self.write_error(err))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|err| self.write_error(err))
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = read_entries(&self.path)?;
        entries.insert(key.to_owned(), value);
        self.persist(&entries)?;
        self.entries = entries;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(parse_entries(path, &content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(err) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

fn parse_entries(path: &Path, content: &str) -> BTreeMap<String, String> {
    if content.trim().is_empty() {
        return BTreeMap::new();
    }
    serde_json::from_str(content).unwrap_or_else(|err| {
        tracing::warn!(
            "Ignoring unreadable checkpoint store '{}': {}",
            path.display(),
            err
        );
        BTreeMap::new()
    })
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
