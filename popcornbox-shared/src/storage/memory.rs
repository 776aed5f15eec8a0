use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{KeyValueStore, StorageError, StorageResult};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Mode {
    #[default]
    Normal,
    Unavailable,
    FailingWrites,
}

/// In-process [`KeyValueStore`] used by tests and non-browser contexts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
    mode: Mode,
}

impl MemoryStorage {
    /// An empty, working store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that behaves like a context without any storage medium.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            mode: Mode::Unavailable,
            ..Self::default()
        }
    }

    /// A store whose reads work but whose writes and removals are rejected,
    /// like a browser that has run out of quota.
    #[must_use]
    pub fn failing_writes() -> Self {
        Self {
            mode: Mode::FailingWrites,
            ..Self::default()
        }
    }

    /// Put raw text under `key`, bypassing the failure mode.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    /// Raw text under `key`, bypassing the failure mode.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether no key is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_read(&self) -> StorageResult<()> {
        match self.mode {
            Mode::Unavailable => Err(StorageError::Unavailable),
            Mode::Normal | Mode::FailingWrites => Ok(()),
        }
    }

    fn check_write(&self, key: &str) -> StorageResult<()> {
        match self.mode {
            Mode::Normal => Ok(()),
            Mode::Unavailable => Err(StorageError::Unavailable),
            Mode::FailingWrites => Err(StorageError::backend(key, "quota exceeded")),
        }
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.check_read()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check_write(key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.check_write(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
