use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::LedgerStore;

/// In-memory, `BTreeMap`-based ledger store.
///
/// Intended for tests and embedding. A `BTreeMap` rather than a `HashMap`
/// because the contract requires lexically ordered range scans. All entries
/// are held behind a `RwLock`; values are cloned on read.
pub struct MemoryLedgerStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryLedgerStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries from the store.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<String> {
        self.entries
            .read()
            .expect("lock poisoned")
            .keys()
            .cloned()
            .collect()
    }
}

impl Default for MemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(e: impl std::fmt::Display) -> StoreError {
    StoreError::Backend(format!("lock poisoned: {e}"))
}

impl LedgerStore for MemoryLedgerStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let map = self.entries.read().map_err(poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut map = self.entries.write().map_err(poisoned)?;
        map.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let mut map = self.entries.write().map_err(poisoned)?;
        map.remove(key);
        Ok(())
    }

    fn range_scan(&self, start: &str, end: &str) -> StoreResult<Vec<(String, Vec<u8>)>> {
        let map = self.entries.read().map_err(poisoned)?;
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start)
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end)
        };
        Ok(map
            .range::<str, _>((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

impl std::fmt::Debug for MemoryLedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryLedgerStore")
            .field("key_count", &self.len())
            .finish()
    }
}
