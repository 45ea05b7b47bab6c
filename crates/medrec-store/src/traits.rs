use crate::error::StoreResult;

/// Sorted key-value ledger store.
///
/// All implementations must satisfy these invariants:
/// - At most one value per key at any point in time.
/// - `get` on a missing key is `Ok(None)`, not an error.
/// - `put` creates or replaces; `delete` removes the key entirely (no
///   tombstone — absence after delete is indistinguishable from
///   never-created).
/// - `range_scan` traverses lexically ascending by key, start inclusive /
///   end exclusive; an empty string bound means unbounded on that side.
/// - Concurrency control, durability, and transactional atomicity are the
///   backend's responsibility; callers get whatever snapshot the backend
///   exposes at call time.
pub trait LedgerStore: Send + Sync {
    /// Read the value stored at `key`.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Create or replace the value at `key`.
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Remove `key` from the store.
    ///
    /// Deleting an absent key is a no-op at this layer; existence
    /// preconditions are enforced by the repository above.
    fn delete(&self, key: &str) -> StoreResult<()>;

    /// All entries with `start <= key < end`, ascending by key.
    ///
    /// Pass `""` for either bound to leave that side unbounded; both empty
    /// means the entire keyspace.
    fn range_scan(&self, start: &str, end: &str) -> StoreResult<Vec<(String, Vec<u8>)>>;

    /// All entries whose key starts with `prefix`, ascending by key.
    ///
    /// Default implementation scans from `prefix` and stops at the first
    /// non-matching key. Backends may override with a native prefix scan.
    fn scan_prefix(&self, prefix: &str) -> StoreResult<Vec<(String, Vec<u8>)>> {
        let entries = self.range_scan(prefix, "")?;
        Ok(entries
            .into_iter()
            .take_while(|(key, _)| key.starts_with(prefix))
            .collect())
    }
}
