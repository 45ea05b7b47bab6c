use std::marker::PhantomData;
use std::sync::Arc;

use medrec_store::LedgerStore;
use medrec_types::{codec, Asset, Patient, Record};

use crate::error::{RepoError, RepoResult};

/// Existence-gated record repository for one kind `T`.
///
/// One parameterized implementation serves all four kinds: the lifecycle
/// algorithm is identical, only the field schema differs. Operations for a
/// kind touch only that kind's key prefix, so repositories sharing a store
/// never observe each other's records.
pub struct Repository<T: Record> {
    store: Arc<dyn LedgerStore>,
    _kind: PhantomData<fn() -> T>,
}

impl<T: Record> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _kind: PhantomData,
        }
    }
}

impl<T: Record> Repository<T> {
    /// Create a repository over the given ledger store.
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }

    /// Returns `true` iff a non-empty value is stored under `id`.
    ///
    /// Absence is a valid answer, not an error.
    pub fn exists(&self, id: &str) -> RepoResult<bool> {
        let key = T::KIND.state_key(id);
        let value = self.store.get(&key)?;
        Ok(matches!(value, Some(bytes) if !bytes.is_empty()))
    }

    /// Store a new record. Fails if its identifier is already taken.
    pub fn create(&self, record: T) -> RepoResult<T> {
        if self.exists(record.id())? {
            return Err(RepoError::AlreadyExists {
                kind: T::KIND.name(),
                key: record.id().to_string(),
            });
        }
        let bytes = codec::encode(&record)?;
        self.store.put(&record.state_key(), &bytes)?;
        Ok(record)
    }

    /// Read the record stored under `id`. Fails if it does not exist.
    pub fn read(&self, id: &str) -> RepoResult<T> {
        let key = T::KIND.state_key(id);
        let bytes = match self.store.get(&key)? {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => {
                return Err(RepoError::NotFound {
                    kind: T::KIND.name(),
                    key: id.to_string(),
                })
            }
        };
        codec::decode(&bytes).map_err(|source| RepoError::CorruptRecord {
            kind: T::KIND.name(),
            key: id.to_string(),
            source,
        })
    }

    /// Remove the record stored under `id`. Fails if it does not exist.
    ///
    /// Not idempotent: a second delete of the same identifier fails.
    pub fn delete(&self, id: &str) -> RepoResult<()> {
        if !self.exists(id)? {
            return Err(RepoError::NotFound {
                kind: T::KIND.name(),
                key: id.to_string(),
            });
        }
        self.store.delete(&T::KIND.state_key(id))?;
        Ok(())
    }

    /// All records of this kind, in ascending key order.
    ///
    /// Scans only this kind's key prefix, so records of other kinds sharing
    /// the ledger are never touched.
    pub fn list_all(&self) -> RepoResult<Vec<T>> {
        let prefix = T::KIND.key_prefix();
        let entries = self.store.scan_prefix(prefix)?;
        entries
            .into_iter()
            .map(|(key, bytes)| {
                codec::decode(&bytes).map_err(|source| RepoError::CorruptRecord {
                    kind: T::KIND.name(),
                    key: key.strip_prefix(prefix).unwrap_or(&key).to_string(),
                    source,
                })
            })
            .collect()
    }
}

/// Mutation operations exist only for the Asset kind. The other kinds are
/// create/read/delete only; that asymmetry is documented behavior, not an
/// omission.
impl Repository<Asset> {
    /// Replace the entire record stored under the asset's identifier.
    ///
    /// This is a whole-record replacement, never a merge. Fails if the
    /// identifier does not exist.
    pub fn update(&self, asset: Asset) -> RepoResult<Asset> {
        if !self.exists(asset.id())? {
            return Err(RepoError::NotFound {
                kind: Asset::KIND.name(),
                key: asset.id().to_string(),
            });
        }
        let bytes = codec::encode(&asset)?;
        self.store.put(&asset.state_key(), &bytes)?;
        Ok(asset)
    }

    /// Change the owner of an asset, returning the previous owner.
    ///
    /// Read-modify-write with no locking of its own; atomicity is whatever
    /// the surrounding store transaction provides.
    pub fn transfer(&self, id: &str, new_owner: &str) -> RepoResult<String> {
        let current = self.read(id)?;
        let updated = current.with_owner(new_owner);
        let bytes = codec::encode(&updated)?;
        self.store.put(&updated.state_key(), &bytes)?;
        Ok(current.owner)
    }

    /// Create the initial set of six assets.
    ///
    /// One-shot: rerunning against a ledger that already holds any of these
    /// identifiers propagates `AlreadyExists`.
    pub fn seed(&self) -> RepoResult<()> {
        self.create(Asset::new("asset1", "blue", 5, "Tomoko", 300))?;
        self.create(Asset::new("asset2", "red", 5, "Brad", 400))?;
        self.create(Asset::new("asset3", "green", 10, "Jin Soo", 500))?;
        self.create(Asset::new("asset4", "yellow", 10, "Max", 600))?;
        self.create(Asset::new("asset5", "black", 15, "Adrian", 700))?;
        self.create(Asset::new("asset6", "white", 15, "Michel", 700))?;
        Ok(())
    }
}

impl Repository<Patient> {
    /// Create the initial pair of patients. One-shot, like the asset seed.
    pub fn seed(&self) -> RepoResult<()> {
        self.create(Patient::new(
            "1",
            "John",
            "NG8 5BA",
            "12/12/1995",
            "07310941234",
            "",
        ))?;
        self.create(Patient::new(
            "2",
            "Jim",
            "NG8 5BA",
            "12/12/1996",
            "07123441234",
            "",
        ))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medrec_store::MemoryLedgerStore;
    use medrec_types::{Doctor, Prescription};

    fn store() -> Arc<MemoryLedgerStore> {
        Arc::new(MemoryLedgerStore::new())
    }

    fn asset_repo(store: &Arc<MemoryLedgerStore>) -> Repository<Asset> {
        Repository::new(Arc::clone(store) as Arc<dyn LedgerStore>)
    }

    fn sample_asset() -> Asset {
        Asset::new("asset1", "blue", 5, "Tomoko", 300)
    }

    // -----------------------------------------------------------------------
    // Exists / Create
    // -----------------------------------------------------------------------

    #[test]
    fn exists_is_false_before_create() {
        let repo = asset_repo(&store());
        assert!(!repo.exists("asset1").unwrap());
    }

    #[test]
    fn create_then_exists_and_read_back() {
        let repo = asset_repo(&store());
        let created = repo.create(sample_asset()).unwrap();
        assert_eq!(created, sample_asset());

        assert!(repo.exists("asset1").unwrap());
        let read = repo.read("asset1").unwrap();
        assert_eq!(read.color, "blue");
        assert_eq!(read.size, 5);
        assert_eq!(read.owner, "Tomoko");
        assert_eq!(read.appraised_value, 300);
    }

    #[test]
    fn create_existing_fails_regardless_of_fields() {
        let repo = asset_repo(&store());
        repo.create(sample_asset()).unwrap();

        let different = Asset::new("asset1", "red", 99, "Other", 1);
        let err = repo.create(different).unwrap_err();
        assert!(matches!(err, RepoError::AlreadyExists { .. }));
        assert_eq!(err.key(), Some("asset1"));

        // The stored record is untouched.
        assert_eq!(repo.read("asset1").unwrap(), sample_asset());
    }

    // -----------------------------------------------------------------------
    // Read
    // -----------------------------------------------------------------------

    #[test]
    fn read_missing_fails_not_found() {
        let repo = asset_repo(&store());
        let err = repo.read("ghost").unwrap_err();
        assert!(matches!(err, RepoError::NotFound { .. }));
        assert_eq!(err.to_string(), "Asset ghost does not exist");
    }

    #[test]
    fn read_corrupt_bytes_is_classified() {
        let store = store();
        let repo = asset_repo(&store);
        store.put("asset:bad", b"not json").unwrap();

        let err = repo.read("bad").unwrap_err();
        assert!(matches!(err, RepoError::CorruptRecord { .. }));
        assert_eq!(err.kind(), Some("Asset"));
        assert_eq!(err.key(), Some("bad"));
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[test]
    fn delete_missing_fails_not_found() {
        let repo = asset_repo(&store());
        let err = repo.delete("asset1").unwrap_err();
        assert!(matches!(err, RepoError::NotFound { .. }));
    }

    #[test]
    fn second_delete_fails() {
        let repo = asset_repo(&store());
        repo.create(sample_asset()).unwrap();

        repo.delete("asset1").unwrap();
        assert!(!repo.exists("asset1").unwrap());

        let err = repo.delete("asset1").unwrap_err();
        assert!(matches!(err, RepoError::NotFound { .. }));
    }

    #[test]
    fn key_is_reusable_after_delete() {
        let repo = asset_repo(&store());
        repo.create(sample_asset()).unwrap();
        repo.delete("asset1").unwrap();

        let recreated = Asset::new("asset1", "green", 7, "Ana", 50);
        repo.create(recreated.clone()).unwrap();
        assert_eq!(repo.read("asset1").unwrap(), recreated);
    }

    // -----------------------------------------------------------------------
    // Update / Transfer (Asset only)
    // -----------------------------------------------------------------------

    #[test]
    fn update_missing_fails_not_found() {
        let repo = asset_repo(&store());
        let err = repo.update(sample_asset()).unwrap_err();
        assert!(matches!(err, RepoError::NotFound { .. }));
    }

    #[test]
    fn update_replaces_the_whole_record() {
        let repo = asset_repo(&store());
        repo.create(sample_asset()).unwrap();

        let replacement = Asset::new("asset1", "orange", 10, "Pat", 500);
        repo.update(replacement.clone()).unwrap();
        assert_eq!(repo.read("asset1").unwrap(), replacement);
    }

    #[test]
    fn transfer_missing_fails_not_found() {
        let repo = asset_repo(&store());
        let err = repo.transfer("asset1", "Doe").unwrap_err();
        assert!(matches!(err, RepoError::NotFound { .. }));
    }

    #[test]
    fn transfer_returns_previous_owner_and_changes_only_owner() {
        let repo = asset_repo(&store());
        repo.create(sample_asset()).unwrap();

        let previous = repo.transfer("asset1", "Doe").unwrap();
        assert_eq!(previous, "Tomoko");

        let after = repo.read("asset1").unwrap();
        assert_eq!(after.owner, "Doe");
        assert_eq!(after.color, "blue");
        assert_eq!(after.size, 5);
        assert_eq!(after.appraised_value, 300);
    }

    // -----------------------------------------------------------------------
    // List
    // -----------------------------------------------------------------------

    #[test]
    fn list_all_tracks_creates_and_deletes_in_key_order() {
        let repo = asset_repo(&store());
        for id in ["asset3", "asset1", "asset2"] {
            repo.create(Asset::new(id, "grey", 1, "X", 1)).unwrap();
        }
        repo.delete("asset2").unwrap();

        let ids: Vec<_> = repo
            .list_all()
            .unwrap()
            .into_iter()
            .map(|a| a.asset_id)
            .collect();
        assert_eq!(ids, ["asset1", "asset3"]);
    }

    #[test]
    fn list_all_of_empty_ledger_is_empty() {
        let repo = asset_repo(&store());
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn list_all_ignores_other_kinds_on_a_shared_store() {
        let store = store();
        let assets = asset_repo(&store);
        let patients: Repository<Patient> =
            Repository::new(Arc::clone(&store) as Arc<dyn LedgerStore>);
        let doctors: Repository<Doctor> =
            Repository::new(Arc::clone(&store) as Arc<dyn LedgerStore>);
        let prescriptions: Repository<Prescription> =
            Repository::new(Arc::clone(&store) as Arc<dyn LedgerStore>);

        // Same identifier in every kind: four distinct ledger slots.
        assets.create(Asset::new("1", "blue", 5, "Tomoko", 300)).unwrap();
        patients
            .create(Patient::new("1", "John", "NG8 5BA", "12/12/1995", "07310941234", ""))
            .unwrap();
        doctors
            .create(Doctor::new("1", "Grace", "QMC", "R-100", "0115", "NG7 2UH"))
            .unwrap();
        prescriptions
            .create(Prescription::new("1", "1", "1", "01/02/2024", "amoxicillin"))
            .unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(assets.list_all().unwrap().len(), 1);
        assert_eq!(patients.list_all().unwrap().len(), 1);
        assert_eq!(doctors.list_all().unwrap().len(), 1);
        assert_eq!(prescriptions.list_all().unwrap().len(), 1);

        // Deleting the patient leaves the asset with the same identifier.
        patients.delete("1").unwrap();
        assert!(assets.exists("1").unwrap());
    }

    #[test]
    fn list_all_surfaces_corrupt_entries() {
        let store = store();
        let repo = asset_repo(&store);
        repo.create(sample_asset()).unwrap();
        store.put("asset:zzz", b"{broken").unwrap();

        let err = repo.list_all().unwrap_err();
        assert!(matches!(err, RepoError::CorruptRecord { .. }));
        assert_eq!(err.key(), Some("zzz"));
    }

    // -----------------------------------------------------------------------
    // Seed
    // -----------------------------------------------------------------------

    #[test]
    fn asset_seed_creates_six_in_ascending_order() {
        let repo = asset_repo(&store());
        repo.seed().unwrap();

        let assets = repo.list_all().unwrap();
        let ids: Vec<_> = assets.iter().map(|a| a.asset_id.as_str()).collect();
        assert_eq!(
            ids,
            ["asset1", "asset2", "asset3", "asset4", "asset5", "asset6"]
        );
        assert_eq!(assets[2].owner, "Jin Soo");
        assert_eq!(assets[5].appraised_value, 700);
    }

    #[test]
    fn asset_seed_is_not_idempotent() {
        let repo = asset_repo(&store());
        repo.seed().unwrap();
        let err = repo.seed().unwrap_err();
        assert!(matches!(err, RepoError::AlreadyExists { .. }));
        assert_eq!(err.key(), Some("asset1"));
    }

    #[test]
    fn patient_seed_creates_two() {
        let patients: Repository<Patient> =
            Repository::new(store() as Arc<dyn LedgerStore>);
        patients.seed().unwrap();

        let all = patients.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "John");
        assert_eq!(all[1].name, "Jim");
        assert_eq!(all[1].dob, "12/12/1996");
    }

    // -----------------------------------------------------------------------
    // Determinism across data paths
    // -----------------------------------------------------------------------

    #[test]
    fn stored_bytes_are_stable_across_rewrites_of_equal_values() {
        let store = store();
        let repo = asset_repo(&store);
        repo.create(sample_asset()).unwrap();
        let first = store.get("asset:asset1").unwrap().unwrap();

        repo.update(sample_asset()).unwrap();
        let second = store.get("asset:asset1").unwrap().unwrap();
        assert_eq!(first, second);
    }
}
