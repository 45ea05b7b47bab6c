use std::sync::Arc;

use medrec_repo::Repository;
use medrec_store::LedgerStore;
use medrec_types::{Asset, Doctor, Patient, Prescription};

/// The four repositories over one shared ledger store.
///
/// Construction context for the registry: handlers clone the repository they
/// need out of this bundle. The repositories are stateless, so cloning is an
/// `Arc` bump.
#[derive(Clone)]
pub struct RepositoryContext {
    pub assets: Repository<Asset>,
    pub patients: Repository<Patient>,
    pub doctors: Repository<Doctor>,
    pub prescriptions: Repository<Prescription>,
}

impl RepositoryContext {
    /// Build all four repositories over the given store.
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self {
            assets: Repository::new(Arc::clone(&store)),
            patients: Repository::new(Arc::clone(&store)),
            doctors: Repository::new(Arc::clone(&store)),
            prescriptions: Repository::new(store),
        }
    }
}
