//! Loading persisted snapshots.

use super::{BorError, ChainConfigProvider, Snapshot, BOR_SNAPSHOT_PREFIX, SNAPSHOT_TABLE};
use crate::{
    chain::{resolve_header, ChainHeaderReader},
    storage::{RoDatabase, RoTx},
};
use alloy_eips::BlockNumberOrTag;
use alloy_primitives::B256;
use std::sync::Arc;
use tracing::{debug, trace};

/// Database key of the snapshot anchored at `hash`: `"bor-" ++ hash`.
pub fn snapshot_key(hash: B256) -> Vec<u8> {
    let mut key = Vec::with_capacity(BOR_SNAPSHOT_PREFIX.len() + B256::len_bytes());
    key.extend_from_slice(BOR_SNAPSHOT_PREFIX);
    key.extend_from_slice(hash.as_slice());
    key
}

/// Loads snapshots from the database and attaches the live chain config.
///
/// Nothing is cached: every call re-reads and re-decodes, and every returned
/// snapshot is an independent copy.
#[derive(Debug)]
pub struct SnapshotStore<DB, C> {
    db: Arc<DB>,
    config: Arc<C>,
}

impl<DB, C> Clone for SnapshotStore<DB, C> {
    fn clone(&self) -> Self {
        Self { db: Arc::clone(&self.db), config: Arc::clone(&self.config) }
    }
}

impl<DB, C> SnapshotStore<DB, C>
where
    DB: RoDatabase,
    C: ChainConfigProvider,
{
    /// Create a new snapshot store.
    pub fn new(db: Arc<DB>, config: Arc<C>) -> Self {
        Self { db, config }
    }

    /// Load the snapshot anchored at `hash` in its own read transaction.
    ///
    /// The transaction is released before returning, on every path.
    pub fn load_by_hash(&self, hash: B256) -> Result<Snapshot, BorError> {
        let tx = self.db.begin_ro()?;
        self.read_snapshot(&tx, hash)
    }

    /// Load a snapshot by hash, or by the canonical header at `number`.
    ///
    /// `hash` takes precedence when both are given; neither selects the head.
    pub fn load_by_number_or_hash<H>(
        &self,
        chain: &H,
        number: Option<u64>,
        hash: Option<B256>,
    ) -> Result<Snapshot, BorError>
    where
        H: ChainHeaderReader + ?Sized,
    {
        let hash = match hash {
            Some(hash) => hash,
            None => resolve_header(chain, number.map(BlockNumberOrTag::Number))?.hash,
        };
        self.load_by_hash(hash)
    }

    /// Load the snapshot anchored at `hash` within an existing transaction.
    pub fn read_snapshot<T: RoTx>(&self, tx: &T, hash: B256) -> Result<Snapshot, BorError> {
        trace!(target: "bor::store", %hash, "Loading snapshot");

        let Some(blob) = tx.get_one(SNAPSHOT_TABLE, &snapshot_key(hash))? else {
            debug!(target: "bor::store", %hash, "Snapshot not found");
            return Err(BorError::SnapshotNotFound { hash });
        };

        let config = self.config.bor_config().unwrap_or_default();
        let snap = Snapshot::from_persisted(&blob, config).inspect_err(|err| {
            debug!(target: "bor::store", %hash, %err, "Rejected persisted snapshot");
        })?;

        trace!(
            target: "bor::store",
            %hash,
            number = snap.number,
            validators = snap.validator_set().len(),
            total_voting_power = snap.total_voting_power(),
            "Loaded snapshot"
        );
        Ok(snap)
    }
}
