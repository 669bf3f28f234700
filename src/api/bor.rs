//! Bor authority queries.

use crate::{
    chain::{resolve_header, resolve_header_by_hash, ChainHeaderReader},
    consensus::bor::{BorError, ChainConfigProvider, Snapshot, SnapshotStore, Validator},
    storage::RoDatabase,
};
use alloy_eips::BlockNumberOrTag;
use alloy_primitives::{Address, B256};
use std::sync::Arc;
use tracing::debug;

/// Bor specific authority queries.
///
/// Every query is a stateless pipeline: resolve the header, load the snapshot
/// anchored at its hash, derive the view. Each load runs in its own read
/// transaction and nothing is kept between calls, so one instance can serve
/// concurrent callers.
#[derive(Debug)]
pub struct BorApi<DB, H, C> {
    store: SnapshotStore<DB, C>,
    chain: Arc<H>,
}

impl<DB, H, C> BorApi<DB, H, C>
where
    DB: RoDatabase,
    H: ChainHeaderReader,
    C: ChainConfigProvider,
{
    /// Create a new API instance.
    pub fn new(db: Arc<DB>, chain: Arc<H>, config: Arc<C>) -> Self {
        Self { store: SnapshotStore::new(db, config), chain }
    }

    /// Retrieve the snapshot at a given block, or at the head if none is given.
    pub fn get_snapshot(&self, number: Option<BlockNumberOrTag>) -> Result<Snapshot, BorError> {
        let header = resolve_header(self.chain.as_ref(), number)
            .inspect_err(|err| debug!(target: "bor::api", ?number, %err, "Block not resolved"))?;
        self.store.load_by_hash(header.hash)
    }

    /// Retrieve the snapshot at the block with the given hash.
    pub fn get_snapshot_at_hash(&self, hash: B256) -> Result<Snapshot, BorError> {
        let header = resolve_header_by_hash(self.chain.as_ref(), hash)
            .inspect_err(|err| debug!(target: "bor::api", %hash, %err, "Block not resolved"))?;
        self.store.load_by_hash(header.hash)
    }

    /// Retrieve the authorized signers at a given block, in persisted order.
    pub fn get_signers(&self, number: Option<BlockNumberOrTag>) -> Result<Vec<Address>, BorError> {
        Ok(self.get_snapshot(number)?.signers())
    }

    /// Retrieve the authorized signers at the block with the given hash.
    pub fn get_signers_at_hash(&self, hash: B256) -> Result<Vec<Address>, BorError> {
        Ok(self.get_snapshot_at_hash(hash)?.signers())
    }

    /// Get the current proposer.
    ///
    /// An empty validator set yields the zero address rather than an error.
    pub fn get_current_proposer(&self) -> Result<Address, BorError> {
        let mut snap = self.get_snapshot(None)?;
        Ok(snap.get_proposer().map(|val| val.address).unwrap_or_default())
    }

    /// Get the current validators in persisted order.
    ///
    /// Callers that want to iterate regardless of failure can use
    /// `unwrap_or_default()`, which yields an empty list.
    pub fn get_current_validators(&self) -> Result<Vec<Validator>, BorError> {
        Ok(self.get_snapshot(None)?.into_validators())
    }
}
