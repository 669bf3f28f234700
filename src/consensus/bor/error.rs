//! Bor authority errors.

use super::Validator;
use crate::storage::StoreError;
use alloy_eips::BlockId;
use alloy_primitives::B256;
use thiserror::Error;

/// Errors returned while resolving snapshots and answering authority queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BorError {
    /// The block selector does not resolve to a known header.
    #[error("unknown block: {block}")]
    UnknownBlock {
        /// The selector that failed to resolve.
        block: BlockId,
    },

    /// No snapshot is persisted for the block hash.
    #[error("snapshot not found for hash {hash}")]
    SnapshotNotFound { hash: B256 },

    /// The persisted snapshot does not match the expected schema.
    #[error("failed to decode snapshot: {message}")]
    Decode { message: String },

    /// A snapshot could not be encoded.
    #[error("failed to encode snapshot: {message}")]
    Encode { message: String },

    /// The persisted snapshot was written with a schema this build does not read.
    #[error("unsupported snapshot schema version {version}")]
    UnsupportedSchemaVersion { version: u32 },

    /// The validator set's total voting power exceeds the protocol ceiling.
    #[error("total voting power exceeded: sum {sum}, {} validators", .validators.len())]
    TotalVotingPowerExceeded {
        /// Running sum at the point the ceiling was breached.
        sum: i64,
        /// The full validator list, for diagnostics.
        validators: Vec<Validator>,
    },

    /// The attached chain configuration is unusable.
    #[error("invalid bor config: {message}")]
    InvalidConfig { message: String },

    /// Error from the underlying key-value store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BorError {
    /// Shorthand for an unknown block identified by hash.
    pub fn unknown_hash(hash: B256) -> Self {
        Self::UnknownBlock { block: BlockId::from(hash) }
    }
}
