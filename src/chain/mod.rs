//! Chain header index access.
//!
//! Authority queries name blocks by number, tag or hash. The header index that
//! answers those lookups belongs to the node; [`ChainHeaderReader`] is the view
//! of it this crate needs, and [`resolve_header`] maps a block selector onto it.

use crate::consensus::bor::BorError;
use alloy_eips::{BlockId, BlockNumberOrTag};
use alloy_primitives::B256;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Minimal header data needed to locate a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderData {
    pub number: u64,
    pub hash: B256,
}

/// Chain header reader trait for accessing blockchain headers.
pub trait ChainHeaderReader: Send + Sync {
    /// Get the current head header.
    fn current_header(&self) -> Option<HeaderData>;

    /// Get header by number on the canonical chain.
    fn header_by_number(&self, number: u64) -> Option<HeaderData>;

    /// Get header by hash.
    fn header_by_hash(&self, hash: B256) -> Option<HeaderData>;

    /// Get the header of the block being built, if any.
    fn pending_header(&self) -> Option<HeaderData>;

    /// Get the latest finalized header.
    fn finalized_header(&self) -> Option<HeaderData> {
        None
    }

    /// Get the latest safe header.
    fn safe_header(&self) -> Option<HeaderData> {
        None
    }
}

/// Resolve a block selector to a header.
///
/// `None` and `latest` select the current head. `pending` resolves to the pending
/// block when one exists. A selector that resolves to nothing fails with
/// [`BorError::UnknownBlock`] carrying the selector.
pub fn resolve_header<C>(
    chain: &C,
    number: Option<BlockNumberOrTag>,
) -> Result<HeaderData, BorError>
where
    C: ChainHeaderReader + ?Sized,
{
    let number = number.unwrap_or(BlockNumberOrTag::Latest);
    let header = match number {
        BlockNumberOrTag::Latest => chain.current_header(),
        BlockNumberOrTag::Pending => chain.pending_header(),
        BlockNumberOrTag::Earliest => chain.header_by_number(0),
        BlockNumberOrTag::Finalized => chain.finalized_header(),
        BlockNumberOrTag::Safe => chain.safe_header(),
        BlockNumberOrTag::Number(n) => chain.header_by_number(n),
    };
    header.ok_or(BorError::UnknownBlock { block: BlockId::Number(number) })
}

/// Resolve a block hash to a header.
pub fn resolve_header_by_hash<C>(chain: &C, hash: B256) -> Result<HeaderData, BorError>
where
    C: ChainHeaderReader + ?Sized,
{
    chain.header_by_hash(hash).ok_or_else(|| BorError::unknown_hash(hash))
}

/// In-memory header index for testing.
///
/// The highest inserted header is the current head.
#[derive(Debug, Default)]
pub struct MemoryChain {
    headers: RwLock<BTreeMap<u64, HeaderData>>,
    pending: RwLock<Option<HeaderData>>,
}

impl MemoryChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a canonical header, replacing any header at the same height.
    pub fn insert(&self, header: HeaderData) {
        self.headers.write().insert(header.number, header);
    }

    /// Set or clear the pending header.
    pub fn set_pending(&self, header: Option<HeaderData>) {
        *self.pending.write() = header;
    }
}

impl ChainHeaderReader for MemoryChain {
    fn current_header(&self) -> Option<HeaderData> {
        self.headers.read().values().next_back().copied()
    }

    fn header_by_number(&self, number: u64) -> Option<HeaderData> {
        self.headers.read().get(&number).copied()
    }

    fn header_by_hash(&self, hash: B256) -> Option<HeaderData> {
        self.headers.read().values().find(|h| h.hash == hash).copied()
    }

    fn pending_header(&self) -> Option<HeaderData> {
        *self.pending.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(number: u64) -> HeaderData {
        HeaderData { number, hash: B256::with_last_byte(number as u8 + 1) }
    }

    fn chain() -> MemoryChain {
        let chain = MemoryChain::new();
        for n in 0..3 {
            chain.insert(header(n));
        }
        chain
    }

    #[test]
    fn test_latest_is_default() {
        let chain = chain();
        assert_eq!(resolve_header(&chain, None).unwrap(), header(2));
        assert_eq!(resolve_header(&chain, Some(BlockNumberOrTag::Latest)).unwrap(), header(2));
    }

    #[test]
    fn test_number_and_earliest() {
        let chain = chain();
        assert_eq!(resolve_header(&chain, Some(BlockNumberOrTag::Number(1))).unwrap(), header(1));
        assert_eq!(resolve_header(&chain, Some(BlockNumberOrTag::Earliest)).unwrap(), header(0));
    }

    #[test]
    fn test_missing_pending_is_unknown_block() {
        let chain = chain();
        let err = resolve_header(&chain, Some(BlockNumberOrTag::Pending)).unwrap_err();
        let pending = BlockId::Number(BlockNumberOrTag::Pending);
        assert_eq!(err, BorError::UnknownBlock { block: pending });

        chain.set_pending(Some(header(3)));
        assert_eq!(resolve_header(&chain, Some(BlockNumberOrTag::Pending)).unwrap(), header(3));
    }

    #[test]
    fn test_unknown_number_and_tags() {
        let chain = chain();
        assert!(matches!(
            resolve_header(&chain, Some(BlockNumberOrTag::Number(99))),
            Err(BorError::UnknownBlock { .. })
        ));
        assert!(resolve_header(&chain, Some(BlockNumberOrTag::Finalized)).is_err());
        assert!(resolve_header(&MemoryChain::new(), None).is_err());
    }

    #[test]
    fn test_by_hash() {
        let chain = chain();
        assert_eq!(resolve_header_by_hash(&chain, header(1).hash).unwrap(), header(1));
        assert_eq!(
            resolve_header_by_hash(&chain, B256::repeat_byte(0xff)).unwrap_err(),
            BorError::unknown_hash(B256::repeat_byte(0xff))
        );
    }
}
