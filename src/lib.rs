//! Bor authority engine.
//!
//! Answers "who was authorized to produce the block at point X" for a bor
//! proof-of-authority chain by loading persisted validator-set snapshots.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                            BorApi                                   │
//! │   get_snapshot / get_signers / get_current_proposer / ...           │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  select header ──────► load snapshot ──────► derive view            │
//! │        │                     │                     │                │
//! │        ▼                     ▼                     ▼                │
//! │ ┌──────────────┐    ┌─────────────────┐    ┌───────────────┐        │
//! │ │ChainHeader-  │    │ SnapshotStore   │    │ ValidatorSet  │        │
//! │ │Reader        │    │ "bor-" ++ hash  │    │ proposer,     │        │
//! │ └──────────────┘    └────────┬────────┘    │ total power   │        │
//! │                              │             └───────────────┘        │
//! │                     ┌────────┴────────┐                             │
//! │                     │ RoDatabase/RoTx │                             │
//! │                     │ BorConfig       │                             │
//! │                     └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`consensus::bor`]: snapshots, validator sets and voting power aggregation
//! - [`chain`]: header index access and block selector resolution
//! - [`storage`]: read-only key-value store traits
//! - [`api`]: the authority queries

#![warn(unused_crate_dependencies)]
// Dependencies used by the binary
use eyre as _;

pub mod api;
pub mod chain;
pub mod consensus;
pub mod storage;

pub use api::BorApi;
pub use chain::{ChainHeaderReader, HeaderData, MemoryChain};
pub use consensus::bor::{
    BorConfig, BorError, ChainConfigProvider, Snapshot, SnapshotStore, Validator, ValidatorSet,
    BOR_SNAPSHOT_PREFIX, MAX_TOTAL_VOTING_POWER, SNAPSHOT_TABLE,
};
pub use storage::{MemoryDatabase, RoDatabase, RoTx, StoreError};
