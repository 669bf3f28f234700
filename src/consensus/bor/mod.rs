//! Bor proof-of-authority snapshot interpretation.
//!
//! Snapshots are produced elsewhere during block processing and persisted under
//! `"bor-" ++ block_hash`. This module only loads them back, recomputes the derived
//! aggregates and answers authority questions from the embedded validator set.

mod config;
mod error;
mod safe_math;
mod snapshot;
mod store;
mod validator;
mod validator_set;

pub use config::{BorConfig, ChainConfigProvider};
pub use error::BorError;
pub use safe_math::{compute_total_voting_power, safe_add, safe_add_clip};
pub use snapshot::{Snapshot, SNAPSHOT_SCHEMA_VERSION};
pub use store::{snapshot_key, SnapshotStore};
pub use validator::Validator;
pub use validator_set::ValidatorSet;

/// Upper bound on the total voting power of a validator set.
///
/// Kept well below `i64::MAX` so proposer priority arithmetic has headroom.
pub const MAX_TOTAL_VOTING_POWER: i64 = i64::MAX / 8;

/// Database key prefix for bor snapshots.
pub const BOR_SNAPSHOT_PREFIX: &[u8] = b"bor-";

/// Table holding consensus snapshots.
pub const SNAPSHOT_TABLE: &str = "CliqueSeparate";
