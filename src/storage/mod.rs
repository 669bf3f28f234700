//! Key-value storage access.
//!
//! Snapshots live in a transactional byte-keyed store owned by the node. This
//! module only describes the read side: a [`RoDatabase`] hands out scoped
//! [`RoTx`] read transactions, each released when dropped.
//!
//! # Implementations
//!
//! - [`MemoryDatabase`]: Simple in-memory store for testing
//!
//! # Usage
//!
//! ```ignore
//! use bor_authority::storage::{MemoryDatabase, RoDatabase, RoTx};
//!
//! let db = MemoryDatabase::new();
//! db.put("CliqueSeparate", key, blob);
//!
//! let tx = db.begin_ro()?;
//! let value = tx.get_one("CliqueSeparate", &key)?;
//! ```

mod memory;
mod traits;

pub use memory::{MemoryDatabase, MemoryRoTx};
pub use traits::{RoDatabase, RoTx, StoreError};
