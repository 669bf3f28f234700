//! In-memory key-value store.
//!
//! This provides a simple in-memory implementation of [`RoDatabase`]
//! for testing and development purposes.

use super::traits::{RoDatabase, RoTx, StoreError};
use parking_lot::{Mutex, RwLock, RwLockReadGuard};
use std::{
    collections::{BTreeMap, HashMap},
    sync::atomic::{AtomicUsize, Ordering},
};

type Tables = HashMap<String, BTreeMap<Vec<u8>, Vec<u8>>>;

/// In-memory key-value store.
///
/// A read transaction holds a shared lock on all tables for its lifetime, so it
/// sees a consistent view. Writes go through [`MemoryDatabase::put`] and wait
/// for open transactions to finish.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    tables: RwLock<Tables>,
    /// Number of read transactions currently open.
    open_txs: AtomicUsize,
    /// Error returned by the next `begin_ro` call.
    begin_failure: Mutex<Option<StoreError>>,
}

impl MemoryDatabase {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key` in `table`.
    pub fn put(&self, table: &str, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.tables
            .write()
            .entry(table.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Remove `key` from `table`.
    pub fn delete(&self, table: &str, key: &[u8]) -> Option<Vec<u8>> {
        self.tables.write().get_mut(table).and_then(|t| t.remove(key))
    }

    /// Number of read transactions currently open.
    pub fn open_transactions(&self) -> usize {
        self.open_txs.load(Ordering::SeqCst)
    }

    /// Make the next `begin_ro` fail with `err`.
    pub fn fail_next_begin(&self, err: StoreError) {
        *self.begin_failure.lock() = Some(err);
    }
}

impl RoDatabase for MemoryDatabase {
    type Tx<'a> = MemoryRoTx<'a>;

    fn begin_ro(&self) -> Result<Self::Tx<'_>, StoreError> {
        if let Some(err) = self.begin_failure.lock().take() {
            return Err(err);
        }
        let tables = self.tables.read();
        self.open_txs.fetch_add(1, Ordering::SeqCst);
        Ok(MemoryRoTx { tables, open_txs: &self.open_txs })
    }
}

/// Read transaction over a [`MemoryDatabase`].
#[derive(Debug)]
pub struct MemoryRoTx<'a> {
    tables: RwLockReadGuard<'a, Tables>,
    open_txs: &'a AtomicUsize,
}

impl RoTx for MemoryRoTx<'_> {
    fn get_one(&self, table: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.tables.get(table).and_then(|t| t.get(key)).cloned())
    }
}

impl Drop for MemoryRoTx<'_> {
    fn drop(&mut self) {
        self.open_txs.fetch_sub(1, Ordering::SeqCst);
    }
}
