//! Read-only key-value store traits.

/// Error type for key-value storage operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A read transaction could not be opened.
    #[error("failed to begin read transaction: {0}")]
    BeginTx(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(String),
}

/// A database that hands out scoped read-only transactions.
pub trait RoDatabase: Send + Sync {
    /// Read transaction type. Dropping it releases the transaction.
    type Tx<'a>: RoTx
    where
        Self: 'a;

    /// Begin a read-only transaction.
    fn begin_ro(&self) -> Result<Self::Tx<'_>, StoreError>;
}

/// Read-only access to a byte-keyed store within one transaction.
pub trait RoTx {
    /// Get the value stored under `key` in `table`.
    fn get_one(&self, table: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Check if `key` exists in `table`.
    fn has(&self, table: &str, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.get_one(table, key)?.is_some())
    }

    /// Release the transaction without committing anything.
    fn rollback(self)
    where
        Self: Sized,
    {
        drop(self)
    }
}
