//! Authority query surface.
//!
//! [`BorApi`] is what a transport layer binds its `bor_*` methods to. It owns no
//! state beyond handles to the database, the header index and the chain config.

mod bor;

pub use bor::BorApi;
