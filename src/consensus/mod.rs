//! Consensus engines.
//!
//! Only the bor proof-of-authority snapshot reader lives here; see [`bor`].

pub mod bor;
