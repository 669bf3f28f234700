//! Validator records.

use alloy_primitives::Address;
use std::cmp::Ordering;

/// A validator authorized to sign blocks, with its voting weight.
///
/// Values are read from persisted snapshots and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Validator {
    /// Validator id on the staking contract.
    pub id: u64,
    /// Signer address.
    pub address: Address,
    /// Voting power. Untrusted input.
    pub voting_power: i64,
    /// Accumulated proposer priority.
    pub proposer_priority: i64,
}

impl Validator {
    /// Create a validator with zero proposer priority.
    pub fn new(id: u64, address: Address, voting_power: i64) -> Self {
        Self { id, address, voting_power, proposer_priority: 0 }
    }

    /// Set the proposer priority.
    pub fn with_proposer_priority(mut self, proposer_priority: i64) -> Self {
        self.proposer_priority = proposer_priority;
        self
    }

    /// Total order used for proposer selection.
    ///
    /// `Greater` means `self` is the better proposer candidate: higher proposer
    /// priority first, then the lower address. Voting power does not take part;
    /// it only feeds the priority.
    pub fn proposer_order(&self, other: &Validator) -> Ordering {
        self.proposer_priority
            .cmp(&other.proposer_priority)
            .then_with(|| other.address.cmp(&self.address))
    }

    /// Return the better proposer candidate of `self` and `other`.
    ///
    /// On a full tie (same address and priority) `self` is kept.
    pub fn better<'a>(&'a self, other: &'a Validator) -> &'a Validator {
        match self.proposer_order(other) {
            Ordering::Less => other,
            Ordering::Equal | Ordering::Greater => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_priority_wins() {
        let a = Validator::new(1, Address::repeat_byte(0x01), 10).with_proposer_priority(5);
        let b = Validator::new(2, Address::repeat_byte(0x02), 100).with_proposer_priority(6);
        assert_eq!(a.better(&b), &b);
        assert_eq!(b.better(&a), &b);
    }

    #[test]
    fn test_lower_address_breaks_priority_tie() {
        // Power is ignored: the lower address wins despite having less of it.
        let a = Validator::new(1, Address::repeat_byte(0x01), 10);
        let b = Validator::new(2, Address::repeat_byte(0x02), 100);
        assert_eq!(a.better(&b), &a);
        assert_eq!(b.better(&a), &a);
    }

    #[test]
    fn test_identical_keeps_running_best() {
        let a = Validator::new(1, Address::repeat_byte(0x01), 10);
        let dup = Validator::new(7, Address::repeat_byte(0x01), 99);
        assert_eq!(a.better(&dup).id, 1);
        assert_eq!(dup.better(&a).id, 7);
    }
}
