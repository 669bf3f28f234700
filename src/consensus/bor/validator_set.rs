//! Validator set with cached proposer and total voting power.

use super::{compute_total_voting_power, BorError, Validator};
use alloy_primitives::Address;

/// Ordered validator set as persisted in a snapshot.
///
/// The order of `validators` is significant: it is the order signers are
/// reported in and the scan order for proposer selection. The set is read-only
/// once loaded; only the two derived caches are ever written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorSet {
    validators: Vec<Validator>,
    proposer: Option<Validator>,
    total_voting_power: Option<i64>,
}

impl ValidatorSet {
    /// Create a validator set, optionally with an already known proposer.
    pub fn new(validators: Vec<Validator>, proposer: Option<Validator>) -> Self {
        Self { validators, proposer, total_voting_power: None }
    }

    /// Validators in persisted order.
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Consume the set, returning the validators in persisted order.
    pub fn into_validators(self) -> Vec<Validator> {
        self.validators
    }

    /// Number of validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check if the set has no validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Cached proposer, without resolving one.
    pub fn proposer(&self) -> Option<&Validator> {
        self.proposer.as_ref()
    }

    /// Cached total voting power.
    ///
    /// `None` until [`Self::update_total_voting_power`] has succeeded.
    pub fn total_voting_power(&self) -> Option<i64> {
        self.total_voting_power
    }

    /// Force recalculation of the set's total voting power against `ceiling`.
    pub fn update_total_voting_power(&mut self, ceiling: i64) -> Result<i64, BorError> {
        let total = compute_total_voting_power(&self.validators, ceiling)?;
        self.total_voting_power = Some(total);
        Ok(total)
    }

    /// Get the current proposer, resolving and caching it on first use.
    ///
    /// Returns `None` for an empty set. The returned value is a copy; the cache
    /// cannot be modified through it.
    pub fn get_proposer(&mut self) -> Option<Validator> {
        if self.validators.is_empty() {
            return None;
        }
        if self.proposer.is_none() {
            self.proposer = self.find_proposer().cloned();
        }
        self.proposer.clone()
    }

    /// Scan the set for the best proposer candidate without touching the cache.
    pub fn find_proposer(&self) -> Option<&Validator> {
        let mut iter = self.validators.iter();
        let first = iter.next()?;
        Some(iter.fold(first, |best, val| best.better(val)))
    }

    /// Signer addresses in persisted order.
    pub fn signers(&self) -> Vec<Address> {
        self.validators.iter().map(|val| val.address).collect()
    }

    /// Find a validator and its index by address.
    pub fn get_by_address(&self, address: &Address) -> Option<(usize, &Validator)> {
        self.validators.iter().enumerate().find(|(_, val)| val.address == *address)
    }

    /// Check if an address belongs to the set.
    pub fn has_address(&self, address: &Address) -> bool {
        self.get_by_address(address).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::bor::MAX_TOTAL_VOTING_POWER;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    fn val(byte: u8, power: i64) -> Validator {
        Validator::new(byte as u64, Address::repeat_byte(byte), power)
    }

    #[test]
    fn test_empty_set() {
        let mut set = ValidatorSet::default();
        assert_eq!(set.get_proposer(), None);
        assert_eq!(set.update_total_voting_power(MAX_TOTAL_VOTING_POWER), Ok(0));
        assert_eq!(set.total_voting_power(), Some(0));
        assert!(set.signers().is_empty());
    }

    #[test]
    fn test_empty_set_ignores_cached_proposer() {
        let mut set = ValidatorSet::new(Vec::new(), Some(val(0x01, 10)));
        assert_eq!(set.get_proposer(), None);
    }

    #[test]
    fn test_total_voting_power_requires_update() {
        let mut set = ValidatorSet::new(vec![val(0x01, 100), val(0x02, 50)], None);
        assert_eq!(set.total_voting_power(), None);
        assert_eq!(set.update_total_voting_power(MAX_TOTAL_VOTING_POWER), Ok(150));
        assert_eq!(set.total_voting_power(), Some(150));
    }

    #[test]
    fn test_failed_update_leaves_cache_empty() {
        let mut set = ValidatorSet::new(vec![val(0x01, i64::MAX), val(0x02, 1000)], None);
        assert!(set.update_total_voting_power(MAX_TOTAL_VOTING_POWER).is_err());
        assert_eq!(set.total_voting_power(), None);
    }

    #[test]
    fn test_proposer_is_cached() {
        let mut set = ValidatorSet::new(vec![val(0x02, 100), val(0x01, 50)], None);
        let first = set.get_proposer().unwrap();
        assert_eq!(first.address, Address::repeat_byte(0x01));
        assert_eq!(set.proposer(), Some(&first));
        assert_eq!(set.get_proposer(), Some(first));
    }

    #[test]
    fn test_cached_proposer_is_not_rescanned() {
        // The persisted proposer wins even though the comparator would pick 0x01.
        let stored = val(0x02, 50);
        let vals = vec![val(0x01, 100), val(0x02, 50)];
        let mut set = ValidatorSet::new(vals, Some(stored.clone()));
        assert_eq!(set.get_proposer(), Some(stored));
    }

    #[test]
    fn test_duplicate_addresses_still_advance() {
        // A later record with the same address but higher priority replaces the running best.
        let vals = vec![
            val(0x01, 10),
            val(0x01, 90).with_proposer_priority(5),
            val(0x02, 50).with_proposer_priority(5),
        ];
        let mut set = ValidatorSet::new(vals, None);
        assert_eq!(set.get_proposer().unwrap().voting_power, 90);
    }

    #[test]
    fn test_priority_wins_over_power() {
        let vals = vec![val(0x01, 100), val(0x02, 10).with_proposer_priority(1)];
        let mut set = ValidatorSet::new(vals, None);
        assert_eq!(set.get_proposer().unwrap().address, Address::repeat_byte(0x02));
    }

    #[test]
    fn test_signers_preserve_order() {
        let set = ValidatorSet::new(vec![val(0x03, 1), val(0x01, 2), val(0x02, 3)], None);
        assert_eq!(
            set.signers(),
            vec![
                Address::repeat_byte(0x03),
                Address::repeat_byte(0x01),
                Address::repeat_byte(0x02),
            ]
        );
        assert_eq!(set.get_by_address(&Address::repeat_byte(0x01)).map(|(i, _)| i), Some(1));
        assert!(!set.has_address(&Address::repeat_byte(0x04)));
    }

    fn arb_validator() -> impl Strategy<Value = Validator> {
        (any::<u8>(), -1000i64..1000, -5i64..5).prop_map(|(byte, power, priority)| {
            val(byte, power).with_proposer_priority(priority)
        })
    }

    proptest! {
        #[test]
        fn proposer_is_deterministic_and_maximal(
            vals in prop::collection::vec(arb_validator(), 1..24),
        ) {
            let mut a = ValidatorSet::new(vals.clone(), None);
            let mut b = ValidatorSet::new(vals.clone(), None);
            let proposer = a.get_proposer().unwrap();
            prop_assert_eq!(b.get_proposer(), Some(proposer.clone()));
            prop_assert_eq!(a.get_proposer(), Some(proposer.clone()));
            for other in &vals {
                prop_assert_ne!(proposer.proposer_order(other), Ordering::Less);
            }
        }
    }
}
