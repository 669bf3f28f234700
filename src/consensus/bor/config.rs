//! Bor consensus parameters.

use super::{BorError, MAX_TOTAL_VOTING_POWER};
use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// Bor consensus configuration parameters.
///
/// Mirrors the `bor` section of the chain configuration. Missing fields take
/// their defaults so partial configs deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorConfig {
    /// Number of seconds between blocks to enforce.
    pub period: u64,
    /// Extra delay before the first block of a sprint.
    pub producer_delay: u64,
    /// Number of blocks produced by a single proposer in a row.
    pub sprint: u64,
    /// Backup producer delay multiplier.
    pub backup_multiplier: u64,
    /// Validator set contract address.
    pub validator_contract: Address,
    /// State receiver contract address.
    pub state_receiver_contract: Address,
    /// Ceiling for the total voting power of a validator set.
    pub max_total_voting_power: i64,
}

impl Default for BorConfig {
    fn default() -> Self {
        Self {
            period: 2,
            producer_delay: 6,
            sprint: 64,
            backup_multiplier: 2,
            validator_contract: address!("0000000000000000000000000000000000001000"),
            state_receiver_contract: address!("0000000000000000000000000000000000001001"),
            max_total_voting_power: MAX_TOTAL_VOTING_POWER,
        }
    }
}

impl BorConfig {
    /// Check that the configuration can be used to aggregate voting power.
    ///
    /// A ceiling of `i64::MAX` is rejected: a saturated sum would sit exactly on
    /// the ceiling and pass.
    pub fn validate(&self) -> Result<(), BorError> {
        if self.max_total_voting_power <= 0 {
            return Err(BorError::InvalidConfig {
                message: format!(
                    "maxTotalVotingPower must be positive, got {}",
                    self.max_total_voting_power
                ),
            });
        }
        if self.max_total_voting_power == i64::MAX {
            return Err(BorError::InvalidConfig {
                message: "maxTotalVotingPower must be below i64::MAX".to_string(),
            });
        }
        Ok(())
    }
}

/// Source of the live chain configuration attached to loaded snapshots.
pub trait ChainConfigProvider: Send + Sync {
    /// Get the active bor parameters, if the chain runs bor.
    fn bor_config(&self) -> Option<BorConfig>;
}

impl ChainConfigProvider for BorConfig {
    fn bor_config(&self) -> Option<BorConfig> {
        Some(self.clone())
    }
}
