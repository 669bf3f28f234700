//! Bor snapshot - the validator set anchored at a given block.
//!
//! The persisted layout is described once by the `*Document` types below and
//! converted to and from the in-memory types explicitly, so the durable format
//! does not follow in-memory field layout.

use super::{BorConfig, BorError, Validator, ValidatorSet};
use alloy_primitives::{Address, B256};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Schema version written by [`Snapshot::encode`].
///
/// Documents without a `version` field are read as this version.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Snapshot of the authorized validator set at a given block.
///
/// Every constructor attaches the chain config and aggregates the total voting
/// power, so a snapshot without its aggregates cannot be observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Consensus engine parameters, attached on construction and never persisted.
    config: BorConfig,

    /// Block number where the snapshot was created.
    pub number: u64,

    /// Block hash where the snapshot was created.
    pub hash: B256,

    /// Validator set at this moment.
    validator_set: ValidatorSet,

    /// Recent signers for spam protection (block number -> signer).
    pub recents: BTreeMap<u64, Address>,
}

impl Snapshot {
    /// Create a snapshot with no recent signers.
    ///
    /// Fails like [`Self::from_persisted`] if the config is unusable or the
    /// validators exceed its voting power ceiling.
    pub fn new(
        number: u64,
        hash: B256,
        validators: Vec<Validator>,
        config: BorConfig,
    ) -> Result<Self, BorError> {
        Self::aggregate(
            number,
            hash,
            ValidatorSet::new(validators, None),
            BTreeMap::new(),
            config,
        )
    }

    /// Build a snapshot from a persisted blob.
    ///
    /// Decodes the document, attaches `config` and recomputes the total voting
    /// power against the configured ceiling.
    pub fn from_persisted(blob: &[u8], config: BorConfig) -> Result<Self, BorError> {
        let doc: SnapshotDocument = serde_json::from_slice(blob)
            .map_err(|e| BorError::Decode { message: e.to_string() })?;
        doc.into_snapshot(config)
    }

    fn aggregate(
        number: u64,
        hash: B256,
        mut validator_set: ValidatorSet,
        recents: BTreeMap<u64, Address>,
        config: BorConfig,
    ) -> Result<Self, BorError> {
        config.validate()?;
        validator_set.update_total_voting_power(config.max_total_voting_power)?;
        Ok(Self { config, number, hash, validator_set, recents })
    }

    /// Encode the snapshot in the persisted layout.
    pub fn encode(&self) -> Result<Vec<u8>, BorError> {
        serde_json::to_vec(&SnapshotDocument::from(self))
            .map_err(|e| BorError::Encode { message: e.to_string() })
    }

    /// Attached consensus parameters.
    pub fn config(&self) -> &BorConfig {
        &self.config
    }

    /// The validator set with its aggregates populated.
    pub fn validator_set(&self) -> &ValidatorSet {
        &self.validator_set
    }

    /// Total voting power of the validator set.
    pub fn total_voting_power(&self) -> i64 {
        self.validator_set.total_voting_power().unwrap_or_default()
    }

    /// Signer addresses in persisted order.
    pub fn signers(&self) -> Vec<Address> {
        self.validator_set.signers()
    }

    /// Validators in persisted order.
    pub fn validators(&self) -> &[Validator] {
        self.validator_set.validators()
    }

    /// Consume the snapshot, returning the validators in persisted order.
    pub fn into_validators(self) -> Vec<Validator> {
        self.validator_set.into_validators()
    }

    /// Current proposer, see [`ValidatorSet::get_proposer`].
    pub fn get_proposer(&mut self) -> Option<Validator> {
        self.validator_set.get_proposer()
    }
}

/// Deserialize a `null` as the empty value. Nil maps and slices are written as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<u32>,
    number: u64,
    hash: B256,
    validator_set: ValidatorSetDocument,
    #[serde(default, deserialize_with = "null_as_empty")]
    recents: BTreeMap<u64, Address>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ValidatorSetDocument {
    #[serde(deserialize_with = "null_as_empty")]
    validators: Vec<ValidatorDocument>,
    #[serde(default)]
    proposer: Option<ValidatorDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ValidatorDocument {
    #[serde(rename = "ID", default)]
    id: u64,
    #[serde(rename = "signer")]
    address: Address,
    #[serde(rename = "power")]
    voting_power: i64,
    #[serde(rename = "accum", default)]
    proposer_priority: i64,
}

impl From<&Validator> for ValidatorDocument {
    fn from(val: &Validator) -> Self {
        Self {
            id: val.id,
            address: val.address,
            voting_power: val.voting_power,
            proposer_priority: val.proposer_priority,
        }
    }
}

impl From<ValidatorDocument> for Validator {
    fn from(doc: ValidatorDocument) -> Self {
        Validator::new(doc.id, doc.address, doc.voting_power)
            .with_proposer_priority(doc.proposer_priority)
    }
}

impl From<&Snapshot> for SnapshotDocument {
    fn from(snap: &Snapshot) -> Self {
        Self {
            version: Some(SNAPSHOT_SCHEMA_VERSION),
            number: snap.number,
            hash: snap.hash,
            validator_set: ValidatorSetDocument {
                validators: snap.validators().iter().map(ValidatorDocument::from).collect(),
                proposer: snap.validator_set.proposer().map(ValidatorDocument::from),
            },
            recents: snap.recents.clone(),
        }
    }
}

impl SnapshotDocument {
    fn into_snapshot(self, config: BorConfig) -> Result<Snapshot, BorError> {
        let version = self.version.unwrap_or(SNAPSHOT_SCHEMA_VERSION);
        if version != SNAPSHOT_SCHEMA_VERSION {
            return Err(BorError::UnsupportedSchemaVersion { version });
        }

        let validators =
            self.validator_set.validators.into_iter().map(Validator::from).collect();
        let proposer = self.validator_set.proposer.map(Validator::from);

        Snapshot::aggregate(
            self.number,
            self.hash,
            ValidatorSet::new(validators, proposer),
            self.recents,
            config,
        )
    }
}
