//! Bor authority example.
//!
//! Seeds an in-memory store with a short chain of snapshots and runs every
//! authority query against it.
//!
//! Run with: `cargo run --bin bor-authority`

use alloy_eips::BlockNumberOrTag;
use alloy_primitives::{Address, B256};
use bor_authority::{
    consensus::bor::snapshot_key, BorApi, BorConfig, HeaderData, MemoryChain, MemoryDatabase,
    Snapshot, Validator, SNAPSHOT_TABLE,
};
use std::sync::Arc;

fn main() -> eyre::Result<()> {
    println!("=== Bor Authority Example ===\n");

    let db = Arc::new(MemoryDatabase::new());
    let chain = Arc::new(MemoryChain::new());

    let validators = vec![
        Validator::new(1, Address::repeat_byte(0x01), 100).with_proposer_priority(-20),
        Validator::new(2, Address::repeat_byte(0x02), 50).with_proposer_priority(40),
        Validator::new(3, Address::repeat_byte(0x03), 75).with_proposer_priority(-20),
    ];

    for number in 0..3u64 {
        let hash = B256::with_last_byte(number as u8 + 1);
        chain.insert(HeaderData { number, hash });

        let mut snap = Snapshot::new(number, hash, validators.clone(), BorConfig::default())?;
        if number > 0 {
            snap.recents.insert(number - 1, validators[(number as usize - 1) % 3].address);
        }
        db.put(SNAPSHOT_TABLE, snapshot_key(hash), snap.encode()?);
    }

    let api = BorApi::new(db, chain, Arc::new(BorConfig::default()));

    let snap = api.get_snapshot(None)?;
    println!("1. Latest snapshot");
    println!("   - Number: {}", snap.number);
    println!("   - Hash:   {}", snap.hash);
    println!("   - Total voting power: {}", snap.total_voting_power());
    println!("   - Recents: {:?}", snap.recents);
    println!();

    println!("2. Signers");
    for (i, signer) in api.get_signers(Some(BlockNumberOrTag::Number(1)))?.iter().enumerate() {
        println!("   - [{i}] {signer}");
    }
    println!("   - At genesis hash: {:?}", api.get_signers_at_hash(B256::with_last_byte(1))?);
    println!();

    println!("3. Current proposer: {}", api.get_current_proposer()?);
    println!();

    println!("4. Current validators");
    for val in api.get_current_validators()? {
        println!(
            "   - id={} signer={} power={} accum={}",
            val.id, val.address, val.voting_power, val.proposer_priority
        );
    }
    println!();

    println!("5. Failure cases");
    match api.get_snapshot(Some(BlockNumberOrTag::Pending)) {
        Ok(_) => println!("   - pending: unexpected snapshot"),
        Err(err) => println!("   - pending: {err}"),
    }
    match api.get_snapshot_at_hash(B256::repeat_byte(0xee)) {
        Ok(_) => println!("   - unknown hash: unexpected snapshot"),
        Err(err) => println!("   - unknown hash: {err}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
