#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::testutils::{Ledger, LedgerInfo};
use soroban_sdk::{Address, Env};

fn set_ledger(e: &Env, timestamp: u64, sequence_number: u32) {
    e.ledger().set(LedgerInfo {
        timestamp,
        protocol_version: e.ledger().protocol_version(),
        sequence_number,
        network_id: e.ledger().network_id().to_array(),
        base_reserve: 10,
        min_temp_entry_ttl: 999999,
        min_persistent_entry_ttl: 999999,
        max_entry_ttl: u32::MAX,
    });
}

// move ledger time forward, keeping the sequence
pub fn jump(e: &Env, time: u64) {
    set_ledger(
        e,
        e.ledger().timestamp().saturating_add(time),
        e.ledger().sequence(),
    );
}

pub fn jump_sequence(e: &Env, sequence: u32) {
    set_ledger(
        e,
        e.ledger().timestamp(),
        e.ledger().sequence().saturating_add(sequence),
    );
}

// keep `contract` instance live for `ledgers` more ledgers, so a jump past
// short-lived entries does not archive the contract itself
pub fn extend_instance(e: &Env, contract: &Address, ledgers: u32) {
    e.as_contract(contract, || {
        e.storage().instance().extend_ttl(ledgers, ledgers);
    });
}
