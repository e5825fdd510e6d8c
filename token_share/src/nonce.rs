use soroban_sdk::{contracttype, Address, Env};
use utils::bump::bump_persistent;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Nonce(Address),
}

pub fn read_nonce(e: &Env, owner: &Address) -> u64 {
    let key = DataKey::Nonce(owner.clone());
    match e.storage().persistent().get::<DataKey, u64>(&key) {
        Some(nonce) => {
            bump_persistent(e, &key);
            nonce
        }
        None => 0,
    }
}

// Returns the nonce that was current before the increment.
pub fn consume_nonce(e: &Env, owner: &Address) -> u64 {
    let nonce = read_nonce(e, owner);
    let key = DataKey::Nonce(owner.clone());
    e.storage().persistent().set(&key, &(nonce + 1));
    bump_persistent(e, &key);
    nonce
}
