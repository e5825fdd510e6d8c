use crate::allowance::write_allowance;
use crate::errors::TokenError;
use crate::metadata::read_name;
use crate::nonce::{consume_nonce, read_nonce};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{panic_with_error, symbol_short, Address, Bytes, BytesN, Env, Symbol};
use soroban_token_sdk::TokenUtils;
use utils::constant::DAY_IN_LEDGERS;

// Allowance granted through a permit stays live for this many ledgers.
pub const PERMIT_ALLOWANCE_LEDGERS: u32 = 30 * DAY_IN_LEDGERS;

// XDR prefix of ScVal::Address(ScAddress::Account(PublicKey::Ed25519(..)))
const ACCOUNT_ADDRESS_XDR_PREFIX: [u8; 12] = [0, 0, 0, 18, 0, 0, 0, 0, 0, 0, 0, 0];

// Digest prefix borrowed from typed structured data hashing.
const DIGEST_PREFIX: [u8; 2] = [0x19, 0x01];

// Binds the signature to this contract, its name and the network.
pub fn domain_separator(e: &Env) -> BytesN<32> {
    let mut data = Bytes::new(e);
    data.append(&Symbol::new(e, "PermitDomain").to_xdr(e));
    data.append(&e.ledger().network_id().to_xdr(e));
    data.append(&e.current_contract_address().to_xdr(e));
    data.append(&read_name(e).to_xdr(e));
    e.crypto().sha256(&data).to_bytes()
}

pub fn permit_digest(
    e: &Env,
    owner: &Address,
    spender: &Address,
    value: i128,
    nonce: u64,
    deadline: u64,
) -> BytesN<32> {
    let mut permit = Bytes::new(e);
    permit.append(&symbol_short!("Permit").to_xdr(e));
    permit.append(&owner.clone().to_xdr(e));
    permit.append(&spender.clone().to_xdr(e));
    permit.append(&value.to_xdr(e));
    permit.append(&nonce.to_xdr(e));
    permit.append(&deadline.to_xdr(e));
    let struct_hash = e.crypto().sha256(&permit).to_bytes();

    let mut data = Bytes::from_array(e, &DIGEST_PREFIX);
    data.append(&domain_separator(e).into());
    data.append(&struct_hash.into());
    e.crypto().sha256(&data).to_bytes()
}

// Digest the owner has to sign for the next permit.
pub fn current_permit_digest(
    e: &Env,
    owner: &Address,
    spender: &Address,
    value: i128,
    deadline: u64,
) -> BytesN<32> {
    permit_digest(e, owner, spender, value, read_nonce(e, owner), deadline)
}

fn require_account_key(e: &Env, owner: &Address, public_key: &BytesN<32>) {
    let mut account = Bytes::from_array(e, &ACCOUNT_ADDRESS_XDR_PREFIX);
    account.append(&public_key.clone().into());
    if owner.clone().to_xdr(e) != account {
        panic_with_error!(e, TokenError::InvalidSigner);
    }
}

// Sets `spender` allowance from an ed25519 signature of the owner account.
// The signature covers the current nonce, so it is accepted at most once.
pub fn permit(
    e: &Env,
    owner: Address,
    spender: Address,
    value: i128,
    deadline: u64,
    public_key: BytesN<32>,
    signature: BytesN<64>,
) {
    if value < 0 {
        panic_with_error!(e, TokenError::NegativeNotAllowed);
    }
    if e.ledger().timestamp() > deadline {
        panic_with_error!(e, TokenError::PermitExpired);
    }
    require_account_key(e, &owner, &public_key);

    let nonce = consume_nonce(e, &owner);
    let digest = permit_digest(e, &owner, &spender, value, nonce, deadline);
    // traps on an invalid signature
    e.crypto()
        .ed25519_verify(&public_key, &digest.into(), &signature);

    let expiration_ledger = e.ledger().sequence() + PERMIT_ALLOWANCE_LEDGERS;
    write_allowance(e, owner.clone(), spender.clone(), value, expiration_ledger);
    TokenUtils::new(e)
        .events()
        .approve(owner, spender, value, expiration_ledger);
}
