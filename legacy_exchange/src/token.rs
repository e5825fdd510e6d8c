use crate::storage::{get_native, get_token};
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{Address, Env};

// Reserves are the live balances: (native, token)
pub fn get_reserves(e: &Env) -> (u128, u128) {
    let this = e.current_contract_address();
    let native = SorobanTokenClient::new(e, &get_native(e)).balance(&this);
    let token = SorobanTokenClient::new(e, &get_token(e)).balance(&this);
    (native as u128, token as u128)
}

pub fn receive_native(e: &Env, from: &Address, amount: u128) {
    SorobanTokenClient::new(e, &get_native(e)).transfer(
        from,
        &e.current_contract_address(),
        &(amount as i128),
    );
}

pub fn send_native(e: &Env, to: &Address, amount: u128) {
    SorobanTokenClient::new(e, &get_native(e)).transfer(
        &e.current_contract_address(),
        to,
        &(amount as i128),
    );
}

// Tokens are pulled with the exchange as spender, so the owner has to approve it first.
pub fn receive_token(e: &Env, from: &Address, amount: u128) {
    let this = e.current_contract_address();
    SorobanTokenClient::new(e, &get_token(e)).transfer_from(&this, from, &this, &(amount as i128));
}

pub fn send_token(e: &Env, to: &Address, amount: u128) {
    SorobanTokenClient::new(e, &get_token(e)).transfer(
        &e.current_contract_address(),
        to,
        &(amount as i128),
    );
}
