use crate::storage::{get_token0, get_token1};
use soroban_sdk::token::TokenClient as Client;
use soroban_sdk::{Address, Env};

fn transfer(e: &Env, token: &Address, to: &Address, amount: u128) {
    if amount == 0 {
        return;
    }
    Client::new(e, token).transfer(&e.current_contract_address(), to, &(amount as i128));
}

fn balance(e: &Env, token: &Address) -> u128 {
    Client::new(e, token).balance(&e.current_contract_address()) as u128
}

pub fn transfer_0(e: &Env, to: &Address, amount: u128) {
    transfer(e, &get_token0(e), to, amount);
}

pub fn transfer_1(e: &Env, to: &Address, amount: u128) {
    transfer(e, &get_token1(e), to, amount);
}

// Current pool holdings of (token0, token1).
pub fn get_balances(e: &Env) -> (u128, u128) {
    (balance(e, &get_token0(e)), balance(e, &get_token1(e)))
}
