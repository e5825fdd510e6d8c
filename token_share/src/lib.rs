#![no_std]

pub mod allowance;
pub mod balance;
pub mod errors;
pub mod metadata;
pub mod nonce;
pub mod permit;

use crate::balance::{get_total_shares, put_total_shares, receive_balance, spend_balance};
use crate::errors::TokenError;
use soroban_sdk::{panic_with_error, Address, Env, String};
use soroban_token_sdk::TokenUtils;

pub use balance::{get_total_shares as total_shares, read_balance};

// All-zero contract id. Shares sent here can never move again.
pub const ZERO_ADDRESS: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn zero_address(e: &Env) -> Address {
    Address::from_string(&String::from_str(e, ZERO_ADDRESS))
}

pub fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, TokenError::NegativeNotAllowed);
    }
}

pub fn get_user_balance_shares(e: &Env, user: &Address) -> u128 {
    read_balance(e, user.clone()) as u128
}

pub fn mint_shares(e: &Env, to: &Address, amount: u128) {
    let total_share = get_total_shares(e);
    put_total_shares(e, total_share + amount);

    receive_balance(e, to.clone(), amount as i128);
    TokenUtils::new(e)
        .events()
        .transfer(zero_address(e), to.clone(), amount as i128);
}

pub fn burn_shares(e: &Env, from: &Address, amount: u128) {
    spend_balance(e, from.clone(), amount as i128);

    let total_share = get_total_shares(e);
    put_total_shares(e, total_share - amount);

    TokenUtils::new(e)
        .events()
        .transfer(from.clone(), zero_address(e), amount as i128);
}

pub fn transfer_shares(e: &Env, from: &Address, to: &Address, amount: i128) {
    check_nonnegative_amount(e, amount);
    spend_balance(e, from.clone(), amount);
    receive_balance(e, to.clone(), amount);
    TokenUtils::new(e)
        .events()
        .transfer(from.clone(), to.clone(), amount);
}
