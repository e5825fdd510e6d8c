use crate::events::{Events, WrappedNativeEvents};
use crate::storage::{get_native, set_native};
use amm_interfaces::wrapped_native::WrappedNativeInterface;
use soroban_sdk::token::{self, Interface as _, TokenClient as SorobanTokenClient};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, String};
use soroban_token_sdk::TokenUtils;
use token_share::allowance::{read_allowance, spend_allowance, write_allowance};
use token_share::balance::{
    get_total_shares, put_total_shares, read_balance, receive_balance, spend_balance,
};
use token_share::check_nonnegative_amount;
use token_share::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use utils::bump::bump_instance;

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Native asset wrapped into a standard token"
);

fn increase_total_supply(e: &Env, amount: i128) {
    put_total_shares(e, get_total_shares(e) + amount as u128);
}

fn decrease_total_supply(e: &Env, amount: i128) {
    put_total_shares(e, get_total_shares(e) - amount as u128);
}

#[contract]
pub struct WrappedNative;

#[contractimpl]
impl WrappedNative {
    // Initializes the wrapper. Decimals follow the native asset.
    //
    // # Arguments
    //
    // * `native` - The native asset contract.
    pub fn __constructor(e: Env, native: Address) {
        let decimal = SorobanTokenClient::new(&e, &native).decimals();
        set_native(&e, &native);
        write_metadata(
            &e,
            decimal,
            String::from_str(&e, "Wrapped Native"),
            String::from_str(&e, "WNATIVE"),
        );
    }

    pub fn total_supply(e: Env) -> i128 {
        get_total_shares(&e) as i128
    }
}

#[contractimpl]
impl WrappedNativeInterface for WrappedNative {
    fn native(e: Env) -> Address {
        get_native(&e)
    }

    // Locks `amount` of native taken from `from` and mints the same amount of wrapped tokens.
    //
    // # Arguments
    //
    // * `from` - The account paying native and receiving wrapped tokens.
    // * `amount` - The amount to wrap.
    fn deposit(e: Env, from: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);
        bump_instance(&e);

        SorobanTokenClient::new(&e, &get_native(&e)).transfer(
            &from,
            &e.current_contract_address(),
            &amount,
        );
        receive_balance(&e, from.clone(), amount);
        increase_total_supply(&e, amount);

        log!(&e, "wrap", from, amount);
        Events::new(&e).deposit(from, amount);
    }

    // Burns `amount` of wrapped tokens of `from` and releases the same amount of native.
    //
    // # Arguments
    //
    // * `from` - The holder of the wrapped tokens.
    // * `amount` - The amount to unwrap.
    fn withdraw(e: Env, from: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);
        bump_instance(&e);

        spend_balance(&e, from.clone(), amount);
        decrease_total_supply(&e, amount);
        SorobanTokenClient::new(&e, &get_native(&e)).transfer(
            &e.current_contract_address(),
            &from,
            &amount,
        );

        log!(&e, "unwrap", from, amount);
        Events::new(&e).withdraw(from, amount);
    }
}

#[contractimpl]
impl token::Interface for WrappedNative {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&e);
        read_allowance(&e, from, spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        write_allowance(&e, from.clone(), spender.clone(), amount, expiration_ledger);
        TokenUtils::new(&e)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        bump_instance(&e);
        read_balance(&e, id)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        TokenUtils::new(&e).events().transfer(from, to, amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        receive_balance(&e, to.clone(), amount);
        TokenUtils::new(&e).events().transfer(from, to, amount)
    }

    // Burned wrapped tokens leave their native backing locked in the contract.
    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_balance(&e, from.clone(), amount);
        decrease_total_supply(&e, amount);
        TokenUtils::new(&e).events().burn(from, amount);
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(&e, amount);

        bump_instance(&e);

        spend_allowance(&e, from.clone(), spender, amount);
        spend_balance(&e, from.clone(), amount);
        decrease_total_supply(&e, amount);
        TokenUtils::new(&e).events().burn(from, amount)
    }

    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }
}
