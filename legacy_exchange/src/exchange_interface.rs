use soroban_sdk::{Address, Env, String};

pub trait PricingTrait {
    fn native_address(e: Env) -> Address;

    fn total_supply(e: Env) -> u128;

    // Output for an exact input against the given reserves, 0.3% fee included
    fn get_input_price(e: Env, input_amount: u128, input_reserve: u128, output_reserve: u128)
        -> u128;

    // Input needed for an exact output against the given reserves, 0.3% fee included
    fn get_output_price(
        e: Env,
        output_amount: u128,
        input_reserve: u128,
        output_reserve: u128,
    ) -> u128;
}

// Liquidity shares follow the standard token interface, except burning.
pub trait ShareTokenTrait {
    fn allowance(e: Env, from: Address, spender: Address) -> i128;

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);

    fn balance(e: Env, id: Address) -> i128;

    fn transfer(e: Env, from: Address, to: Address, amount: i128);

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128);

    fn decimals(e: Env) -> u32;

    fn name(e: Env) -> String;

    fn symbol(e: Env) -> String;
}
