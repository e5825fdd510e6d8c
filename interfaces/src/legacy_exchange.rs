use soroban_sdk::{contractclient, Address, Env};

// Liquidity shares of the exchange follow the standard token interface.
#[contractclient(name = "LegacyExchangeClient")]
pub trait LegacyExchangeInterface {
    fn token_address(e: Env) -> Address;

    fn add_liquidity(
        e: Env,
        provider: Address,
        min_liquidity: u128,
        max_tokens: u128,
        native_amount: u128,
        deadline: u64,
    ) -> u128;

    // returns (native_amount, token_amount)
    fn remove_liquidity(
        e: Env,
        provider: Address,
        amount: u128,
        min_native: u128,
        min_tokens: u128,
        deadline: u64,
    ) -> (u128, u128);

    fn native_to_token_swap_input(
        e: Env,
        buyer: Address,
        native_sold: u128,
        min_tokens: u128,
        deadline: u64,
    ) -> u128;

    fn token_to_native_swap_input(
        e: Env,
        seller: Address,
        tokens_sold: u128,
        min_native: u128,
        deadline: u64,
    ) -> u128;

    fn get_native_to_token_input_price(e: Env, native_sold: u128) -> u128;

    fn get_token_to_native_input_price(e: Env, tokens_sold: u128) -> u128;
}
