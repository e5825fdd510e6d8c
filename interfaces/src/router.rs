use soroban_sdk::{contractclient, Address, Env, Vec};

#[contractclient(name = "LiquidityPoolRouterClient")]
pub trait LiquidityPoolRouterInterface {
    fn get_pool(e: Env, token_a: Address, token_b: Address) -> Option<Address>;

    fn get_wrapped_native(e: Env) -> Address;

    fn get_native(e: Env) -> Address;

    fn add_liquidity_native(
        e: Env,
        user: Address,
        token: Address,
        amount_token_desired: u128,
        amount_token_min: u128,
        amount_native_desired: u128,
        amount_native_min: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128, u128);

    fn get_amounts_out(e: Env, amount_in: u128, path: Vec<Address>) -> Vec<u128>;

    fn get_amounts_in(e: Env, amount_out: u128, path: Vec<Address>) -> Vec<u128>;
}
