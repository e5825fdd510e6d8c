use crate::storage::PermitSignature;
use soroban_sdk::{Address, BytesN, Env, Vec};

pub trait PoolsRegistryTrait {
    // Deploys the pool of a pair which has none yet
    fn create_pool(e: Env, token_a: Address, token_b: Address) -> Address;

    // Wasm hash used for new pools
    fn get_pool_hash(e: Env) -> BytesN<32>;
}

pub trait QuoteTrait {
    // Amount of B worth `amount_a` at the given reserves, no fee
    fn quote(e: Env, amount_a: u128, reserve_a: u128, reserve_b: u128) -> u128;

    // Output of a single hop for an exact input, after the 0.3% fee
    fn get_amount_out(e: Env, amount_in: u128, reserve_in: u128, reserve_out: u128) -> u128;

    // Input of a single hop needed for an exact output, after the 0.3% fee
    fn get_amount_in(e: Env, amount_out: u128, reserve_in: u128, reserve_out: u128) -> u128;
}

pub trait LiquidityTrait {
    // Deposits into the pair pool at the current ratio, creating the pool when missing.
    // Returns (amount_a, amount_b, liquidity)
    fn add_liquidity(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        amount_a_desired: u128,
        amount_b_desired: u128,
        amount_a_min: u128,
        amount_b_min: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128, u128);

    // Returns (amount_a, amount_b)
    fn remove_liquidity(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        amount_a_min: u128,
        amount_b_min: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128);

    // Returns (amount_token, amount_native)
    fn remove_liquidity_native(
        e: Env,
        user: Address,
        token: Address,
        liquidity: u128,
        amount_token_min: u128,
        amount_native_min: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128);

    fn remove_liquidity_with_permit(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        amount_a_min: u128,
        amount_b_min: u128,
        to: Address,
        deadline: u64,
        permit: PermitSignature,
    ) -> (u128, u128);

    fn remove_native_with_permit(
        e: Env,
        user: Address,
        token: Address,
        liquidity: u128,
        amount_token_min: u128,
        amount_native_min: u128,
        to: Address,
        deadline: u64,
        permit: PermitSignature,
    ) -> (u128, u128);
}

pub trait SwapTrait {
    fn swap_exact_tokens_for_tokens(
        e: Env,
        user: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128>;

    fn swap_tokens_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128>;

    fn swap_exact_native_for_tokens(
        e: Env,
        user: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128>;

    fn swap_tokens_for_exact_native(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128>;

    fn swap_exact_tokens_for_native(
        e: Env,
        user: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128>;

    fn swap_native_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128>;
}
