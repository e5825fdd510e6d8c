#![cfg(any(test, feature = "testutils"))]

use crate::pool_utils::pool_salt;
use crate::storage::set_tokens_pair_pool;
use liquidity_pool_math::sort_tokens;
use soroban_sdk::{Address, Env};

// Records an already registered pool contract in the router registry.
// Lets native test setups skip the wasm deployment done by `create_pool`.
pub fn register_pool(e: &Env, router: &Address, token_a: &Address, token_b: &Address, pool: &Address) {
    e.as_contract(router, || {
        let (token0, token1) = sort_tokens(e, token_a, token_b);
        set_tokens_pair_pool(e, &pool_salt(e, &token0, &token1), pool);
    });
}
