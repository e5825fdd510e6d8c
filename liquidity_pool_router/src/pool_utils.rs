use crate::events::{Events, LiquidityPoolRouterEvents};
use crate::storage::{get_pool_hash, get_tokens_pair_pool, set_tokens_pair_pool, PoolError};
use amm_interfaces::pool::LiquidityPoolClient;
use liquidity_pool_math::sort_tokens;
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{log, panic_with_error, Address, Bytes, BytesN, Env, Vec};

// Registry key of a sorted pair.
pub fn pool_salt(e: &Env, token0: &Address, token1: &Address) -> BytesN<32> {
    let mut salt = Bytes::new(e);
    salt.append(&token0.clone().to_xdr(e));
    salt.append(&token1.clone().to_xdr(e));
    e.crypto().sha256(&salt).to_bytes()
}

pub fn get_pool(e: &Env, token_a: &Address, token_b: &Address) -> Option<Address> {
    let (token0, token1) = sort_tokens(e, token_a, token_b);
    get_tokens_pair_pool(e, &pool_salt(e, &token0, &token1))
}

pub fn get_pool_or_panic(e: &Env, token_a: &Address, token_b: &Address) -> Address {
    match get_pool(e, token_a, token_b) {
        Some(pool) => pool,
        None => panic_with_error!(e, PoolError::PoolNotFound),
    }
}

pub fn deploy_pool(e: &Env, token_a: &Address, token_b: &Address) -> Address {
    let (token0, token1) = sort_tokens(e, token_a, token_b);
    let salt = pool_salt(e, &token0, &token1);
    if get_tokens_pair_pool(e, &salt).is_some() {
        panic_with_error!(e, PoolError::PoolAlreadyExists);
    }

    let pool = e
        .deployer()
        .with_current_contract(salt.clone())
        .deploy_v2(get_pool_hash(e), (token0.clone(), token1.clone()));
    set_tokens_pair_pool(e, &salt, &pool);

    log!(e, "pool created", token0, token1, pool);
    Events::new(e).create_pool(token0, token1, pool.clone());
    pool
}

pub fn get_or_deploy_pool(e: &Env, token_a: &Address, token_b: &Address) -> Address {
    match get_pool(e, token_a, token_b) {
        Some(pool) => pool,
        None => deploy_pool(e, token_a, token_b),
    }
}

// Pool reserves in (token_a, token_b) order.
pub fn get_reserves(e: &Env, pool: &Address, token_a: &Address, token_b: &Address) -> (u128, u128) {
    let (token0, _) = sort_tokens(e, token_a, token_b);
    let (reserve0, reserve1, _) = LiquidityPoolClient::new(e, pool).get_reserves();
    if *token_a == token0 {
        (reserve0, reserve1)
    } else {
        (reserve1, reserve0)
    }
}

// (reserve_in, reserve_out) of every hop.
fn get_path_reserves(e: &Env, path: &Vec<Address>) -> Vec<(u128, u128)> {
    if path.len() < 2 {
        panic_with_error!(e, LiquidityPoolValidationError::InvalidPath);
    }

    let mut reserves = Vec::new(e);
    for i in 0..path.len() - 1 {
        let (token_in, token_out) = (path.get_unchecked(i), path.get_unchecked(i + 1));
        let pool = get_pool_or_panic(e, &token_in, &token_out);
        reserves.push_back(get_reserves(e, &pool, &token_in, &token_out));
    }
    reserves
}

pub fn get_amounts_out(e: &Env, amount_in: u128, path: &Vec<Address>) -> Vec<u128> {
    liquidity_pool_math::get_amounts_out(e, amount_in, &get_path_reserves(e, path))
}

pub fn get_amounts_in(e: &Env, amount_out: u128, path: &Vec<Address>) -> Vec<u128> {
    liquidity_pool_math::get_amounts_in(e, amount_out, &get_path_reserves(e, path))
}

// Runs the precomputed amounts through the path. The first pool must already hold amounts[0].
// Every hop pays straight into the next pool, the last one pays `to`.
pub fn swap_path(e: &Env, amounts: &Vec<u128>, path: &Vec<Address>, to: &Address) {
    let router = e.current_contract_address();
    let hops = path.len() - 1;
    for i in 0..hops {
        let (token_in, token_out) = (path.get_unchecked(i), path.get_unchecked(i + 1));
        let (token0, _) = sort_tokens(e, &token_in, &token_out);
        let amount_out = amounts.get_unchecked(i + 1);
        let (amount0_out, amount1_out) = if token_in == token0 {
            (0, amount_out)
        } else {
            (amount_out, 0)
        };

        let recipient = if i + 1 < hops {
            get_pool_or_panic(e, &token_out, &path.get_unchecked(i + 2))
        } else {
            to.clone()
        };

        LiquidityPoolClient::new(e, &get_pool_or_panic(e, &token_in, &token_out)).swap(
            &router,
            &amount0_out,
            &amount1_out,
            &recipient,
            &Bytes::new(e),
        );
    }
}
