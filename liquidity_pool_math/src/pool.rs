use crate::constants::{FEE_MULTIPLIER, MULTIPLIER_WITH_FEE};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Address, Env, Vec, U256};
use utils::u256_math::ExtraMath;

// Canonical pair order. Both the pool and the router registry rely on it.
pub fn sort_tokens(e: &Env, token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else if token_a > token_b {
        (token_b.clone(), token_a.clone())
    } else {
        panic_with_error!(e, LiquidityPoolValidationError::IdenticalAddresses)
    }
}

// Given some amount of an asset and pair reserves, returns an equivalent amount of the other asset.
// Fees are not applied.
pub fn quote(e: &Env, amount_a: u128, reserve_a: u128, reserve_b: u128) -> u128 {
    if amount_a == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientAmount);
    }
    if reserve_a == 0 || reserve_b == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }
    amount_a.fixed_mul_floor(e, &reserve_b, &reserve_a)
}

// Maximum output amount for an exact input, rounded down.
pub fn get_amount_out(e: &Env, amount_in: u128, reserve_in: u128, reserve_out: u128) -> u128 {
    if amount_in == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientInputAmount);
    }
    if reserve_in == 0 || reserve_out == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }

    let amount_in_with_fee =
        U256::from_u128(e, amount_in).mul(&U256::from_u128(e, MULTIPLIER_WITH_FEE));
    let numerator = amount_in_with_fee.mul(&U256::from_u128(e, reserve_out));
    let denominator = U256::from_u128(e, reserve_in)
        .mul(&U256::from_u128(e, FEE_MULTIPLIER))
        .add(&amount_in_with_fee);
    numerator.div(&denominator).to_u128_checked()
}

// Minimum input amount for an exact output, rounded up by adding one after the floor division.
pub fn get_amount_in(e: &Env, amount_out: u128, reserve_in: u128, reserve_out: u128) -> u128 {
    if amount_out == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientOutputAmount);
    }
    if reserve_in == 0 || reserve_out == 0 || amount_out >= reserve_out {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientLiquidity);
    }

    let numerator = U256::from_u128(e, reserve_in)
        .mul(&U256::from_u128(e, amount_out))
        .mul(&U256::from_u128(e, FEE_MULTIPLIER));
    let denominator = U256::from_u128(e, reserve_out - amount_out)
        .mul(&U256::from_u128(e, MULTIPLIER_WITH_FEE));
    numerator.div(&denominator).to_u128_checked() + 1
}

// Amounts chain for an exact input.
// `reserves` holds (reserve_in, reserve_out) for every hop in path order.
pub fn get_amounts_out(e: &Env, amount_in: u128, reserves: &Vec<(u128, u128)>) -> Vec<u128> {
    if reserves.is_empty() {
        panic_with_error!(e, LiquidityPoolValidationError::InvalidPath);
    }

    let mut amounts = Vec::from_array(e, [amount_in]);
    let mut amount = amount_in;
    for (reserve_in, reserve_out) in reserves.iter() {
        amount = get_amount_out(e, amount, reserve_in, reserve_out);
        amounts.push_back(amount);
    }
    amounts
}

// Amounts chain for an exact output, computed from the last hop backwards.
// `reserves` holds (reserve_in, reserve_out) for every hop in path order.
pub fn get_amounts_in(e: &Env, amount_out: u128, reserves: &Vec<(u128, u128)>) -> Vec<u128> {
    if reserves.is_empty() {
        panic_with_error!(e, LiquidityPoolValidationError::InvalidPath);
    }

    let mut amounts = Vec::from_array(e, [amount_out]);
    let mut amount = amount_out;
    for (reserve_in, reserve_out) in reserves.iter().rev() {
        amount = get_amount_in(e, amount, reserve_in, reserve_out);
        amounts.push_front(amount);
    }
    amounts
}
