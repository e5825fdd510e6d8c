use crate::storage::{
    get_block_timestamp_last, get_price0_cumulative_last, get_price1_cumulative_last,
    set_block_timestamp_last, set_price0_cumulative_last, set_price1_cumulative_last,
    set_reserve0, set_reserve1,
};
use liquidity_pool_events::{Events as PoolEvents, LiquidityPoolEvents};
use soroban_sdk::{panic_with_error, Env, U256};
use utils::math_errors::MathError;
use utils::u256_math::ExtraMath;

// Fractional bits of the accumulated prices.
pub const PRICE_RESOLUTION: u32 = 64;

// Reserves above 112 bits could overflow the fee-scaled invariant product.
pub const MAX_RESERVE: u128 = (1 << 112) - 1;

pub fn check_reserve_bounds(e: &Env, balance0: u128, balance1: u128) {
    if balance0 > MAX_RESERVE || balance1 > MAX_RESERVE {
        panic_with_error!(e, MathError::NumberOverflow);
    }
}

// price of `quote` in units of `base`, Q64
fn encoded_price(e: &Env, base: u128, quote: u128) -> U256 {
    U256::from_u128(e, quote)
        .shl(PRICE_RESOLUTION)
        .div(&U256::from_u128(e, base))
}

// Writes new reserves. Accumulators advance by the price over the previous
// reserves times the seconds they were in effect, so only the first update in
// a given second moves them.
pub fn update_reserves(e: &Env, balance0: u128, balance1: u128, reserve0: u128, reserve1: u128) {
    check_reserve_bounds(e, balance0, balance1);
    let timestamp = e.ledger().timestamp();
    let time_elapsed = timestamp.saturating_sub(get_block_timestamp_last(e));

    if time_elapsed > 0 && reserve0 != 0 && reserve1 != 0 {
        let elapsed = U256::from_u128(e, time_elapsed as u128);
        set_price0_cumulative_last(
            e,
            &get_price0_cumulative_last(e)
                .wrapping_add(&encoded_price(e, reserve0, reserve1).mul(&elapsed)),
        );
        set_price1_cumulative_last(
            e,
            &get_price1_cumulative_last(e)
                .wrapping_add(&encoded_price(e, reserve1, reserve0).mul(&elapsed)),
        );
    }

    set_reserve0(e, &balance0);
    set_reserve1(e, &balance1);
    set_block_timestamp_last(e, &timestamp);
    PoolEvents::new(e).sync(balance0, balance1);
}
