#![no_std]

mod constants;
mod pool;
mod test;

pub use constants::{FEE_MULTIPLIER, MINIMUM_LIQUIDITY, MULTIPLIER_WITH_FEE};
pub use pool::{get_amount_in, get_amount_out, get_amounts_in, get_amounts_out, quote, sort_tokens};
