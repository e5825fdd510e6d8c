#![no_std]

mod contract;
pub mod errors;
mod oracle;
mod pool_interface;
mod storage;
mod testutils;
mod token;

pub use contract::{LiquidityPool, LiquidityPoolClient};
pub use oracle::PRICE_RESOLUTION;
