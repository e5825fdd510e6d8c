#![no_std]

mod contract;
mod errors;
mod events;
mod pool_utils;
mod router_interface;
mod storage;
mod test;
pub mod test_registry;
mod testutils;
mod token;

pub use contract::{LiquidityPoolRouter, LiquidityPoolRouterClient};
pub use errors::LiquidityPoolRouterError;
pub use storage::{PermitSignature, PoolError};
