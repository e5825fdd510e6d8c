#![no_std]

mod contract;
pub mod errors;
mod storage;
mod testutils;
mod token;

pub use contract::{LiquidityPoolMigrator, LiquidityPoolMigratorClient};
pub use errors::MigratorError;
