#![no_std]

mod contract;
pub mod errors;
mod events;
mod exchange_interface;
mod storage;
mod testutils;
mod token;

pub use contract::{LegacyExchange, LegacyExchangeClient};
pub use errors::LegacyExchangeError;
pub use storage::MIN_INITIAL_NATIVE;
