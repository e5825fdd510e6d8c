#![no_std]

use soroban_sdk::contracterror;

// Errors shared by the pair math, the pool and the router.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityPoolValidationError {
    InsufficientInputAmount = 2001,
    InsufficientOutputAmount = 2002,
    InsufficientLiquidity = 2003,
    InvalidPath = 2004,
    IdenticalAddresses = 2005,
    InsufficientAmount = 2006,
}
