use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityPoolError {
    InsufficientLiquidityMinted = 201,
    InsufficientLiquidityBurned = 202,
    InvalidTo = 203,
    InvariantDoesNotHold = 204,
}
