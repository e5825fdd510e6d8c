// 0.3% fee taken on the input amount
pub const FEE_MULTIPLIER: u128 = 1000;
pub const MULTIPLIER_WITH_FEE: u128 = 997;

// shares locked forever on the first mint
pub const MINIMUM_LIQUIDITY: u128 = 1000;
