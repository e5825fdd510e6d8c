use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LegacyExchangeError {
    Expired = 701,
    ZeroAmount = 702,
    InitialDepositTooSmall = 703,
    MaxTokensExceeded = 704,
    MinLiquidityNotMet = 705,
    OutputBelowMinimum = 706,
    EmptyReserves = 707,
}
