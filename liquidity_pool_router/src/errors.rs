use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityPoolRouterError {
    Expired = 301,
    InsufficientAAmount = 302,
    InsufficientBAmount = 303,
    ExcessiveInputAmount = 304,
    InsufficientOutputAmount = 305,
}
