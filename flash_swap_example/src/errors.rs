use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FlashSwapError {
    // caller is not the registered pool of the pair
    Unauthorized = 901,
    // pair has no wrapped native side or no legacy exchange for its token
    UnsupportedPair = 902,
    // both outputs are set or the minimum can not be decoded
    InvalidSwapRequest = 903,
    InsufficientProfit = 904,
}
