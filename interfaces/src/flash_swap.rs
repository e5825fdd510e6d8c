use soroban_sdk::{contractclient, contracttype, Address, Bytes, Env};

// Everything a receiver needs to settle a flash swap. The pool is still on the
// call stack during the callback and cannot be invoked again, so reserves are
// handed over here instead of being read back.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlashSwapContext {
    pub pool: Address,
    pub sender: Address,
    pub token0: Address,
    pub token1: Address,
    pub reserve0: u128,
    pub reserve1: u128,
    pub amount0_out: u128,
    pub amount1_out: u128,
}

#[contractclient(name = "SwapReceiverClient")]
pub trait SwapReceiver {
    // Called by the pool after the optimistic transfer when swap data is not empty.
    // The receiver has to pay the pool back before returning.
    fn on_flash_swap(e: Env, context: FlashSwapContext, data: Bytes);
}
