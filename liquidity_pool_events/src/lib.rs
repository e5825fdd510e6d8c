#![no_std]

use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

// This trait is used to emit events related to liquidity pool operations.
// Amounts are published as i128 to match the token events emitted next to them.
pub trait LiquidityPoolEvents {
    fn mint(&self, sender: Address, amount0: u128, amount1: u128);

    fn burn(&self, sender: Address, amount0: u128, amount1: u128, to: Address);

    fn swap(
        &self,
        sender: Address,
        amount0_in: u128,
        amount1_in: u128,
        amount0_out: u128,
        amount1_out: u128,
        to: Address,
    );

    fn sync(&self, reserve0: u128, reserve1: u128);
}

impl LiquidityPoolEvents for Events {
    fn mint(&self, sender: Address, amount0: u128, amount1: u128) {
        // topics
        // [
        //   "mint": Symbol,   // event identifier
        //   sender: Address,  // account/contract that called mint
        // ]
        //
        // body
        // [
        //   amount0: i128,    // amount of token0 added to the reserves
        //   amount1: i128,    // amount of token1 added to the reserves
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "mint"), sender),
            (amount0 as i128, amount1 as i128),
        );
    }

    fn burn(&self, sender: Address, amount0: u128, amount1: u128, to: Address) {
        // topics
        // [
        //   "burn": Symbol,   // event identifier
        //   sender: Address,  // account/contract that called burn
        //   to: Address,      // receiver of the withdrawn tokens
        // ]
        //
        // body
        // [
        //   amount0: i128,    // amount of token0 sent to `to`
        //   amount1: i128,    // amount of token1 sent to `to`
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "burn"), sender, to),
            (amount0 as i128, amount1 as i128),
        );
    }

    fn swap(
        &self,
        sender: Address,
        amount0_in: u128,
        amount1_in: u128,
        amount0_out: u128,
        amount1_out: u128,
        to: Address,
    ) {
        // topics
        // [
        //   "swap": Symbol,   // event identifier
        //   sender: Address,  // account/contract that called swap
        //   to: Address,      // receiver of the output tokens
        // ]
        //
        // body
        // [
        //   amount0_in: i128,
        //   amount1_in: i128,
        //   amount0_out: i128,
        //   amount1_out: i128,
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "swap"), sender, to),
            (
                amount0_in as i128,
                amount1_in as i128,
                amount0_out as i128,
                amount1_out as i128,
            ),
        );
    }

    fn sync(&self, reserve0: u128, reserve1: u128) {
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "sync"),),
            (reserve0 as i128, reserve1 as i128),
        );
    }
}
