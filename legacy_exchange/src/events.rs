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

pub trait LegacyExchangeEvents {
    fn add_liquidity(&self, provider: Address, native_amount: u128, token_amount: u128);

    fn remove_liquidity(&self, provider: Address, native_amount: u128, token_amount: u128);

    fn token_purchase(&self, buyer: Address, native_sold: u128, tokens_bought: u128);

    fn native_purchase(&self, buyer: Address, tokens_sold: u128, native_bought: u128);
}

impl LegacyExchangeEvents for Events {
    fn add_liquidity(&self, provider: Address, native_amount: u128, token_amount: u128) {
        // topics
        // [
        //   "add_liquidity": Symbol, // event identifier
        //   provider: Address,       // account that deposited both assets
        // ]
        //
        // body
        // [
        //   native_amount: u128,
        //   token_amount: u128,
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "add_liquidity"), provider),
            (native_amount, token_amount),
        );
    }

    fn remove_liquidity(&self, provider: Address, native_amount: u128, token_amount: u128) {
        // topics
        // [
        //   "remove_liquidity": Symbol, // event identifier
        //   provider: Address,          // account that burned shares and got both assets back
        // ]
        //
        // body
        // [
        //   native_amount: u128,
        //   token_amount: u128,
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "remove_liquidity"), provider),
            (native_amount, token_amount),
        );
    }

    fn token_purchase(&self, buyer: Address, native_sold: u128, tokens_bought: u128) {
        // topics
        // [
        //   "token_purchase": Symbol, // event identifier
        //   buyer: Address,           // account that paid native
        // ]
        //
        // body
        // [
        //   native_sold: u128,
        //   tokens_bought: u128,
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "token_purchase"), buyer),
            (native_sold, tokens_bought),
        );
    }

    fn native_purchase(&self, buyer: Address, tokens_sold: u128, native_bought: u128) {
        // topics
        // [
        //   "native_purchase": Symbol, // event identifier
        //   buyer: Address,            // account that paid tokens
        // ]
        //
        // body
        // [
        //   tokens_sold: u128,
        //   native_bought: u128,
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "native_purchase"), buyer),
            (tokens_sold, native_bought),
        );
    }
}
