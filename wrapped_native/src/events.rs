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

pub trait WrappedNativeEvents {
    fn deposit(&self, from: Address, amount: i128);

    fn withdraw(&self, from: Address, amount: i128);
}

impl WrappedNativeEvents for Events {
    fn deposit(&self, from: Address, amount: i128) {
        // topics
        // [
        //   "deposit": Symbol,  // event identifier
        //   from: Address,      // account that locked native and received wrapped tokens
        // ]
        //
        // body
        // amount: i128
        let e = self.env();
        e.events()
            .publish((Symbol::new(e, "deposit"), from), amount);
    }

    fn withdraw(&self, from: Address, amount: i128) {
        // topics
        // [
        //   "withdraw": Symbol, // event identifier
        //   from: Address,      // account that burned wrapped tokens and got native back
        // ]
        //
        // body
        // amount: i128
        let e = self.env();
        e.events()
            .publish((Symbol::new(e, "withdraw"), from), amount);
    }
}
