use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub(crate) struct Events(Env);

impl Events {
    #[inline(always)]
    pub(crate) fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub(crate) fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

pub(crate) trait LiquidityPoolRouterEvents {
    fn create_pool(&self, token0: Address, token1: Address, pool: Address);
}

impl LiquidityPoolRouterEvents for Events {
    fn create_pool(&self, token0: Address, token1: Address, pool: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "create_pool"), token0, token1),
            pool,
        );
    }
}
