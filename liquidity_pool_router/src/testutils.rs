#![cfg(test)]
extern crate std;

use crate::test_registry::register_pool;
use crate::LiquidityPoolRouterClient;
use liquidity_pool::LiquidityPoolClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{Address, BytesN, Env};
use wrapped_native::WrappedNativeClient;

pub(crate) const E18: u128 = 1_000_000_000_000_000_000;

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) user: Address,
    pub(crate) tokens: [SorobanTokenClient<'a>; 3],
    pub(crate) native: SorobanTokenClient<'a>,
    pub(crate) wrapped: WrappedNativeClient<'a>,
    pub(crate) router: LiquidityPoolRouterClient<'a>,
}

impl Default for Setup<'_> {
    // Router over three funded tokens and native, no pools yet
    fn default() -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let user = Address::generate(&e);

        let tokens = [
            create_token_contract(&e, &admin),
            create_token_contract(&e, &admin),
            create_token_contract(&e, &admin),
        ];
        let native = create_token_contract(&e, &admin);
        let wrapped = WrappedNativeClient::new(
            &e,
            &e.register(wrapped_native::WrappedNative {}, (native.address.clone(),)),
        );
        let router = LiquidityPoolRouterClient::new(
            &e,
            &e.register(
                crate::LiquidityPoolRouter {},
                (BytesN::from_array(&e, &[0; 32]), wrapped.address.clone()),
            ),
        );

        let setup = Self {
            env: e,
            user,
            tokens,
            native,
            wrapped,
            router,
        };
        for token in setup.tokens.iter().chain([&setup.native]) {
            SorobanTokenAdminClient::new(&setup.env, &token.address)
                .mint(&setup.user, &(1_000_000 * E18 as i128));
            setup.approve(token, i128::MAX);
        }
        setup
    }
}

impl Setup<'_> {
    // user approves the router
    pub(crate) fn approve(&self, token: &SorobanTokenClient, amount: i128) {
        token.approve(
            &self.user,
            &self.router.address,
            &amount,
            &(self.env.ledger().sequence() + 10_000),
        );
    }

    // Registers a pool for the pair and records it in the router registry.
    pub(crate) fn create_pool(&self, token_a: &Address, token_b: &Address) -> LiquidityPoolClient {
        let e = &self.env;
        let pool = e.register(
            liquidity_pool::LiquidityPool {},
            (token_a.clone(), token_b.clone()),
        );
        register_pool(e, &self.router.address, token_a, token_b, &pool);
        LiquidityPoolClient::new(e, &pool)
    }

    pub(crate) fn create_pool_with_liquidity(
        &self,
        token_a: &Address,
        token_b: &Address,
        amount_a: u128,
        amount_b: u128,
    ) -> LiquidityPoolClient {
        let pool = self.create_pool(token_a, token_b);
        self.router.add_liquidity(
            &self.user,
            token_a,
            token_b,
            &amount_a,
            &amount_b,
            &0,
            &0,
            &self.user,
            &u64::MAX,
        );
        pool
    }

    pub(crate) fn assert_router_empty(&self) {
        assert_eq!(self.native.balance(&self.router.address), 0);
        assert_eq!(self.wrapped.balance(&self.router.address), 0);
        for token in self.tokens.iter() {
            assert_eq!(token.balance(&self.router.address), 0);
        }
    }
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}
