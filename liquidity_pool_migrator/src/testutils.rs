#![cfg(test)]
extern crate std;

use crate::LiquidityPoolMigratorClient;
use legacy_exchange::LegacyExchangeClient;
use liquidity_pool::LiquidityPoolClient;
use liquidity_pool_router::test_registry::register_pool;
use liquidity_pool_router::LiquidityPoolRouterClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{vec, Address, BytesN, Env};
use wrapped_native::WrappedNativeClient;

pub(crate) const E18: u128 = 1_000_000_000_000_000_000;

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) user: Address,
    pub(crate) token: SorobanTokenClient<'a>,
    pub(crate) native: SorobanTokenClient<'a>,
    pub(crate) wrapped: WrappedNativeClient<'a>,
    pub(crate) router: LiquidityPoolRouterClient<'a>,
    pub(crate) pool: LiquidityPoolClient<'a>,
    pub(crate) exchange: LegacyExchangeClient<'a>,
    pub(crate) migrator: LiquidityPoolMigratorClient<'a>,
}

impl Default for Setup<'_> {
    // Empty legacy exchange and empty (token, wrapped native) pair
    fn default() -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let user = Address::generate(&e);
        let token = create_token_contract(&e, &admin);
        let native = create_token_contract(&e, &admin);
        let wrapped = WrappedNativeClient::new(
            &e,
            &e.register(wrapped_native::WrappedNative {}, (native.address.clone(),)),
        );
        let router = LiquidityPoolRouterClient::new(
            &e,
            &e.register(
                liquidity_pool_router::LiquidityPoolRouter {},
                (BytesN::from_array(&e, &[0; 32]), wrapped.address.clone()),
            ),
        );
        let pool = LiquidityPoolClient::new(
            &e,
            &e.register(
                liquidity_pool::LiquidityPool {},
                (token.address.clone(), wrapped.address.clone()),
            ),
        );
        register_pool(
            &e,
            &router.address,
            &token.address,
            &wrapped.address,
            &pool.address,
        );
        let exchange = LegacyExchangeClient::new(
            &e,
            &e.register(
                legacy_exchange::LegacyExchange {},
                (token.address.clone(), native.address.clone()),
            ),
        );
        let migrator = LiquidityPoolMigratorClient::new(
            &e,
            &e.register(
                crate::LiquidityPoolMigrator {},
                (router.address.clone(), vec![&e, exchange.address.clone()]),
            ),
        );

        for asset in [&token, &native] {
            SorobanTokenAdminClient::new(&e, &asset.address).mint(&user, &(1_000 * E18 as i128));
        }
        token.approve(
            &user,
            &exchange.address,
            &i128::MAX,
            &(e.ledger().sequence() + 10_000),
        );

        Self {
            env: e,
            user,
            token,
            native,
            wrapped,
            router,
            pool,
            exchange,
            migrator,
        }
    }
}

impl Setup<'_> {
    // Deposits into the legacy exchange and lets the migrator move all of the user's shares.
    pub(crate) fn add_legacy_liquidity(&self, token_amount: u128, native_amount: u128) -> u128 {
        let liquidity = self.exchange.add_liquidity(
            &self.user,
            &1,
            &token_amount,
            &native_amount,
            &u64::MAX,
        );
        self.exchange.approve(
            &self.user,
            &self.migrator.address,
            &(liquidity as i128),
            &(self.env.ledger().sequence() + 100),
        );
        liquidity
    }

    // Deposits straight into the native pair.
    pub(crate) fn add_pool_liquidity(&self, token_amount: u128, native_amount: u128) -> u128 {
        self.token
            .transfer(&self.user, &self.pool.address, &(token_amount as i128));
        self.wrapped.deposit(&self.user, &(native_amount as i128));
        self.wrapped
            .transfer(&self.user, &self.pool.address, &(native_amount as i128));
        self.pool.mint(&self.user, &self.user)
    }
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}
