#![cfg(test)]
extern crate std;

use crate::FlashSwapExampleClient;
use legacy_exchange::LegacyExchangeClient;
use liquidity_pool::LiquidityPoolClient;
use liquidity_pool_router::test_registry::register_pool;
use liquidity_pool_router::LiquidityPoolRouterClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{vec, Address, Bytes, BytesN, Env};
use wrapped_native::WrappedNativeClient;

pub(crate) const E18: u128 = 1_000_000_000_000_000_000;

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) user: Address,
    pub(crate) token: SorobanTokenClient<'a>,
    pub(crate) native: SorobanTokenClient<'a>,
    pub(crate) wrapped: WrappedNativeClient<'a>,
    pub(crate) router: LiquidityPoolRouterClient<'a>,
    // (token, wrapped native) pair
    pub(crate) pool: LiquidityPoolClient<'a>,
    // legacy (token, native) exchange
    pub(crate) exchange: LegacyExchangeClient<'a>,
    pub(crate) flash: FlashSwapExampleClient<'a>,
}

impl Default for Setup<'_> {
    // Empty pair and legacy exchange for the same token, user funded
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
        let pool = create_pool(&e, &router.address, &token.address, &wrapped.address);
        let exchange = LegacyExchangeClient::new(
            &e,
            &e.register(
                legacy_exchange::LegacyExchange {},
                (token.address.clone(), native.address.clone()),
            ),
        );
        let flash = FlashSwapExampleClient::new(
            &e,
            &e.register(
                crate::FlashSwapExample {},
                (router.address.clone(), vec![&e, exchange.address.clone()]),
            ),
        );

        for asset in [&token, &native] {
            SorobanTokenAdminClient::new(&e, &asset.address)
                .mint(&user, &(100_000 * E18 as i128));
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
            flash,
        }
    }
}

impl Setup<'_> {
    pub(crate) fn add_legacy_liquidity(&self, token_amount: u128, native_amount: u128) {
        self.exchange.add_liquidity(
            &self.user,
            &1,
            &token_amount,
            &native_amount,
            &u64::MAX,
        );
    }

    pub(crate) fn add_pool_liquidity(&self, token_amount: u128, native_amount: u128) {
        self.token
            .transfer(&self.user, &self.pool.address, &(token_amount as i128));
        self.wrapped.deposit(&self.user, &(native_amount as i128));
        self.wrapped
            .transfer(&self.user, &self.pool.address, &(native_amount as i128));
        self.pool.mint(&self.user, &self.user);
    }

    // Pair outputs in pool order for the given (token, wrapped native) amounts.
    pub(crate) fn outputs(&self, amount_token: u128, amount_native: u128) -> (u128, u128) {
        if self.pool.token0() == self.token.address {
            (amount_token, amount_native)
        } else {
            (amount_native, amount_token)
        }
    }

    pub(crate) fn flash_swap(&self, amount_token: u128, amount_native: u128) {
        let (amount0_out, amount1_out) = self.outputs(amount_token, amount_native);
        self.pool.swap(
            &self.user,
            &amount0_out,
            &amount1_out,
            &self.flash.address,
            &min_out(&self.env, 1),
        );
    }

    // Token units per native unit on the legacy exchange, truncated
    pub(crate) fn legacy_price(&self) -> i128 {
        self.token.balance(&self.exchange.address) / self.native.balance(&self.exchange.address)
    }

    // Token units per native unit in the pair, truncated
    pub(crate) fn pool_price(&self) -> i128 {
        self.token.balance(&self.pool.address) / self.wrapped.balance(&self.pool.address)
    }

    pub(crate) fn assert_flash_empty(&self) {
        assert_eq!(self.token.balance(&self.flash.address), 0);
        assert_eq!(self.native.balance(&self.flash.address), 0);
        assert_eq!(self.wrapped.balance(&self.flash.address), 0);
    }
}

pub(crate) fn min_out(e: &Env, amount: u128) -> Bytes {
    amount.to_xdr(e)
}

pub(crate) fn create_pool<'a>(
    e: &Env,
    router: &Address,
    token_a: &Address,
    token_b: &Address,
) -> LiquidityPoolClient<'a> {
    let pool = e.register(
        liquidity_pool::LiquidityPool {},
        (token_a.clone(), token_b.clone()),
    );
    register_pool(e, router, token_a, token_b, &pool);
    LiquidityPoolClient::new(e, &pool)
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}
