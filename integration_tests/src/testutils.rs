#![cfg(test)]
extern crate std;

use amm_interfaces::flash_swap::FlashSwapContext;
use flash_swap_example::FlashSwapExampleClient;
use legacy_exchange::LegacyExchangeClient;
use liquidity_pool::LiquidityPoolClient;
use liquidity_pool_migrator::LiquidityPoolMigratorClient;
use liquidity_pool_router::test_registry::register_pool;
use liquidity_pool_router::LiquidityPoolRouterClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{contract, contractimpl, vec, Address, Bytes, BytesN, Env};
use wrapped_native::WrappedNativeClient;

pub(crate) const E18: u128 = 1_000_000_000_000_000_000;

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) admin: Address,
    pub(crate) native: SorobanTokenClient<'a>,
    pub(crate) wrapped: WrappedNativeClient<'a>,
    pub(crate) router: LiquidityPoolRouterClient<'a>,
    pub(crate) token: SorobanTokenClient<'a>,
    // (token, wrapped native) pair
    pub(crate) pool: LiquidityPoolClient<'a>,
    pub(crate) exchange: LegacyExchangeClient<'a>,
    pub(crate) migrator: LiquidityPoolMigratorClient<'a>,
    pub(crate) flash: FlashSwapExampleClient<'a>,
}

impl Default for Setup<'_> {
    // Whole deployment around a single token: legacy exchange, native pair, migrator and flash receiver
    fn default() -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
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
        let token = create_token_contract(&e, &admin);
        let pool = create_pool(&e, &router.address, &token.address, &wrapped.address);
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
                liquidity_pool_migrator::LiquidityPoolMigrator {},
                (router.address.clone(), vec![&e, exchange.address.clone()]),
            ),
        );
        let flash = FlashSwapExampleClient::new(
            &e,
            &e.register(
                flash_swap_example::FlashSwapExample {},
                (router.address.clone(), vec![&e, exchange.address.clone()]),
            ),
        );

        Self {
            env: e,
            admin,
            native,
            wrapped,
            router,
            token,
            pool,
            exchange,
            migrator,
            flash,
        }
    }
}

impl Setup<'_> {
    // New account holding `amount` of the token and of native, with the router and the
    // legacy exchange approved on the token and the router approved on native.
    pub(crate) fn funded_user(&self, amount: u128) -> Address {
        let user = Address::generate(&self.env);
        let expiration = self.env.ledger().sequence() + 10_000;
        for asset in [&self.token, &self.native] {
            SorobanTokenAdminClient::new(&self.env, &asset.address).mint(&user, &(amount as i128));
            asset.approve(&user, &self.router.address, &i128::MAX, &expiration);
        }
        self.token
            .approve(&user, &self.exchange.address, &i128::MAX, &expiration);
        user
    }

    pub(crate) fn pool_reserves(&self) -> (u128, u128) {
        let (reserve0, reserve1, _) = self.pool.get_reserves();
        if self.pool.token0() == self.token.address {
            (reserve0, reserve1)
        } else {
            (reserve1, reserve0)
        }
    }

    pub(crate) fn outputs(&self, amount_token: u128, amount_native: u128) -> (u128, u128) {
        if self.pool.token0() == self.token.address {
            (amount_token, amount_native)
        } else {
            (amount_native, amount_token)
        }
    }
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

pub(crate) fn get_token_admin_client<'a>(
    e: &Env,
    address: &Address,
) -> SorobanTokenAdminClient<'a> {
    SorobanTokenAdminClient::new(e, address)
}

// Keeps whatever it borrows.
#[contract]
pub(crate) struct Borrower;

#[contractimpl]
impl Borrower {
    pub fn on_flash_swap(_e: Env, _context: FlashSwapContext, _data: Bytes) {}
}
