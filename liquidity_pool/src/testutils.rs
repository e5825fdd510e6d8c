#![cfg(test)]
extern crate std;
use crate::LiquidityPoolClient;
use amm_interfaces::flash_swap::FlashSwapContext;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::xdr::FromXdr;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, Env};
use std::vec;

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) users: vec::Vec<Address>,
    pub(crate) token0: SorobanTokenClient<'a>,
    pub(crate) token0_admin_client: SorobanTokenAdminClient<'a>,
    pub(crate) token1: SorobanTokenClient<'a>,
    pub(crate) token1_admin_client: SorobanTokenAdminClient<'a>,
    pub(crate) pool: LiquidityPoolClient<'a>,
}

impl Default for Setup<'_> {
    // Create pool over two fresh tokens, sorted, and fund the users
    fn default() -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let users = vec![Address::generate(&e), Address::generate(&e)];

        let admin = Address::generate(&e);
        let mut token0 = create_token_contract(&e, &admin);
        let mut token1 = create_token_contract(&e, &admin);
        if token1.address < token0.address {
            std::mem::swap(&mut token0, &mut token1);
        }
        let token0_admin_client = get_token_admin_client(&e, &token0.address);
        let token1_admin_client = get_token_admin_client(&e, &token1.address);

        // reversed on purpose, the pool sorts
        let pool = create_pool_contract(&e, &token1.address, &token0.address);

        for user in users.iter() {
            token0_admin_client.mint(user, &(i128::MAX / 4));
            token1_admin_client.mint(user, &(i128::MAX / 4));
        }

        Self {
            env: e,
            users,
            token0,
            token0_admin_client,
            token1,
            token1_admin_client,
            pool,
        }
    }
}

impl Setup<'_> {
    // transfer tokens into the pool and mint shares
    pub(crate) fn add_liquidity(&self, user: &Address, amount0: u128, amount1: u128) -> u128 {
        self.token0
            .transfer(user, &self.pool.address, &(amount0 as i128));
        self.token1
            .transfer(user, &self.pool.address, &(amount1 as i128));
        self.pool.mint(user, user)
    }

    pub(crate) fn reserves(&self) -> (u128, u128) {
        let (reserve0, reserve1, _) = self.pool.get_reserves();
        (reserve0, reserve1)
    }
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

pub(crate) fn create_pool_contract<'a>(
    e: &Env,
    token_a: &Address,
    token_b: &Address,
) -> LiquidityPoolClient<'a> {
    LiquidityPoolClient::new(
        e,
        &e.register(crate::LiquidityPool {}, (token_a.clone(), token_b.clone())),
    )
}

#[derive(Clone)]
#[contracttype]
enum ReceiverKey {
    LastContext,
}

// Pays the pool back the amount encoded in `data`, in the token that was borrowed.
#[contract]
pub(crate) struct RepayingReceiver;

#[contractimpl]
impl RepayingReceiver {
    pub fn on_flash_swap(e: Env, context: FlashSwapContext, data: Bytes) {
        let repay = u128::from_xdr(&e, &data).unwrap();
        let token = if context.amount0_out > 0 {
            context.token0.clone()
        } else {
            context.token1.clone()
        };
        SorobanTokenClient::new(&e, &token).transfer(
            &e.current_contract_address(),
            &context.pool,
            &(repay as i128),
        );
        e.storage()
            .instance()
            .set(&ReceiverKey::LastContext, &context);
    }

    pub fn last_context(e: Env) -> Option<FlashSwapContext> {
        e.storage().instance().get(&ReceiverKey::LastContext)
    }
}

pub(crate) use reentering::ReenteringReceiver;

// Separate module, both receivers export `on_flash_swap`.
mod reentering {
    use crate::LiquidityPoolClient;
    use amm_interfaces::flash_swap::FlashSwapContext;
    use soroban_sdk::{contract, contractimpl, Bytes, Env};

    // Tries to use the pool while the swap is still in progress.
    #[contract]
    pub(crate) struct ReenteringReceiver;

    #[contractimpl]
    impl ReenteringReceiver {
        pub fn on_flash_swap(e: Env, context: FlashSwapContext, _data: Bytes) {
            LiquidityPoolClient::new(&e, &context.pool).sync();
        }
    }
}
