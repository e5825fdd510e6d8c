#![cfg(test)]
extern crate std;

use crate::LegacyExchangeClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{Address, Env};

pub(crate) const E18: u128 = 1_000_000_000_000_000_000;

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) user: Address,
    pub(crate) token: SorobanTokenClient<'a>,
    pub(crate) native: SorobanTokenClient<'a>,
    pub(crate) exchange: LegacyExchangeClient<'a>,
}

impl Default for Setup<'_> {
    // Empty exchange, user funded and approved on the token
    fn default() -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let user = Address::generate(&e);
        let token = create_token_contract(&e, &admin);
        let native = create_token_contract(&e, &admin);
        let exchange = LegacyExchangeClient::new(
            &e,
            &e.register(
                crate::LegacyExchange {},
                (token.address.clone(), native.address.clone()),
            ),
        );

        let setup = Self {
            env: e,
            user,
            token,
            native,
            exchange,
        };
        for asset in [&setup.token, &setup.native] {
            SorobanTokenAdminClient::new(&setup.env, &asset.address)
                .mint(&setup.user, &(1_000 * E18 as i128));
        }
        setup.approve_token(&setup.user);
        setup
    }
}

impl Setup<'_> {
    pub(crate) fn approve_token(&self, owner: &Address) {
        self.token.approve(
            owner,
            &self.exchange.address,
            &i128::MAX,
            &(self.env.ledger().sequence() + 10_000),
        );
    }

    pub(crate) fn add_liquidity(&self, native_amount: u128, max_tokens: u128) -> u128 {
        self.exchange
            .add_liquidity(&self.user, &1, &max_tokens, &native_amount, &u64::MAX)
    }

    pub(crate) fn reserves(&self) -> (i128, i128) {
        (
            self.native.balance(&self.exchange.address),
            self.token.balance(&self.exchange.address),
        )
    }
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}
