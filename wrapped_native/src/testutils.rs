#![cfg(test)]
extern crate std;
use crate::WrappedNativeClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{Address, Env};

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) user: Address,
    pub(crate) native: SorobanTokenClient<'a>,
    pub(crate) wrapped: WrappedNativeClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let user = Address::generate(&e);
        let native = SorobanTokenClient::new(
            &e,
            &e.register_stellar_asset_contract_v2(admin).address(),
        );
        SorobanTokenAdminClient::new(&e, &native.address).mint(&user, &1_000_0000000);

        let wrapped = WrappedNativeClient::new(
            &e,
            &e.register(crate::WrappedNative {}, (native.address.clone(),)),
        );

        Self {
            env: e,
            user,
            native,
            wrapped,
        }
    }
}
