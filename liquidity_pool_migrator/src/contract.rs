use crate::errors::MigratorError;
use crate::storage::{get_legacy_exchange, get_router, set_legacy_exchange, set_router};
use crate::token::{approve, refund_and_revoke};
use amm_interfaces::legacy_exchange::LegacyExchangeClient;
use amm_interfaces::router::LiquidityPoolRouterClient;
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, Vec,
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Moves legacy exchange liquidity into native pairs"
);

#[contract]
pub struct LiquidityPoolMigrator;

#[contractimpl]
impl LiquidityPoolMigrator {
    // Initializes the migrator.
    //
    // # Arguments
    //
    // * `router` - The router used to deposit into native pairs.
    // * `legacy_exchanges` - Legacy exchanges to migrate from, indexed by their token.
    pub fn __constructor(e: Env, router: Address, legacy_exchanges: Vec<Address>) {
        set_router(&e, &router);
        for exchange in legacy_exchanges.iter() {
            let token = LegacyExchangeClient::new(&e, &exchange).token_address();
            set_legacy_exchange(&e, &token, &exchange);
        }
    }

    pub fn get_router(e: Env) -> Address {
        get_router(&e)
    }

    pub fn get_legacy_exchange(e: Env, token: Address) -> Option<Address> {
        get_legacy_exchange(&e, &token)
    }

    // Withdraws all legacy shares of the user and deposits the proceeds into the (token, wrapped native) pair.
    // The user has to approve the migrator on the legacy shares beforehand.
    //
    // # Arguments
    //
    // * `user` - The legacy share holder. Unused assets are returned to it.
    // * `token` - The token traded by the legacy exchange.
    // * `amount_token_min` - Lower bound of the token deposit.
    // * `amount_native_min` - Lower bound of the native deposit.
    // * `to` - The recipient of the new pool shares.
    // * `deadline` - Last timestamp at which the deposit can happen.
    //
    // # Returns
    //
    // A tuple of (token deposited, native deposited, shares minted).
    // All zero if the user holds no legacy shares.
    pub fn migrate(
        e: Env,
        user: Address,
        token: Address,
        amount_token_min: u128,
        amount_native_min: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128, u128) {
        user.require_auth();

        let exchange = match get_legacy_exchange(&e, &token) {
            Some(exchange) => exchange,
            None => panic_with_error!(&e, MigratorError::LegacyExchangeNotFound),
        };
        let migrator = e.current_contract_address();
        let shares = SorobanTokenClient::new(&e, &exchange);
        let liquidity = shares.balance(&user);
        if liquidity == 0 {
            return (0, 0, 0);
        }

        shares.transfer_from(&migrator, &user, &migrator, &liquidity);
        let (native_amount, token_amount) = LegacyExchangeClient::new(&e, &exchange)
            .remove_liquidity(&migrator, &(liquidity as u128), &1, &1, &u64::MAX);

        let router_address = get_router(&e);
        let router = LiquidityPoolRouterClient::new(&e, &router_address);
        let native = router.get_native();
        approve(&e, &token, &router_address, token_amount);
        approve(&e, &native, &router_address, native_amount);

        let (amount_token, amount_native, minted) = router.add_liquidity_native(
            &migrator,
            &token,
            &token_amount,
            &amount_token_min,
            &native_amount,
            &amount_native_min,
            &to,
            &deadline,
        );
        refund_and_revoke(&e, &token, &router_address, &user, token_amount, amount_token);
        refund_and_revoke(&e, &native, &router_address, &user, native_amount, amount_native);

        log!(&e, "migrate", user, token, liquidity, minted);
        (amount_token, amount_native, minted)
    }
}
