use crate::errors::FlashSwapError;
use crate::storage::{get_legacy_exchange, get_router, set_legacy_exchange, set_router};
use crate::token::{approve, authorize_native_pull, transfer};
use amm_interfaces::flash_swap::{FlashSwapContext, SwapReceiver};
use amm_interfaces::legacy_exchange::LegacyExchangeClient;
use amm_interfaces::router::LiquidityPoolRouterClient;
use amm_interfaces::wrapped_native::WrappedNativeClient;
use liquidity_pool_math::get_amount_in;
use soroban_sdk::xdr::{FromXdr, ToXdr};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, Bytes, Env, Vec,
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Flash swap receiver trading borrowed assets on legacy exchanges"
);

// One side of a native pair as seen by the receiver
struct Leg {
    token: Address,
    reserve_token: u128,
    reserve_native: u128,
    amount_token: u128,
    amount_native: u128,
}

fn split_pair(e: &Env, context: &FlashSwapContext, wrapped: &Address) -> Leg {
    if context.token0 == *wrapped {
        Leg {
            token: context.token1.clone(),
            reserve_token: context.reserve1,
            reserve_native: context.reserve0,
            amount_token: context.amount1_out,
            amount_native: context.amount0_out,
        }
    } else if context.token1 == *wrapped {
        Leg {
            token: context.token0.clone(),
            reserve_token: context.reserve0,
            reserve_native: context.reserve1,
            amount_token: context.amount0_out,
            amount_native: context.amount1_out,
        }
    } else {
        panic_with_error!(e, FlashSwapError::UnsupportedPair)
    }
}

// Malformed XDR traps the host rather than failing `from_xdr`, so the
// length and value tag are checked against an encoded u128 first.
fn decode_min_out(e: &Env, data: &Bytes) -> u128 {
    let encoded = 0u128.to_xdr(e);
    if data.len() != encoded.len() || data.slice(0..4) != encoded.slice(0..4) {
        panic_with_error!(e, FlashSwapError::InvalidSwapRequest);
    }
    match u128::from_xdr(e, data) {
        Ok(min_out) => min_out,
        Err(_) => panic_with_error!(e, FlashSwapError::InvalidSwapRequest),
    }
}

fn profit(e: &Env, received: u128, required: u128) -> u128 {
    if received <= required {
        panic_with_error!(e, FlashSwapError::InsufficientProfit);
    }
    received - required
}

#[contract]
pub struct FlashSwapExample;

#[contractimpl]
impl FlashSwapExample {
    // Initializes the receiver.
    //
    // # Arguments
    //
    // * `router` - The router whose registry identifies trusted pools.
    // * `legacy_exchanges` - Legacy exchanges to trade on, indexed by their token.
    pub fn __constructor(e: Env, router: Address, legacy_exchanges: Vec<Address>) {
        set_router(&e, &router);
        for exchange in legacy_exchanges.iter() {
            let token = LegacyExchangeClient::new(&e, &exchange).token_address();
            set_legacy_exchange(&e, &token, &exchange);
        }
    }
}

#[contractimpl]
impl SwapReceiver for FlashSwapExample {
    // Sells the borrowed asset on the legacy exchange, repays the pool and sends the rest to the swap sender.
    //
    // # Arguments
    //
    // * `context` - The pending swap. Reserves are the ones before the optimistic transfer.
    // * `data` - XDR encoded u128, the minimum accepted from the legacy exchange.
    fn on_flash_swap(e: Env, context: FlashSwapContext, data: Bytes) {
        context.pool.require_auth();

        let router = LiquidityPoolRouterClient::new(&e, &get_router(&e));
        if router.get_pool(&context.token0, &context.token1) != Some(context.pool.clone()) {
            panic_with_error!(&e, FlashSwapError::Unauthorized);
        }
        if (context.amount0_out == 0) == (context.amount1_out == 0) {
            panic_with_error!(&e, FlashSwapError::InvalidSwapRequest);
        }
        let min_out = decode_min_out(&e, &data);

        let wrapped = router.get_wrapped_native();
        let native = router.get_native();
        let leg = split_pair(&e, &context, &wrapped);
        let exchange_address = match get_legacy_exchange(&e, &leg.token) {
            Some(exchange) => exchange,
            None => panic_with_error!(&e, FlashSwapError::UnsupportedPair),
        };
        let exchange = LegacyExchangeClient::new(&e, &exchange_address);
        let wrapped_client = WrappedNativeClient::new(&e, &wrapped);
        let this = e.current_contract_address();

        if leg.amount_token > 0 {
            approve(&e, &leg.token, &exchange_address, leg.amount_token);
            let received =
                exchange.token_to_native_swap_input(&this, &leg.amount_token, &min_out, &u64::MAX);
            let required = get_amount_in(&e, leg.amount_token, leg.reserve_native, leg.reserve_token);
            let gain = profit(&e, received, required);

            authorize_native_pull(&e, &native, &wrapped, required);
            wrapped_client.deposit(&this, &(required as i128));
            transfer(&e, &wrapped, &context.pool, required);
            transfer(&e, &native, &context.sender, gain);
            log!(&e, "flash swap repaid in native", context.pool, required, gain);
        } else {
            wrapped_client.withdraw(&this, &(leg.amount_native as i128));
            authorize_native_pull(&e, &native, &exchange_address, leg.amount_native);
            let received =
                exchange.native_to_token_swap_input(&this, &leg.amount_native, &min_out, &u64::MAX);
            let required = get_amount_in(&e, leg.amount_native, leg.reserve_token, leg.reserve_native);
            let gain = profit(&e, received, required);

            transfer(&e, &leg.token, &context.pool, required);
            transfer(&e, &leg.token, &context.sender, gain);
            log!(&e, "flash swap repaid in token", context.pool, required, gain);
        }
    }
}
