use crate::errors::LegacyExchangeError;
use crate::events::{Events, LegacyExchangeEvents};
use crate::exchange_interface::{PricingTrait, ShareTokenTrait};
use crate::storage::{get_native, get_token, set_native, set_token, MIN_INITIAL_NATIVE};
use crate::token::{get_reserves, receive_native, receive_token, send_native, send_token};
use amm_interfaces::legacy_exchange::LegacyExchangeInterface;
use liquidity_pool_math::{get_amount_in, get_amount_out};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{contract, contractimpl, contractmeta, panic_with_error, Address, Env, String};
use soroban_token_sdk::TokenUtils;
use token_share::allowance::{read_allowance, spend_allowance, write_allowance};
use token_share::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use token_share::{
    burn_shares, check_nonnegative_amount, mint_shares, read_balance, total_shares,
    transfer_shares,
};
use utils::bump::bump_instance;

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Token to native exchange with the legacy liquidity share format"
);

fn check_deadline(e: &Env, deadline: u64) {
    if e.ledger().timestamp() > deadline {
        panic_with_error!(e, LegacyExchangeError::Expired);
    }
}

fn check_positive(e: &Env, amounts: &[u128]) {
    if amounts.iter().any(|amount| *amount == 0) {
        panic_with_error!(e, LegacyExchangeError::ZeroAmount);
    }
}

fn input_price(e: &Env, input_amount: u128, input_reserve: u128, output_reserve: u128) -> u128 {
    check_positive(e, &[input_amount]);
    if input_reserve == 0 || output_reserve == 0 {
        panic_with_error!(e, LegacyExchangeError::EmptyReserves);
    }
    get_amount_out(e, input_amount, input_reserve, output_reserve)
}

#[contract]
pub struct LegacyExchange;

#[contractimpl]
impl LegacyExchange {
    // Initializes an empty exchange for a single token.
    //
    // # Arguments
    //
    // * `token` - The traded token.
    // * `native` - The native asset contract.
    pub fn __constructor(e: Env, token: Address, native: Address) {
        let decimal = SorobanTokenClient::new(&e, &native).decimals();
        set_token(&e, &token);
        set_native(&e, &native);
        write_metadata(
            &e,
            decimal,
            String::from_str(&e, "Legacy Exchange Share"),
            String::from_str(&e, "LEGACY"),
        );
    }
}

#[contractimpl]
impl LegacyExchangeInterface for LegacyExchange {
    fn token_address(e: Env) -> Address {
        get_token(&e)
    }

    // Deposits native and tokens at the current ratio and mints liquidity shares.
    //
    // # Arguments
    //
    // * `provider` - The depositor and recipient of the shares.
    // * `min_liquidity` - Minimum shares to mint. Ignored on the first deposit.
    // * `max_tokens` - Maximum tokens to deposit. The exact amount on the first deposit.
    // * `native_amount` - Native amount to deposit.
    // * `deadline` - Last timestamp at which the deposit is accepted.
    //
    // # Returns
    //
    // The amount of shares minted.
    fn add_liquidity(
        e: Env,
        provider: Address,
        min_liquidity: u128,
        max_tokens: u128,
        native_amount: u128,
        deadline: u64,
    ) -> u128 {
        provider.require_auth();
        bump_instance(&e);

        check_deadline(&e, deadline);
        check_positive(&e, &[max_tokens, native_amount]);

        let total = total_shares(&e);
        let (native_reserve, token_reserve) = get_reserves(&e);
        let (token_amount, liquidity) = if total > 0 {
            check_positive(&e, &[min_liquidity]);
            if native_reserve == 0 {
                panic_with_error!(&e, LegacyExchangeError::EmptyReserves);
            }
            let token_amount = native_amount.fixed_mul_floor(&e, &token_reserve, &native_reserve) + 1;
            let minted = native_amount.fixed_mul_floor(&e, &total, &native_reserve);
            if token_amount > max_tokens {
                panic_with_error!(&e, LegacyExchangeError::MaxTokensExceeded);
            }
            if minted < min_liquidity {
                panic_with_error!(&e, LegacyExchangeError::MinLiquidityNotMet);
            }
            (token_amount, minted)
        } else {
            if native_amount < MIN_INITIAL_NATIVE {
                panic_with_error!(&e, LegacyExchangeError::InitialDepositTooSmall);
            }
            // the first provider owns everything already held by the exchange
            (max_tokens, native_reserve + native_amount)
        };

        receive_native(&e, &provider, native_amount);
        receive_token(&e, &provider, token_amount);
        mint_shares(&e, &provider, liquidity);

        Events::new(&e).add_liquidity(provider, native_amount, token_amount);
        liquidity
    }

    // Burns shares and returns the proportional part of both reserves.
    //
    // # Arguments
    //
    // * `provider` - The share holder and recipient of the assets.
    // * `amount` - Shares to burn.
    // * `min_native` - Minimum native to receive, must be positive.
    // * `min_tokens` - Minimum tokens to receive, must be positive.
    // * `deadline` - Last timestamp at which the withdrawal is accepted.
    //
    // # Returns
    //
    // A tuple of (native amount, token amount).
    fn remove_liquidity(
        e: Env,
        provider: Address,
        amount: u128,
        min_native: u128,
        min_tokens: u128,
        deadline: u64,
    ) -> (u128, u128) {
        provider.require_auth();
        bump_instance(&e);

        check_deadline(&e, deadline);
        check_positive(&e, &[amount, min_native, min_tokens]);

        let total = total_shares(&e);
        if total == 0 {
            panic_with_error!(&e, LegacyExchangeError::EmptyReserves);
        }
        let (native_reserve, token_reserve) = get_reserves(&e);
        let native_amount = amount.fixed_mul_floor(&e, &native_reserve, &total);
        let token_amount = amount.fixed_mul_floor(&e, &token_reserve, &total);
        if native_amount < min_native || token_amount < min_tokens {
            panic_with_error!(&e, LegacyExchangeError::OutputBelowMinimum);
        }

        burn_shares(&e, &provider, amount);
        send_native(&e, &provider, native_amount);
        send_token(&e, &provider, token_amount);

        Events::new(&e).remove_liquidity(provider, native_amount, token_amount);
        (native_amount, token_amount)
    }

    fn native_to_token_swap_input(
        e: Env,
        buyer: Address,
        native_sold: u128,
        min_tokens: u128,
        deadline: u64,
    ) -> u128 {
        buyer.require_auth();
        bump_instance(&e);

        check_deadline(&e, deadline);
        check_positive(&e, &[native_sold, min_tokens]);

        let (native_reserve, token_reserve) = get_reserves(&e);
        let tokens_bought = input_price(&e, native_sold, native_reserve, token_reserve);
        if tokens_bought < min_tokens {
            panic_with_error!(&e, LegacyExchangeError::OutputBelowMinimum);
        }

        receive_native(&e, &buyer, native_sold);
        send_token(&e, &buyer, tokens_bought);

        Events::new(&e).token_purchase(buyer, native_sold, tokens_bought);
        tokens_bought
    }

    fn token_to_native_swap_input(
        e: Env,
        seller: Address,
        tokens_sold: u128,
        min_native: u128,
        deadline: u64,
    ) -> u128 {
        seller.require_auth();
        bump_instance(&e);

        check_deadline(&e, deadline);
        check_positive(&e, &[tokens_sold, min_native]);

        let (native_reserve, token_reserve) = get_reserves(&e);
        let native_bought = input_price(&e, tokens_sold, token_reserve, native_reserve);
        if native_bought < min_native {
            panic_with_error!(&e, LegacyExchangeError::OutputBelowMinimum);
        }

        send_native(&e, &seller, native_bought);
        receive_token(&e, &seller, tokens_sold);

        Events::new(&e).native_purchase(seller, tokens_sold, native_bought);
        native_bought
    }

    fn get_native_to_token_input_price(e: Env, native_sold: u128) -> u128 {
        let (native_reserve, token_reserve) = get_reserves(&e);
        input_price(&e, native_sold, native_reserve, token_reserve)
    }

    fn get_token_to_native_input_price(e: Env, tokens_sold: u128) -> u128 {
        let (native_reserve, token_reserve) = get_reserves(&e);
        input_price(&e, tokens_sold, token_reserve, native_reserve)
    }
}

#[contractimpl]
impl PricingTrait for LegacyExchange {
    fn native_address(e: Env) -> Address {
        get_native(&e)
    }

    fn total_supply(e: Env) -> u128 {
        total_shares(&e)
    }

    fn get_input_price(
        e: Env,
        input_amount: u128,
        input_reserve: u128,
        output_reserve: u128,
    ) -> u128 {
        input_price(&e, input_amount, input_reserve, output_reserve)
    }

    fn get_output_price(
        e: Env,
        output_amount: u128,
        input_reserve: u128,
        output_reserve: u128,
    ) -> u128 {
        check_positive(&e, &[output_amount]);
        if input_reserve == 0 || output_reserve == 0 {
            panic_with_error!(&e, LegacyExchangeError::EmptyReserves);
        }
        get_amount_in(&e, output_amount, input_reserve, output_reserve)
    }
}

#[contractimpl]
impl ShareTokenTrait for LegacyExchange {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&e);
        read_allowance(&e, from, spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();

        check_nonnegative_amount(&e, amount);
        bump_instance(&e);

        write_allowance(&e, from.clone(), spender.clone(), amount, expiration_ledger);
        TokenUtils::new(&e)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        bump_instance(&e);
        read_balance(&e, id)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        bump_instance(&e);
        transfer_shares(&e, &from, &to, amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        check_nonnegative_amount(&e, amount);
        bump_instance(&e);

        spend_allowance(&e, from.clone(), spender, amount);
        transfer_shares(&e, &from, &to, amount);
    }

    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }
}
