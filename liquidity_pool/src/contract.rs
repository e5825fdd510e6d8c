use crate::errors::LiquidityPoolError;
use crate::oracle::{check_reserve_bounds, update_reserves};
use crate::pool_interface::{LiquidityPoolTrait, PermitTrait, ShareTokenTrait};
use crate::storage::{
    get_block_timestamp_last, get_price0_cumulative_last, get_price1_cumulative_last,
    get_reserve0, get_reserve1, get_token0, get_token1, set_token0, set_token1,
};
use crate::token::{get_balances, transfer_0, transfer_1};
use amm_interfaces::flash_swap::{FlashSwapContext, SwapReceiverClient};
use liquidity_pool_events::{Events as PoolEvents, LiquidityPoolEvents};
use liquidity_pool_math::{sort_tokens, FEE_MULTIPLIER, MINIMUM_LIQUIDITY, MULTIPLIER_WITH_FEE};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, Bytes, BytesN, Env,
    String, U256,
};
use soroban_token_sdk::TokenUtils;
use token_share::allowance::{read_allowance, spend_allowance, write_allowance};
use token_share::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use token_share::nonce::read_nonce;
use token_share::permit::{current_permit_digest, permit};
use token_share::{
    burn_shares, check_nonnegative_amount, get_user_balance_shares, mint_shares, read_balance,
    total_shares, transfer_shares, zero_address,
};
use utils::bump::bump_instance;
use utils::u256_math::ExtraMath;

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Constant product pair with flash swaps and price accumulators"
);

#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPool {
    // Initializes the pair.
    //
    // # Arguments
    //
    // * `token_a` - One of the pair tokens.
    // * `token_b` - The other pair token. Order does not matter, tokens are stored sorted.
    pub fn __constructor(e: Env, token_a: Address, token_b: Address) {
        let (token0, token1) = sort_tokens(&e, &token_a, &token_b);
        set_token0(&e, &token0);
        set_token1(&e, &token1);

        write_metadata(
            &e,
            7,
            String::from_str(&e, "Pool Share Token"),
            String::from_str(&e, "POOL"),
        );
    }
}

#[contractimpl]
impl LiquidityPoolTrait for LiquidityPool {
    fn get_tokens(e: Env) -> (Address, Address) {
        (get_token0(&e), get_token1(&e))
    }

    fn token0(e: Env) -> Address {
        get_token0(&e)
    }

    fn token1(e: Env) -> Address {
        get_token1(&e)
    }

    fn get_reserves(e: Env) -> (u128, u128, u64) {
        (
            get_reserve0(&e),
            get_reserve1(&e),
            get_block_timestamp_last(&e),
        )
    }

    fn price0_cumulative_last(e: Env) -> U256 {
        get_price0_cumulative_last(&e)
    }

    fn price1_cumulative_last(e: Env) -> U256 {
        get_price1_cumulative_last(&e)
    }

    fn total_supply(e: Env) -> u128 {
        total_shares(&e)
    }

    // Mints pool shares for the tokens deposited since the last reserve update.
    //
    // # Arguments
    //
    // * `sender` - The address reported in the mint event.
    // * `to` - The recipient of the new shares.
    //
    // # Returns
    //
    // The amount of shares minted.
    fn mint(e: Env, sender: Address, to: Address) -> u128 {
        sender.require_auth();

        let (reserve0, reserve1) = (get_reserve0(&e), get_reserve1(&e));
        let (balance0, balance1) = get_balances(&e);
        let amount0 = balance0.saturating_sub(reserve0);
        let amount1 = balance1.saturating_sub(reserve1);

        let total_shares = total_shares(&e);
        let liquidity = if total_shares == 0 {
            let root = U256::from_u128(&e, amount0)
                .mul(&U256::from_u128(&e, amount1))
                .sqrt()
                .to_u128_checked();
            if root <= MINIMUM_LIQUIDITY {
                panic_with_error!(&e, LiquidityPoolError::InsufficientLiquidityMinted);
            }
            // first MINIMUM_LIQUIDITY shares are locked forever
            mint_shares(&e, &zero_address(&e), MINIMUM_LIQUIDITY);
            root - MINIMUM_LIQUIDITY
        } else {
            let shares_0 = amount0.fixed_mul_floor(&e, &total_shares, &reserve0);
            let shares_1 = amount1.fixed_mul_floor(&e, &total_shares, &reserve1);
            shares_0.min(shares_1)
        };

        if liquidity == 0 {
            panic_with_error!(&e, LiquidityPoolError::InsufficientLiquidityMinted);
        }
        mint_shares(&e, &to, liquidity);

        update_reserves(&e, balance0, balance1, reserve0, reserve1);
        PoolEvents::new(&e).mint(sender, amount0, amount1);

        liquidity
    }

    // Burns the shares previously transferred to the pool.
    //
    // # Arguments
    //
    // * `sender` - The address reported in the burn event.
    // * `to` - The recipient of the underlying tokens.
    //
    // # Returns
    //
    // The amounts of token0 and token1 sent to `to`.
    fn burn(e: Env, sender: Address, to: Address) -> (u128, u128) {
        sender.require_auth();

        let pool = e.current_contract_address();
        let (reserve0, reserve1) = (get_reserve0(&e), get_reserve1(&e));
        let (balance0, balance1) = get_balances(&e);
        let liquidity = get_user_balance_shares(&e, &pool);

        let total_shares = total_shares(&e);
        if total_shares == 0 {
            panic_with_error!(&e, LiquidityPoolError::InsufficientLiquidityBurned);
        }
        let amount0 = liquidity.fixed_mul_floor(&e, &balance0, &total_shares);
        let amount1 = liquidity.fixed_mul_floor(&e, &balance1, &total_shares);
        if amount0 == 0 || amount1 == 0 {
            panic_with_error!(&e, LiquidityPoolError::InsufficientLiquidityBurned);
        }

        burn_shares(&e, &pool, liquidity);
        transfer_0(&e, &to, amount0);
        transfer_1(&e, &to, amount1);

        let (balance0, balance1) = get_balances(&e);
        update_reserves(&e, balance0, balance1, reserve0, reserve1);
        PoolEvents::new(&e).burn(sender, amount0, amount1, to);

        (amount0, amount1)
    }

    // Swaps tokens, optionally as a flash swap.
    //
    // # Arguments
    //
    // * `sender` - The address reported in the swap event and passed to the receiver.
    // * `amount0_out` - The amount of token0 to send out.
    // * `amount1_out` - The amount of token1 to send out.
    // * `to` - The recipient of the outputs. Must implement the swap receiver when `data` is set.
    // * `data` - Opaque payload for the receiver. Empty for a plain swap.
    fn swap(
        e: Env,
        sender: Address,
        amount0_out: u128,
        amount1_out: u128,
        to: Address,
        data: Bytes,
    ) {
        sender.require_auth();

        if amount0_out == 0 && amount1_out == 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientOutputAmount);
        }

        let (reserve0, reserve1) = (get_reserve0(&e), get_reserve1(&e));
        if amount0_out >= reserve0 || amount1_out >= reserve1 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientLiquidity);
        }

        let (token0, token1) = (get_token0(&e), get_token1(&e));
        if to == token0 || to == token1 {
            panic_with_error!(&e, LiquidityPoolError::InvalidTo);
        }

        // optimistic transfers, paid for after the callback
        transfer_0(&e, &to, amount0_out);
        transfer_1(&e, &to, amount1_out);

        if !data.is_empty() {
            log!(&e, "flash swap", to, amount0_out, amount1_out);
            SwapReceiverClient::new(&e, &to).on_flash_swap(
                &FlashSwapContext {
                    pool: e.current_contract_address(),
                    sender: sender.clone(),
                    token0,
                    token1,
                    reserve0,
                    reserve1,
                    amount0_out,
                    amount1_out,
                },
                &data,
            );
        }

        let (balance0, balance1) = get_balances(&e);
        check_reserve_bounds(&e, balance0, balance1);
        let amount0_in = balance0.saturating_sub(reserve0 - amount0_out);
        let amount1_in = balance1.saturating_sub(reserve1 - amount1_out);
        if amount0_in == 0 && amount1_in == 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InsufficientInputAmount);
        }

        // balances with the input fee taken out, scaled by FEE_MULTIPLIER
        let fee = U256::from_u128(&e, FEE_MULTIPLIER - MULTIPLIER_WITH_FEE);
        let multiplier = U256::from_u128(&e, FEE_MULTIPLIER);
        let adjusted0 = U256::from_u128(&e, balance0)
            .mul(&multiplier)
            .sub(&U256::from_u128(&e, amount0_in).mul(&fee));
        let adjusted1 = U256::from_u128(&e, balance1)
            .mul(&multiplier)
            .sub(&U256::from_u128(&e, amount1_in).mul(&fee));
        let old_invariant = U256::from_u128(&e, reserve0)
            .mul(&U256::from_u128(&e, reserve1))
            .mul(&multiplier.mul(&multiplier));
        if adjusted0.mul(&adjusted1) < old_invariant {
            panic_with_error!(&e, LiquidityPoolError::InvariantDoesNotHold);
        }

        update_reserves(&e, balance0, balance1, reserve0, reserve1);
        PoolEvents::new(&e).swap(
            sender,
            amount0_in,
            amount1_in,
            amount0_out,
            amount1_out,
            to,
        );
    }

    fn skim(e: Env, to: Address) {
        let (balance0, balance1) = get_balances(&e);
        transfer_0(&e, &to, balance0.saturating_sub(get_reserve0(&e)));
        transfer_1(&e, &to, balance1.saturating_sub(get_reserve1(&e)));
    }

    fn sync(e: Env) {
        let (balance0, balance1) = get_balances(&e);
        update_reserves(&e, balance0, balance1, get_reserve0(&e), get_reserve1(&e));
    }
}

#[contractimpl]
impl ShareTokenTrait for LiquidityPool {
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

#[contractimpl]
impl PermitTrait for LiquidityPool {
    fn nonces(e: Env, owner: Address) -> u64 {
        read_nonce(&e, &owner)
    }

    fn permit_digest(
        e: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
    ) -> BytesN<32> {
        current_permit_digest(&e, &owner, &spender, value, deadline)
    }

    // Sets `spender` allowance over the owner's shares without the owner authorizing the call.
    //
    // # Arguments
    //
    // * `owner` - The Stellar account granting the allowance.
    // * `spender` - The address allowed to spend the shares.
    // * `value` - The allowance amount.
    // * `deadline` - Last timestamp at which the signature is accepted.
    // * `public_key` - The ed25519 key of the owner account.
    // * `signature` - Signature of `permit_digest` for the current nonce.
    fn permit(
        e: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
        public_key: BytesN<32>,
        signature: BytesN<64>,
    ) {
        bump_instance(&e);
        permit(&e, owner, spender, value, deadline, public_key, signature);
    }
}
