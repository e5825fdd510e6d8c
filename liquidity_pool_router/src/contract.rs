use crate::errors::LiquidityPoolRouterError;
use crate::pool_utils::{
    deploy_pool, get_amounts_in, get_amounts_out, get_or_deploy_pool, get_pool,
    get_pool_or_panic, get_reserves, swap_path,
};
use crate::router_interface::{LiquidityTrait, PoolsRegistryTrait, QuoteTrait, SwapTrait};
use crate::storage::{
    get_native, get_pool_hash, get_wrapped_native, set_native, set_pool_hash, set_wrapped_native,
    PermitSignature,
};
use crate::token::{
    transfer_from_router, transfer_from_user, unwrap_native_to, wrap_native_from_user,
};
use amm_interfaces::pool::LiquidityPoolClient;
use amm_interfaces::router::LiquidityPoolRouterInterface;
use amm_interfaces::wrapped_native::WrappedNativeClient;
use liquidity_pool_math::sort_tokens;
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{contract, contractimpl, contractmeta, panic_with_error, Address, BytesN, Env, Vec};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Pair registry, quotes and guarded liquidity and swap flows"
);

fn ensure_deadline(e: &Env, deadline: u64) {
    if e.ledger().timestamp() > deadline {
        panic_with_error!(e, LiquidityPoolRouterError::Expired);
    }
}

fn require_path_start(e: &Env, path: &Vec<Address>, token: &Address) {
    if path.first() != Some(token.clone()) {
        panic_with_error!(e, LiquidityPoolValidationError::InvalidPath);
    }
}

fn require_path_end(e: &Env, path: &Vec<Address>, token: &Address) {
    if path.last() != Some(token.clone()) {
        panic_with_error!(e, LiquidityPoolValidationError::InvalidPath);
    }
}

fn last_amount(amounts: &Vec<u128>) -> u128 {
    amounts.get_unchecked(amounts.len() - 1)
}

// Picks deposit amounts matching the pool ratio. Returns (pool, amount_a, amount_b).
fn calc_liquidity_amounts(
    e: &Env,
    token_a: &Address,
    token_b: &Address,
    amount_a_desired: u128,
    amount_b_desired: u128,
    amount_a_min: u128,
    amount_b_min: u128,
) -> (Address, u128, u128) {
    let pool = get_or_deploy_pool(e, token_a, token_b);
    let (reserve_a, reserve_b) = get_reserves(e, &pool, token_a, token_b);
    if reserve_a == 0 && reserve_b == 0 {
        return (pool, amount_a_desired, amount_b_desired);
    }

    let amount_b_optimal = liquidity_pool_math::quote(e, amount_a_desired, reserve_a, reserve_b);
    if amount_b_optimal <= amount_b_desired {
        if amount_b_optimal < amount_b_min {
            panic_with_error!(e, LiquidityPoolRouterError::InsufficientBAmount);
        }
        return (pool, amount_a_desired, amount_b_optimal);
    }

    let amount_a_optimal = liquidity_pool_math::quote(e, amount_b_desired, reserve_b, reserve_a);
    if amount_a_optimal > amount_a_desired || amount_a_optimal < amount_a_min {
        panic_with_error!(e, LiquidityPoolRouterError::InsufficientAAmount);
    }
    (pool, amount_a_optimal, amount_b_desired)
}

// Sends the user's shares to the pool and burns them.
// Returns amounts in (token_a, token_b) order.
fn burn_liquidity(
    e: &Env,
    user: &Address,
    token_a: &Address,
    token_b: &Address,
    liquidity: u128,
    amount_a_min: u128,
    amount_b_min: u128,
    to: &Address,
) -> (u128, u128) {
    let router = e.current_contract_address();
    let pool = get_pool_or_panic(e, token_a, token_b);
    SorobanTokenClient::new(e, &pool).transfer_from(&router, user, &pool, &(liquidity as i128));
    let (amount0, amount1) = LiquidityPoolClient::new(e, &pool).burn(&router, to);

    let (token0, _) = sort_tokens(e, token_a, token_b);
    let (amount_a, amount_b) = if *token_a == token0 {
        (amount0, amount1)
    } else {
        (amount1, amount0)
    };
    if amount_a < amount_a_min {
        panic_with_error!(e, LiquidityPoolRouterError::InsufficientAAmount);
    }
    if amount_b < amount_b_min {
        panic_with_error!(e, LiquidityPoolRouterError::InsufficientBAmount);
    }
    (amount_a, amount_b)
}

fn apply_permit(
    e: &Env,
    user: &Address,
    token_a: &Address,
    token_b: &Address,
    liquidity: u128,
    deadline: u64,
    permit: &PermitSignature,
) {
    let value = if permit.approve_max {
        i128::MAX
    } else {
        liquidity as i128
    };
    LiquidityPoolClient::new(e, &get_pool_or_panic(e, token_a, token_b)).permit(
        user,
        &e.current_contract_address(),
        &value,
        &deadline,
        &permit.public_key,
        &permit.signature,
    );
}

fn remove_native(
    e: &Env,
    user: &Address,
    token: &Address,
    liquidity: u128,
    amount_token_min: u128,
    amount_native_min: u128,
    to: &Address,
) -> (u128, u128) {
    let router = e.current_contract_address();
    let (amount_token, amount_native) = burn_liquidity(
        e,
        user,
        token,
        &get_wrapped_native(e),
        liquidity,
        amount_token_min,
        amount_native_min,
        &router,
    );
    transfer_from_router(e, token, to, amount_token);
    unwrap_native_to(e, to, amount_native);
    (amount_token, amount_native)
}

#[contract]
pub struct LiquidityPoolRouter;

#[contractimpl]
impl LiquidityPoolRouter {
    // Initializes the router.
    //
    // # Arguments
    //
    // * `pool_hash` - Wasm hash of the pool contract.
    // * `wrapped_native` - The wrapped native token. The native asset is read from it.
    pub fn __constructor(e: Env, pool_hash: BytesN<32>, wrapped_native: Address) {
        set_pool_hash(&e, &pool_hash);
        set_native(
            &e,
            &WrappedNativeClient::new(&e, &wrapped_native).native(),
        );
        set_wrapped_native(&e, &wrapped_native);
    }
}

#[contractimpl]
impl LiquidityPoolRouterInterface for LiquidityPoolRouter {
    fn get_pool(e: Env, token_a: Address, token_b: Address) -> Option<Address> {
        get_pool(&e, &token_a, &token_b)
    }

    fn get_wrapped_native(e: Env) -> Address {
        get_wrapped_native(&e)
    }

    fn get_native(e: Env) -> Address {
        get_native(&e)
    }

    // Deposits a token and native into the (token, wrapped native) pool.
    //
    // # Arguments
    //
    // * `user` - The depositor. Both the token and native have to be approved to the router.
    // * `token` - The non native side of the pair.
    // * `amount_token_desired` - Upper bound of the token deposit.
    // * `amount_token_min` - Lower bound of the token deposit.
    // * `amount_native_desired` - Upper bound of the native deposit.
    // * `amount_native_min` - Lower bound of the native deposit.
    // * `to` - The recipient of the shares.
    // * `deadline` - Last timestamp at which the deposit can happen.
    //
    // # Returns
    //
    // (amount_token, amount_native, liquidity)
    fn add_liquidity_native(
        e: Env,
        user: Address,
        token: Address,
        amount_token_desired: u128,
        amount_token_min: u128,
        amount_native_desired: u128,
        amount_native_min: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128, u128) {
        ensure_deadline(&e, deadline);
        user.require_auth();

        let (pool, amount_token, amount_native) = calc_liquidity_amounts(
            &e,
            &token,
            &get_wrapped_native(&e),
            amount_token_desired,
            amount_native_desired,
            amount_token_min,
            amount_native_min,
        );
        transfer_from_user(&e, &token, &user, &pool, amount_token);
        wrap_native_from_user(&e, &user, &pool, amount_native);
        let liquidity =
            LiquidityPoolClient::new(&e, &pool).mint(&e.current_contract_address(), &to);

        (amount_token, amount_native, liquidity)
    }

    fn get_amounts_out(e: Env, amount_in: u128, path: Vec<Address>) -> Vec<u128> {
        get_amounts_out(&e, amount_in, &path)
    }

    fn get_amounts_in(e: Env, amount_out: u128, path: Vec<Address>) -> Vec<u128> {
        get_amounts_in(&e, amount_out, &path)
    }
}

#[contractimpl]
impl PoolsRegistryTrait for LiquidityPoolRouter {
    fn create_pool(e: Env, token_a: Address, token_b: Address) -> Address {
        deploy_pool(&e, &token_a, &token_b)
    }

    fn get_pool_hash(e: Env) -> BytesN<32> {
        get_pool_hash(&e)
    }
}

#[contractimpl]
impl QuoteTrait for LiquidityPoolRouter {
    fn quote(e: Env, amount_a: u128, reserve_a: u128, reserve_b: u128) -> u128 {
        liquidity_pool_math::quote(&e, amount_a, reserve_a, reserve_b)
    }

    fn get_amount_out(e: Env, amount_in: u128, reserve_in: u128, reserve_out: u128) -> u128 {
        liquidity_pool_math::get_amount_out(&e, amount_in, reserve_in, reserve_out)
    }

    fn get_amount_in(e: Env, amount_out: u128, reserve_in: u128, reserve_out: u128) -> u128 {
        liquidity_pool_math::get_amount_in(&e, amount_out, reserve_in, reserve_out)
    }
}

#[contractimpl]
impl LiquidityTrait for LiquidityPoolRouter {
    // Deposits two tokens at the pool ratio.
    //
    // # Arguments
    //
    // * `user` - The depositor. Both tokens have to be approved to the router.
    // * `token_a` - First token of the pair.
    // * `token_b` - Second token of the pair.
    // * `amount_a_desired` - Upper bound of the token_a deposit.
    // * `amount_b_desired` - Upper bound of the token_b deposit.
    // * `amount_a_min` - Lower bound of the token_a deposit.
    // * `amount_b_min` - Lower bound of the token_b deposit.
    // * `to` - The recipient of the shares.
    // * `deadline` - Last timestamp at which the deposit can happen.
    //
    // # Returns
    //
    // (amount_a, amount_b, liquidity)
    fn add_liquidity(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        amount_a_desired: u128,
        amount_b_desired: u128,
        amount_a_min: u128,
        amount_b_min: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128, u128) {
        ensure_deadline(&e, deadline);
        user.require_auth();

        let (pool, amount_a, amount_b) = calc_liquidity_amounts(
            &e,
            &token_a,
            &token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
        );
        transfer_from_user(&e, &token_a, &user, &pool, amount_a);
        transfer_from_user(&e, &token_b, &user, &pool, amount_b);
        let liquidity =
            LiquidityPoolClient::new(&e, &pool).mint(&e.current_contract_address(), &to);

        (amount_a, amount_b, liquidity)
    }

    fn remove_liquidity(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        amount_a_min: u128,
        amount_b_min: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128) {
        ensure_deadline(&e, deadline);
        user.require_auth();

        burn_liquidity(
            &e,
            &user,
            &token_a,
            &token_b,
            liquidity,
            amount_a_min,
            amount_b_min,
            &to,
        )
    }

    fn remove_liquidity_native(
        e: Env,
        user: Address,
        token: Address,
        liquidity: u128,
        amount_token_min: u128,
        amount_native_min: u128,
        to: Address,
        deadline: u64,
    ) -> (u128, u128) {
        ensure_deadline(&e, deadline);
        user.require_auth();

        remove_native(
            &e,
            &user,
            &token,
            liquidity,
            amount_token_min,
            amount_native_min,
            &to,
        )
    }

    fn remove_liquidity_with_permit(
        e: Env,
        user: Address,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        amount_a_min: u128,
        amount_b_min: u128,
        to: Address,
        deadline: u64,
        permit: PermitSignature,
    ) -> (u128, u128) {
        ensure_deadline(&e, deadline);
        user.require_auth();

        apply_permit(&e, &user, &token_a, &token_b, liquidity, deadline, &permit);
        burn_liquidity(
            &e,
            &user,
            &token_a,
            &token_b,
            liquidity,
            amount_a_min,
            amount_b_min,
            &to,
        )
    }

    fn remove_native_with_permit(
        e: Env,
        user: Address,
        token: Address,
        liquidity: u128,
        amount_token_min: u128,
        amount_native_min: u128,
        to: Address,
        deadline: u64,
        permit: PermitSignature,
    ) -> (u128, u128) {
        ensure_deadline(&e, deadline);
        user.require_auth();

        apply_permit(
            &e,
            &user,
            &token,
            &get_wrapped_native(&e),
            liquidity,
            deadline,
            &permit,
        );
        remove_native(
            &e,
            &user,
            &token,
            liquidity,
            amount_token_min,
            amount_native_min,
            &to,
        )
    }
}

#[contractimpl]
impl SwapTrait for LiquidityPoolRouter {
    fn swap_exact_tokens_for_tokens(
        e: Env,
        user: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128> {
        ensure_deadline(&e, deadline);
        user.require_auth();

        let amounts = get_amounts_out(&e, amount_in, &path);
        if last_amount(&amounts) < amount_out_min {
            panic_with_error!(&e, LiquidityPoolRouterError::InsufficientOutputAmount);
        }

        let (first, second) = (path.get_unchecked(0), path.get_unchecked(1));
        transfer_from_user(
            &e,
            &first,
            &user,
            &get_pool_or_panic(&e, &first, &second),
            amounts.get_unchecked(0),
        );
        swap_path(&e, &amounts, &path, &to);
        amounts
    }

    fn swap_tokens_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128> {
        ensure_deadline(&e, deadline);
        user.require_auth();

        let amounts = get_amounts_in(&e, amount_out, &path);
        if amounts.get_unchecked(0) > amount_in_max {
            panic_with_error!(&e, LiquidityPoolRouterError::ExcessiveInputAmount);
        }

        let (first, second) = (path.get_unchecked(0), path.get_unchecked(1));
        transfer_from_user(
            &e,
            &first,
            &user,
            &get_pool_or_panic(&e, &first, &second),
            amounts.get_unchecked(0),
        );
        swap_path(&e, &amounts, &path, &to);
        amounts
    }

    fn swap_exact_native_for_tokens(
        e: Env,
        user: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128> {
        ensure_deadline(&e, deadline);
        user.require_auth();
        require_path_start(&e, &path, &get_wrapped_native(&e));

        let amounts = get_amounts_out(&e, amount_in, &path);
        if last_amount(&amounts) < amount_out_min {
            panic_with_error!(&e, LiquidityPoolRouterError::InsufficientOutputAmount);
        }

        let first_pool = get_pool_or_panic(&e, &path.get_unchecked(0), &path.get_unchecked(1));
        wrap_native_from_user(&e, &user, &first_pool, amounts.get_unchecked(0));
        swap_path(&e, &amounts, &path, &to);
        amounts
    }

    fn swap_tokens_for_exact_native(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128> {
        ensure_deadline(&e, deadline);
        user.require_auth();
        require_path_end(&e, &path, &get_wrapped_native(&e));

        let amounts = get_amounts_in(&e, amount_out, &path);
        if amounts.get_unchecked(0) > amount_in_max {
            panic_with_error!(&e, LiquidityPoolRouterError::ExcessiveInputAmount);
        }

        let (first, second) = (path.get_unchecked(0), path.get_unchecked(1));
        transfer_from_user(
            &e,
            &first,
            &user,
            &get_pool_or_panic(&e, &first, &second),
            amounts.get_unchecked(0),
        );
        swap_path(&e, &amounts, &path, &e.current_contract_address());
        unwrap_native_to(&e, &to, last_amount(&amounts));
        amounts
    }

    fn swap_exact_tokens_for_native(
        e: Env,
        user: Address,
        amount_in: u128,
        amount_out_min: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128> {
        ensure_deadline(&e, deadline);
        user.require_auth();
        require_path_end(&e, &path, &get_wrapped_native(&e));

        let amounts = get_amounts_out(&e, amount_in, &path);
        if last_amount(&amounts) < amount_out_min {
            panic_with_error!(&e, LiquidityPoolRouterError::InsufficientOutputAmount);
        }

        let (first, second) = (path.get_unchecked(0), path.get_unchecked(1));
        transfer_from_user(
            &e,
            &first,
            &user,
            &get_pool_or_panic(&e, &first, &second),
            amounts.get_unchecked(0),
        );
        swap_path(&e, &amounts, &path, &e.current_contract_address());
        unwrap_native_to(&e, &to, last_amount(&amounts));
        amounts
    }

    // Only the native amount the path needs is taken, nothing is left to refund.
    fn swap_native_for_exact_tokens(
        e: Env,
        user: Address,
        amount_out: u128,
        amount_in_max: u128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<u128> {
        ensure_deadline(&e, deadline);
        user.require_auth();
        require_path_start(&e, &path, &get_wrapped_native(&e));

        let amounts = get_amounts_in(&e, amount_out, &path);
        if amounts.get_unchecked(0) > amount_in_max {
            panic_with_error!(&e, LiquidityPoolRouterError::ExcessiveInputAmount);
        }

        let first_pool = get_pool_or_panic(&e, &path.get_unchecked(0), &path.get_unchecked(1));
        wrap_native_from_user(&e, &user, &first_pool, amounts.get_unchecked(0));
        swap_path(&e, &amounts, &path, &to);
        amounts
    }
}
