use soroban_sdk::{Address, Bytes, BytesN, Env, String, U256};

pub trait LiquidityPoolTrait {
    // Returns (token0, token1), sorted
    fn get_tokens(e: Env) -> (Address, Address);

    fn token0(e: Env) -> Address;

    fn token1(e: Env) -> Address;

    // Returns (reserve0, reserve1, block_timestamp_last)
    fn get_reserves(e: Env) -> (u128, u128, u64);

    // Time-weighted price of token0 in token1 units, Q64, accumulated modulo 2^256
    fn price0_cumulative_last(e: Env) -> U256;

    // Time-weighted price of token1 in token0 units, Q64, accumulated modulo 2^256
    fn price1_cumulative_last(e: Env) -> U256;

    // Returns the total amount of shares
    fn total_supply(e: Env) -> u128;

    // Mints shares for the tokens sent to the pool since the last reserve update.
    // Tokens are expected to be transferred in by the caller within the same invocation.
    fn mint(e: Env, sender: Address, to: Address) -> u128;

    // Burns the shares held by the pool itself and sends the underlying tokens to `to`.
    fn burn(e: Env, sender: Address, to: Address) -> (u128, u128);

    // Sends the requested outputs first, runs the receiver callback if `data` is not empty
    // and then checks the constant product against the resulting balances.
    fn swap(
        e: Env,
        sender: Address,
        amount0_out: u128,
        amount1_out: u128,
        to: Address,
        data: Bytes,
    );

    // Sends balances above the reserves to `to`
    fn skim(e: Env, to: Address);

    // Sets reserves to the current balances
    fn sync(e: Env);
}

// Pool shares follow the standard token interface, except burning, which is done by the pool.
pub trait ShareTokenTrait {
    fn allowance(e: Env, from: Address, spender: Address) -> i128;

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);

    fn balance(e: Env, id: Address) -> i128;

    fn transfer(e: Env, from: Address, to: Address, amount: i128);

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128);

    fn decimals(e: Env) -> u32;

    fn name(e: Env) -> String;

    fn symbol(e: Env) -> String;
}

pub trait PermitTrait {
    // Number of permits already used by the owner
    fn nonces(e: Env, owner: Address) -> u64;

    // Digest the owner has to sign to grant `value` to `spender` with the current nonce
    fn permit_digest(
        e: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
    ) -> BytesN<32>;

    // Sets the allowance from an ed25519 signature of the owner account
    fn permit(
        e: Env,
        owner: Address,
        spender: Address,
        value: i128,
        deadline: u64,
        public_key: BytesN<32>,
        signature: BytesN<64>,
    );
}
