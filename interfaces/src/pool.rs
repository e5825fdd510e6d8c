use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env};

#[contractclient(name = "LiquidityPoolClient")]
pub trait LiquidityPoolInterface {
    fn get_tokens(e: Env) -> (Address, Address);

    // (reserve0, reserve1, block_timestamp_last)
    fn get_reserves(e: Env) -> (u128, u128, u64);

    fn total_supply(e: Env) -> u128;

    fn mint(e: Env, sender: Address, to: Address) -> u128;

    fn burn(e: Env, sender: Address, to: Address) -> (u128, u128);

    fn swap(
        e: Env,
        sender: Address,
        amount0_out: u128,
        amount1_out: u128,
        to: Address,
        data: Bytes,
    );

    fn skim(e: Env, to: Address);

    fn sync(e: Env);

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
