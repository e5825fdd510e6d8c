use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, U256};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Token0,
    Token1,
    Reserve0,
    Reserve1,
    BlockTimestampLast,
    Price0CumulativeLast,
    Price1CumulativeLast,
}

generate_instance_storage_getter_and_setter!(token0, DataKey::Token0, Address);
generate_instance_storage_getter_and_setter!(token1, DataKey::Token1, Address);
generate_instance_storage_getter_and_setter_with_default!(reserve0, DataKey::Reserve0, u128, 0);
generate_instance_storage_getter_and_setter_with_default!(reserve1, DataKey::Reserve1, u128, 0);
generate_instance_storage_getter_and_setter_with_default!(
    block_timestamp_last,
    DataKey::BlockTimestampLast,
    u64,
    0
);

pub fn get_price0_cumulative_last(e: &Env) -> U256 {
    bump_instance(e);
    e.storage()
        .instance()
        .get(&DataKey::Price0CumulativeLast)
        .unwrap_or(U256::from_u32(e, 0))
}

pub fn set_price0_cumulative_last(e: &Env, value: &U256) {
    bump_instance(e);
    e.storage()
        .instance()
        .set(&DataKey::Price0CumulativeLast, value)
}

pub fn get_price1_cumulative_last(e: &Env) -> U256 {
    bump_instance(e);
    e.storage()
        .instance()
        .get(&DataKey::Price1CumulativeLast)
        .unwrap_or(U256::from_u32(e, 0))
}

pub fn set_price1_cumulative_last(e: &Env, value: &U256) {
    bump_instance(e);
    e.storage()
        .instance()
        .set(&DataKey::Price1CumulativeLast, value)
}
