use paste::paste;
use soroban_sdk::{
    contracterror, contracttype, panic_with_error, Address, BytesN, Env,
};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_setter, generate_persistent_storage_map,
};

// Signed share approval handed to the pool before removing liquidity.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermitSignature {
    // approve i128::MAX instead of the exact liquidity
    pub approve_max: bool,
    pub public_key: BytesN<32>,
    pub signature: BytesN<64>,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    TokensPairPool(BytesN<32>),
    PoolHash,
    WrappedNative,
    Native,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    PoolAlreadyExists = 401,
    PoolNotFound = 404,
}

generate_instance_storage_getter_and_setter!(pool_hash, DataKey::PoolHash, BytesN<32>);
generate_instance_storage_getter_and_setter!(wrapped_native, DataKey::WrappedNative, Address);
generate_instance_storage_getter_and_setter!(native, DataKey::Native, Address);
generate_persistent_storage_map!(
    tokens_pair_pool,
    DataKey::TokensPairPool,
    BytesN<32>,
    Address
);
