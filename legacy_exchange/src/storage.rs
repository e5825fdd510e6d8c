use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_setter,
};

// Smallest native deposit accepted when the exchange is empty
pub const MIN_INITIAL_NATIVE: u128 = 1_000_000_000;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Token,
    Native,
}

generate_instance_storage_getter_and_setter!(token, DataKey::Token, Address);
generate_instance_storage_getter_and_setter!(native, DataKey::Native, Address);
