use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_setter, generate_persistent_storage_map,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Router,
    // token -> legacy exchange
    LegacyExchange(Address),
}

generate_instance_storage_getter_and_setter!(router, DataKey::Router, Address);
generate_persistent_storage_map!(legacy_exchange, DataKey::LegacyExchange, Address, Address);
