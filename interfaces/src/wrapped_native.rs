use soroban_sdk::{contractclient, Address, Env};

// Balances, transfers and approvals follow the standard token interface.
#[contractclient(name = "WrappedNativeClient")]
pub trait WrappedNativeInterface {
    fn native(e: Env) -> Address;

    fn deposit(e: Env, from: Address, amount: i128);

    fn withdraw(e: Env, from: Address, amount: i128);
}
