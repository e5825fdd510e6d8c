use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

pub fn transfer(e: &Env, token: &Address, to: &Address, amount: u128) {
    if amount > 0 {
        SorobanTokenClient::new(e, token).transfer(
            &e.current_contract_address(),
            to,
            &(amount as i128),
        );
    }
}

pub fn approve(e: &Env, token: &Address, spender: &Address, amount: u128) {
    SorobanTokenClient::new(e, token).approve(
        &e.current_contract_address(),
        spender,
        &(amount as i128),
        &e.ledger().sequence(),
    );
}

// Authorizes `contract` to pull `amount` of native from this contract within the next call.
pub fn authorize_native_pull(e: &Env, native: &Address, contract: &Address, amount: u128) {
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: native.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args: (e.current_contract_address(), contract.clone(), amount as i128)
                    .into_val(e),
            },
            sub_invocations: vec![e],
        }),
    ]);
}
