use crate::storage::{get_native, get_wrapped_native};
use amm_interfaces::wrapped_native::WrappedNativeClient;
use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

// Moves tokens the user approved to the router.
pub fn transfer_from_user(e: &Env, token: &Address, user: &Address, to: &Address, amount: u128) {
    SorobanTokenClient::new(e, token).transfer_from(
        &e.current_contract_address(),
        user,
        to,
        &(amount as i128),
    );
}

pub fn transfer_from_router(e: &Env, token: &Address, to: &Address, amount: u128) {
    SorobanTokenClient::new(e, token).transfer(&e.current_contract_address(), to, &(amount as i128));
}

// Takes `amount` of approved native from the user, wraps it and sends the wrapped tokens to `to`.
pub fn wrap_native_from_user(e: &Env, user: &Address, to: &Address, amount: u128) {
    let router = e.current_contract_address();
    let native = get_native(e);
    let wrapped = get_wrapped_native(e);
    transfer_from_user(e, &native, user, &router, amount);

    // deposit pulls native from the router
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: native,
                fn_name: Symbol::new(e, "transfer"),
                args: (router.clone(), wrapped.clone(), amount as i128).into_val(e),
            },
            sub_invocations: vec![e],
        }),
    ]);
    WrappedNativeClient::new(e, &wrapped).deposit(&router, &(amount as i128));
    transfer_from_router(e, &wrapped, to, amount);
}

// Unwraps `amount` of wrapped tokens held by the router and sends native to `to`.
pub fn unwrap_native_to(e: &Env, to: &Address, amount: u128) {
    WrappedNativeClient::new(e, &get_wrapped_native(e))
        .withdraw(&e.current_contract_address(), &(amount as i128));
    transfer_from_router(e, &get_native(e), to, amount);
}
