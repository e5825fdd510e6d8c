use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{Address, Env};

// Allowances granted to the router only have to survive the current invocation.
const APPROVAL_LEDGERS: u32 = 1;

pub fn approve(e: &Env, token: &Address, spender: &Address, amount: u128) {
    SorobanTokenClient::new(e, token).approve(
        &e.current_contract_address(),
        spender,
        &(amount as i128),
        &(e.ledger().sequence() + APPROVAL_LEDGERS),
    );
}

// Returns what the router left unused and drops the allowance.
pub fn refund_and_revoke(
    e: &Env,
    token: &Address,
    router: &Address,
    user: &Address,
    approved: u128,
    used: u128,
) {
    if approved > used {
        SorobanTokenClient::new(e, token).transfer(
            &e.current_contract_address(),
            user,
            &((approved - used) as i128),
        );
        approve(e, token, router, 0);
    }
}
