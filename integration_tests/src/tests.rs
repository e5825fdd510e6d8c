#![cfg(test)]
extern crate std;

use crate::testutils::{
    create_pool, create_token_contract, get_token_admin_client, Borrower, Setup, E18,
};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{vec, Address};

#[test]
fn test_migrate_arbitrage_and_exit() {
    let setup = Setup::default();
    let e = &setup.env;
    let token = &setup.token.address;

    // liquidity starts in the legacy exchange and moves into the pair
    let alice = setup.funded_user(1_000 * E18);
    setup
        .exchange
        .add_liquidity(&alice, &1, &E18, &(4 * E18), &u64::MAX);
    setup.exchange.approve(
        &alice,
        &setup.migrator.address,
        &((4 * E18) as i128),
        &(e.ledger().sequence() + 100),
    );
    let (_, _, liquidity) =
        setup
            .migrator
            .migrate(&alice, token, &E18, &(4 * E18), &alice, &u64::MAX);
    assert_eq!(liquidity, 2 * E18 - 1000);
    assert_eq!(setup.pool_reserves(), (E18, 4 * E18));
    assert_eq!(setup.exchange.total_supply(), 0);

    // a new legacy provider prices the token eight times lower
    let bob = setup.funded_user(1_000 * E18);
    setup
        .exchange
        .add_liquidity(&bob, &1, &(8 * E18), &(4 * E18), &u64::MAX);

    // an account without funds borrows native from the pair and keeps the token surplus
    let carol = Address::generate(e);
    let borrowed = E18 / 2;
    let received = liquidity_pool_math::get_amount_out(e, borrowed, 4 * E18, 8 * E18);
    let required = liquidity_pool_math::get_amount_in(e, borrowed, E18, 4 * E18);
    let (amount0_out, amount1_out) = setup.outputs(0, borrowed);
    setup.pool.swap(
        &carol,
        &amount0_out,
        &amount1_out,
        &setup.flash.address,
        &1_u128.to_xdr(e),
    );
    assert_eq!(setup.token.balance(&carol), (received - required) as i128);
    assert_eq!(setup.native.balance(&carol), 0);
    assert_eq!(setup.pool_reserves(), (E18 + required, 4 * E18 - borrowed));

    // alice leaves the pair through the router
    let (reserve_token, reserve_native) = setup.pool_reserves();
    let total = setup.pool.total_supply();
    setup.pool.approve(
        &alice,
        &setup.router.address,
        &(liquidity as i128),
        &(e.ledger().sequence() + 100),
    );
    let native_before = setup.native.balance(&alice);
    let (amount_token, amount_native) = setup.router.remove_liquidity_native(
        &alice,
        token,
        &liquidity,
        &1,
        &1,
        &alice,
        &u64::MAX,
    );
    assert_eq!(amount_token, liquidity * reserve_token / total);
    assert_eq!(amount_native, liquidity * reserve_native / total);
    assert_eq!(
        setup.native.balance(&alice) - native_before,
        amount_native as i128
    );
    assert_eq!(setup.pool.balance(&alice), 0);

    for holder in [
        &setup.router.address,
        &setup.migrator.address,
        &setup.flash.address,
    ] {
        assert_eq!(setup.token.balance(holder), 0);
        assert_eq!(setup.native.balance(holder), 0);
        assert_eq!(setup.wrapped.balance(holder), 0);
    }
}

#[test]
fn test_flash_arbitrage_on_router_liquidity() {
    let setup = Setup::default();
    let token = &setup.token.address;
    let provider = setup.funded_user(10_000 * E18);

    setup
        .exchange
        .add_liquidity(&provider, &1, &(1_000 * E18), &(10 * E18), &u64::MAX);
    setup.router.add_liquidity_native(
        &provider,
        token,
        &(2_000 * E18),
        &0,
        &(10 * E18),
        &0,
        &provider,
        &u64::MAX,
    );

    let arbitrageur = Address::generate(&setup.env);
    let (amount0_out, amount1_out) = setup.outputs(200 * E18, 0);
    setup.pool.swap(
        &arbitrageur,
        &amount0_out,
        &amount1_out,
        &setup.flash.address,
        &1_u128.to_xdr(&setup.env),
    );
    assert_eq!(setup.native.balance(&arbitrageur), 548_043_441_089_763_649);

    let legacy_price = setup.token.balance(&setup.exchange.address)
        / setup.native.balance(&setup.exchange.address);
    let (reserve_token, reserve_native) = setup.pool_reserves();
    assert_eq!(legacy_price, 143);
    assert_eq!(reserve_token / reserve_native, 161);
}

#[test]
fn test_unrepaid_flash_swap_reverts() {
    let setup = Setup::default();
    let e = &setup.env;
    let provider = setup.funded_user(1_000 * E18);
    setup.router.add_liquidity_native(
        &provider,
        &setup.token.address,
        &(10 * E18),
        &0,
        &(10 * E18),
        &0,
        &provider,
        &u64::MAX,
    );
    e.ledger().set_timestamp(1_000);

    let borrower = e.register(Borrower, ());
    let reserves = setup.pool.get_reserves();
    let price0 = setup.pool.price0_cumulative_last();
    let price1 = setup.pool.price1_cumulative_last();
    let (amount0_out, amount1_out) = setup.outputs(E18, 0);

    assert_eq!(
        setup
            .pool
            .try_swap(
                &provider,
                &amount0_out,
                &amount1_out,
                &borrower,
                &1_u128.to_xdr(e),
            )
            .unwrap_err()
            .unwrap(),
        soroban_sdk::Error::from_contract_error(2001)
    );

    assert_eq!(setup.pool.get_reserves(), reserves);
    assert_eq!(setup.pool.price0_cumulative_last(), price0);
    assert_eq!(setup.pool.price1_cumulative_last(), price1);
    assert_eq!(setup.token.balance(&borrower), 0);
    assert_eq!(
        setup.token.balance(&setup.pool.address),
        (10 * E18) as i128
    );
}

#[test]
fn test_swaps_through_native_hub() {
    let setup = Setup::default();
    let e = &setup.env;
    let other = create_token_contract(e, &setup.admin);
    create_pool(e, &setup.router.address, &other.address, &setup.wrapped.address);

    let provider = setup.funded_user(1_000 * E18);
    get_token_admin_client(e, &other.address).mint(&provider, &((1_000 * E18) as i128));
    other.approve(
        &provider,
        &setup.router.address,
        &i128::MAX,
        &(e.ledger().sequence() + 100),
    );
    for (token, amount) in [(&setup.token.address, 20 * E18), (&other.address, 5 * E18)] {
        setup.router.add_liquidity_native(
            &provider,
            token,
            &amount,
            &0,
            &(10 * E18),
            &0,
            &provider,
            &u64::MAX,
        );
    }

    let trader = setup.funded_user(100 * E18);
    let path = vec![
        e,
        setup.token.address.clone(),
        setup.wrapped.address.clone(),
        other.address.clone(),
    ];
    let quoted = setup.router.get_amounts_out(&E18, &path);
    let amounts = setup.router.swap_exact_tokens_for_tokens(
        &trader,
        &E18,
        &quoted.get_unchecked(2),
        &path,
        &trader,
        &u64::MAX,
    );
    assert_eq!(amounts, quoted);
    assert_eq!(
        other.balance(&trader),
        quoted.get_unchecked(2) as i128
    );

    // and back to native
    let native_before = setup.native.balance(&trader);
    other.approve(
        &trader,
        &setup.router.address,
        &i128::MAX,
        &(e.ledger().sequence() + 100),
    );
    let back = setup.router.swap_exact_tokens_for_native(
        &trader,
        &quoted.get_unchecked(2),
        &0,
        &vec![e, other.address.clone(), setup.wrapped.address.clone()],
        &trader,
        &u64::MAX,
    );
    assert_eq!(
        setup.native.balance(&trader) - native_before,
        back.get_unchecked(1) as i128
    );

    for token in [&setup.token, &setup.native, &other] {
        assert_eq!(token.balance(&setup.router.address), 0);
    }
    assert_eq!(setup.wrapped.balance(&setup.router.address), 0);
}
