#![cfg(test)]
extern crate std;

use crate::testutils::{Setup, E18};
use crate::PermitSignature;
use ed25519_dalek::{Signer, SigningKey};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::xdr::FromXdr;
use soroban_sdk::{vec, Address, Bytes, BytesN, Env};

// Stellar account address of an ed25519 public key
fn account_address(e: &Env, public_key: &[u8; 32]) -> Address {
    let mut xdr = Bytes::from_array(e, &[0, 0, 0, 18, 0, 0, 0, 0, 0, 0, 0, 0]);
    xdr.append(&Bytes::from_array(e, public_key));
    Address::from_xdr(e, &xdr).unwrap()
}

#[test]
fn test_constructor() {
    let setup = Setup::default();
    assert_eq!(setup.router.get_native(), setup.native.address);
    assert_eq!(setup.router.get_wrapped_native(), setup.wrapped.address);
    assert_eq!(
        setup.router.get_pool_hash(),
        BytesN::from_array(&setup.env, &[0; 32])
    );
}

#[test]
fn test_quotes() {
    let setup = Setup::default();
    let router = &setup.router;
    assert_eq!(router.quote(&E18, &E18, &(4 * E18)), 4 * E18);
    assert_eq!(
        router.get_amount_out(&E18, &(5 * E18), &(10 * E18)),
        1662497915624478906
    );
    assert_eq!(
        router.get_amount_in(&E18, &(5 * E18), &(10 * E18)),
        557227237267357629
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2006)")]
fn test_quote_zero_amount() {
    let setup = Setup::default();
    setup.router.quote(&0, &E18, &E18);
}

#[test]
#[should_panic(expected = "Error(Contract, #2003)")]
fn test_amount_in_whole_reserve() {
    let setup = Setup::default();
    setup.router.get_amount_in(&E18, &E18, &E18);
}

#[test]
fn test_add_liquidity() {
    let setup = Setup::default();
    let [token_a, token_b, _] = &setup.tokens;
    let pool = setup.create_pool(&token_a.address, &token_b.address);
    let to = Address::generate(&setup.env);

    let result = setup.router.add_liquidity(
        &setup.user,
        &token_a.address,
        &token_b.address,
        &E18,
        &(4 * E18),
        &0,
        &0,
        &to,
        &u64::MAX,
    );
    assert_eq!(result, (E18, 4 * E18, 2 * E18 - 1000));
    assert_eq!(pool.balance(&to), (2 * E18 - 1000) as i128);
    assert_eq!(token_a.balance(&pool.address), E18 as i128);
    assert_eq!(token_b.balance(&pool.address), (4 * E18) as i128);
    assert_eq!(
        setup
            .router
            .get_pool(&token_b.address, &token_a.address),
        Some(pool.address.clone())
    );

    // excess of token_a is not taken
    let result = setup.router.add_liquidity(
        &setup.user,
        &token_a.address,
        &token_b.address,
        &(2 * E18),
        &(2 * E18),
        &0,
        &0,
        &to,
        &u64::MAX,
    );
    assert_eq!(result, (E18 / 2, 2 * E18, E18));
    setup.assert_router_empty();
}

#[test]
#[should_panic(expected = "Error(Contract, #303)")]
fn test_add_liquidity_b_below_min() {
    let setup = Setup::default();
    let [token_a, token_b, _] = &setup.tokens;
    setup.create_pool_with_liquidity(&token_a.address, &token_b.address, E18, 4 * E18);
    setup.router.add_liquidity(
        &setup.user,
        &token_a.address,
        &token_b.address,
        &E18,
        &(5 * E18),
        &0,
        &(4 * E18 + E18 / 2),
        &setup.user,
        &u64::MAX,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #302)")]
fn test_add_liquidity_a_below_min() {
    let setup = Setup::default();
    let [token_a, token_b, _] = &setup.tokens;
    setup.create_pool_with_liquidity(&token_a.address, &token_b.address, E18, 4 * E18);
    setup.router.add_liquidity(
        &setup.user,
        &token_a.address,
        &token_b.address,
        &(2 * E18),
        &(2 * E18),
        &E18,
        &0,
        &setup.user,
        &u64::MAX,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_add_liquidity_expired() {
    let setup = Setup::default();
    setup.env.ledger().set_timestamp(100);
    let [token_a, token_b, _] = &setup.tokens;
    setup.create_pool(&token_a.address, &token_b.address);
    setup.router.add_liquidity(
        &setup.user,
        &token_a.address,
        &token_b.address,
        &E18,
        &E18,
        &0,
        &0,
        &setup.user,
        &99,
    );
}

#[test]
fn test_remove_liquidity() {
    let setup = Setup::default();
    let e = &setup.env;
    let [token_a, token_b, _] = &setup.tokens;
    let to = Address::generate(e);
    let pool =
        setup.create_pool_with_liquidity(&token_a.address, &token_b.address, E18, 4 * E18);
    let liquidity = 2 * E18 - 1000;

    pool.approve(
        &setup.user,
        &setup.router.address,
        &(liquidity as i128),
        &(e.ledger().sequence() + 100),
    );
    // reversed pair order, amounts follow the arguments
    let result = setup.router.remove_liquidity(
        &setup.user,
        &token_b.address,
        &token_a.address,
        &liquidity,
        &0,
        &0,
        &to,
        &u64::MAX,
    );
    assert_eq!(result, (4 * E18 - 2000, E18 - 500));
    assert_eq!(token_a.balance(&to), (E18 - 500) as i128);
    assert_eq!(token_b.balance(&to), (4 * E18 - 2000) as i128);
    assert_eq!(pool.balance(&setup.user), 0);
    setup.assert_router_empty();
}

#[test]
#[should_panic(expected = "Error(Contract, #302)")]
fn test_remove_liquidity_below_min() {
    let setup = Setup::default();
    let e = &setup.env;
    let [token_a, token_b, _] = &setup.tokens;
    let pool =
        setup.create_pool_with_liquidity(&token_a.address, &token_b.address, E18, 4 * E18);
    pool.approve(
        &setup.user,
        &setup.router.address,
        &i128::MAX,
        &(e.ledger().sequence() + 100),
    );
    setup.router.remove_liquidity(
        &setup.user,
        &token_a.address,
        &token_b.address,
        &(2 * E18 - 1000),
        &E18,
        &0,
        &setup.user,
        &u64::MAX,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #603)")]
fn test_remove_liquidity_without_approval() {
    let setup = Setup::default();
    let [token_a, token_b, _] = &setup.tokens;
    setup.create_pool_with_liquidity(&token_a.address, &token_b.address, E18, 4 * E18);
    setup.router.remove_liquidity(
        &setup.user,
        &token_a.address,
        &token_b.address,
        &E18,
        &0,
        &0,
        &setup.user,
        &u64::MAX,
    );
}

#[test]
fn test_remove_liquidity_with_permit() {
    let setup = Setup::default();
    let e = &setup.env;
    let [token_a, token_b, _] = &setup.tokens;
    let to = Address::generate(e);

    let key = SigningKey::from_bytes(&[9; 32]);
    let public_key = key.verifying_key().to_bytes();
    let owner = account_address(e, &public_key);

    let pool = setup.create_pool(&token_a.address, &token_b.address);
    let (_, _, liquidity) = setup.router.add_liquidity(
        &setup.user,
        &token_a.address,
        &token_b.address,
        &E18,
        &(4 * E18),
        &0,
        &0,
        &owner,
        &u64::MAX,
    );

    let deadline = 1000;
    let digest = pool.permit_digest(
        &owner,
        &setup.router.address,
        &(liquidity as i128),
        &deadline,
    );
    let permit = PermitSignature {
        approve_max: false,
        public_key: BytesN::from_array(e, &public_key),
        signature: BytesN::from_array(e, &key.sign(&digest.to_array()).to_bytes()),
    };
    let result = setup.router.remove_liquidity_with_permit(
        &owner,
        &token_a.address,
        &token_b.address,
        &liquidity,
        &0,
        &0,
        &to,
        &deadline,
        &permit,
    );
    assert_eq!(result, (E18 - 500, 4 * E18 - 2000));
    assert_eq!(pool.nonces(&owner), 1);
    assert_eq!(pool.allowance(&owner, &setup.router.address), 0);

    // nonce moved on, the same signature is stale
    assert!(setup
        .router
        .try_remove_liquidity_with_permit(
            &owner,
            &token_a.address,
            &token_b.address,
            &liquidity,
            &0,
            &0,
            &to,
            &deadline,
            &permit,
        )
        .is_err());
}

#[test]
fn test_swap_exact_tokens_for_tokens() {
    let setup = Setup::default();
    let e = &setup.env;
    let [token_a, token_b, _] = &setup.tokens;
    let to = Address::generate(e);
    setup.create_pool_with_liquidity(&token_a.address, &token_b.address, 5 * E18, 10 * E18);

    let path = vec![e, token_a.address.clone(), token_b.address.clone()];
    let amounts = setup.router.swap_exact_tokens_for_tokens(
        &setup.user,
        &E18,
        &1662497915624478906,
        &path,
        &to,
        &u64::MAX,
    );
    assert_eq!(amounts, vec![e, E18, 1662497915624478906]);
    assert_eq!(token_b.balance(&to), 1662497915624478906);
    setup.assert_router_empty();
}

#[test]
#[should_panic(expected = "Error(Contract, #305)")]
fn test_swap_exact_tokens_below_min() {
    let setup = Setup::default();
    let e = &setup.env;
    let [token_a, token_b, _] = &setup.tokens;
    setup.create_pool_with_liquidity(&token_a.address, &token_b.address, 5 * E18, 10 * E18);
    setup.router.swap_exact_tokens_for_tokens(
        &setup.user,
        &E18,
        &1662497915624478907,
        &vec![e, token_a.address.clone(), token_b.address.clone()],
        &setup.user,
        &u64::MAX,
    );
}

#[test]
fn test_swap_tokens_for_exact_tokens() {
    let setup = Setup::default();
    let e = &setup.env;
    let [token_a, token_b, _] = &setup.tokens;
    let to = Address::generate(e);
    setup.create_pool_with_liquidity(&token_a.address, &token_b.address, 5 * E18, 10 * E18);
    let balance_before = token_a.balance(&setup.user);

    let path = vec![e, token_a.address.clone(), token_b.address.clone()];
    let amounts = setup.router.swap_tokens_for_exact_tokens(
        &setup.user,
        &E18,
        &557227237267357629,
        &path,
        &to,
        &u64::MAX,
    );
    assert_eq!(amounts, vec![e, 557227237267357629, E18]);
    assert_eq!(token_b.balance(&to), E18 as i128);
    assert_eq!(
        balance_before - token_a.balance(&setup.user),
        557227237267357629
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #304)")]
fn test_swap_tokens_for_exact_tokens_above_max() {
    let setup = Setup::default();
    let e = &setup.env;
    let [token_a, token_b, _] = &setup.tokens;
    setup.create_pool_with_liquidity(&token_a.address, &token_b.address, 5 * E18, 10 * E18);
    setup.router.swap_tokens_for_exact_tokens(
        &setup.user,
        &E18,
        &557227237267357628,
        &vec![e, token_a.address.clone(), token_b.address.clone()],
        &setup.user,
        &u64::MAX,
    );
}

#[test]
fn test_multi_hop() {
    let setup = Setup::default();
    let e = &setup.env;
    let [token_a, token_b, token_c] = &setup.tokens;
    let to = Address::generate(e);
    let pool_ab =
        setup.create_pool_with_liquidity(&token_a.address, &token_b.address, 10 * E18, 10 * E18);
    let pool_bc =
        setup.create_pool_with_liquidity(&token_b.address, &token_c.address, 10 * E18, 10 * E18);
    let path = vec![
        e,
        token_a.address.clone(),
        token_b.address.clone(),
        token_c.address.clone(),
    ];

    assert_eq!(
        setup.router.get_amounts_out(&E18, &path),
        vec![e, E18, 906610893880149131, 828961933061679796]
    );
    assert_eq!(
        setup.router.get_amounts_in(&E18, &path),
        vec![e, 1258007057671194948, 1114454474534715257, E18]
    );

    setup.router.swap_exact_tokens_for_tokens(
        &setup.user,
        &E18,
        &0,
        &path,
        &to,
        &u64::MAX,
    );
    assert_eq!(token_c.balance(&to), 828961933061679796);
    // intermediate token went straight from pool to pool
    assert_eq!(
        token_b.balance(&pool_ab.address),
        (10 * E18 - 906610893880149131) as i128
    );
    assert_eq!(
        token_b.balance(&pool_bc.address),
        (10 * E18 + 906610893880149131) as i128
    );
    setup.assert_router_empty();
}

#[test]
#[should_panic(expected = "Error(Contract, #404)")]
fn test_swap_missing_pool() {
    let setup = Setup::default();
    let e = &setup.env;
    let [token_a, token_b, _] = &setup.tokens;
    setup.router.get_amounts_out(
        &E18,
        &vec![e, token_a.address.clone(), token_b.address.clone()],
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #2004)")]
fn test_swap_short_path() {
    let setup = Setup::default();
    let e = &setup.env;
    setup.router.swap_exact_tokens_for_tokens(
        &setup.user,
        &E18,
        &0,
        &vec![e, setup.tokens[0].address.clone()],
        &setup.user,
        &u64::MAX,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #401)")]
fn test_create_existing_pool() {
    let setup = Setup::default();
    let [token_a, token_b, _] = &setup.tokens;
    setup.create_pool(&token_a.address, &token_b.address);
    setup
        .router
        .create_pool(&token_b.address, &token_a.address);
}

#[test]
#[should_panic(expected = "Error(Contract, #2005)")]
fn test_create_pool_identical_tokens() {
    let setup = Setup::default();
    let token = &setup.tokens[0].address;
    setup.router.create_pool(token, token);
}

fn setup_native_pool(setup: &Setup) -> liquidity_pool::LiquidityPoolClient<'static> {
    let token = &setup.tokens[0];
    let pool = setup.create_pool(&token.address, &setup.wrapped.address);
    let (amount_token, amount_native, _) = setup.router.add_liquidity_native(
        &setup.user,
        &token.address,
        &(10 * E18),
        &0,
        &(5 * E18),
        &0,
        &setup.user,
        &u64::MAX,
    );
    assert_eq!((amount_token, amount_native), (10 * E18, 5 * E18));
    liquidity_pool::LiquidityPoolClient::new(&setup.env, &pool.address)
}

#[test]
fn test_add_liquidity_native() {
    let setup = Setup::default();
    let native_before = setup.native.balance(&setup.user);
    let pool = setup_native_pool(&setup);

    assert_eq!(
        native_before - setup.native.balance(&setup.user),
        (5 * E18) as i128
    );
    assert_eq!(setup.wrapped.balance(&pool.address), (5 * E18) as i128);
    assert_eq!(
        setup.native.balance(&setup.wrapped.address),
        (5 * E18) as i128
    );
    setup.assert_router_empty();
}

#[test]
fn test_swap_exact_native_for_tokens() {
    let setup = Setup::default();
    let e = &setup.env;
    let to = Address::generate(e);
    setup_native_pool(&setup);

    let path = vec![e, setup.wrapped.address.clone(), setup.tokens[0].address.clone()];
    let amounts = setup.router.swap_exact_native_for_tokens(
        &setup.user,
        &E18,
        &0,
        &path,
        &to,
        &u64::MAX,
    );
    assert_eq!(amounts, vec![e, E18, 1662497915624478906]);
    assert_eq!(setup.tokens[0].balance(&to), 1662497915624478906);
    setup.assert_router_empty();
}

#[test]
#[should_panic(expected = "Error(Contract, #2004)")]
fn test_swap_exact_native_wrong_path() {
    let setup = Setup::default();
    let e = &setup.env;
    setup_native_pool(&setup);
    setup.router.swap_exact_native_for_tokens(
        &setup.user,
        &E18,
        &0,
        &vec![e, setup.tokens[0].address.clone(), setup.wrapped.address.clone()],
        &setup.user,
        &u64::MAX,
    );
}

#[test]
fn test_swap_tokens_for_exact_native() {
    let setup = Setup::default();
    let e = &setup.env;
    let to = Address::generate(e);
    setup_native_pool(&setup);

    let path = vec![e, setup.tokens[0].address.clone(), setup.wrapped.address.clone()];
    let amounts = setup.router.swap_tokens_for_exact_native(
        &setup.user,
        &E18,
        &u128::MAX,
        &path,
        &to,
        &u64::MAX,
    );
    assert_eq!(amounts, vec![e, 2507522567703109328, E18]);
    assert_eq!(setup.native.balance(&to), E18 as i128);
    setup.assert_router_empty();
}

#[test]
fn test_swap_exact_tokens_for_native() {
    let setup = Setup::default();
    let e = &setup.env;
    let to = Address::generate(e);
    setup_native_pool(&setup);

    let path = vec![e, setup.tokens[0].address.clone(), setup.wrapped.address.clone()];
    let amounts = setup.router.swap_exact_tokens_for_native(
        &setup.user,
        &(2 * E18),
        &0,
        &path,
        &to,
        &u64::MAX,
    );
    let expected = liquidity_pool_math::get_amount_out(e, 2 * E18, 10 * E18, 5 * E18);
    assert_eq!(amounts, vec![e, 2 * E18, expected]);
    assert_eq!(setup.native.balance(&to), expected as i128);
    setup.assert_router_empty();
}

#[test]
fn test_swap_native_for_exact_tokens() {
    let setup = Setup::default();
    let e = &setup.env;
    let to = Address::generate(e);
    setup_native_pool(&setup);
    let native_before = setup.native.balance(&setup.user);

    let path = vec![e, setup.wrapped.address.clone(), setup.tokens[0].address.clone()];
    let amounts = setup.router.swap_native_for_exact_tokens(
        &setup.user,
        &E18,
        &E18,
        &path,
        &to,
        &u64::MAX,
    );
    let expected = liquidity_pool_math::get_amount_in(e, E18, 5 * E18, 10 * E18);
    assert_eq!(amounts, vec![e, expected, E18]);
    assert_eq!(setup.tokens[0].balance(&to), E18 as i128);
    // only the computed input is taken
    assert_eq!(
        native_before - setup.native.balance(&setup.user),
        expected as i128
    );
    setup.assert_router_empty();
}

#[test]
fn test_remove_liquidity_native() {
    let setup = Setup::default();
    let e = &setup.env;
    let to = Address::generate(e);
    let pool = setup_native_pool(&setup);
    let liquidity = pool.balance(&setup.user) as u128;
    pool.approve(
        &setup.user,
        &setup.router.address,
        &(liquidity as i128),
        &(e.ledger().sequence() + 100),
    );

    let (amount_token, amount_native) = setup.router.remove_liquidity_native(
        &setup.user,
        &setup.tokens[0].address,
        &liquidity,
        &0,
        &0,
        &to,
        &u64::MAX,
    );
    assert_eq!(setup.tokens[0].balance(&to), amount_token as i128);
    assert_eq!(setup.native.balance(&to), amount_native as i128);
    assert!(amount_native > 5 * E18 - 1000 && amount_native < 5 * E18);
    setup.assert_router_empty();
}

#[test]
fn test_remove_native_with_permit() {
    let setup = Setup::default();
    let e = &setup.env;
    let to = Address::generate(e);
    let token = &setup.tokens[0];

    let key = SigningKey::from_bytes(&[11; 32]);
    let public_key = key.verifying_key().to_bytes();
    let owner = account_address(e, &public_key);

    let pool = setup.create_pool(&token.address, &setup.wrapped.address);
    let (_, _, liquidity) = setup.router.add_liquidity_native(
        &setup.user,
        &token.address,
        &(4 * E18),
        &0,
        &E18,
        &0,
        &owner,
        &u64::MAX,
    );

    let digest = pool.permit_digest(&owner, &setup.router.address, &i128::MAX, &u64::MAX);
    let permit = PermitSignature {
        approve_max: true,
        public_key: BytesN::from_array(e, &public_key),
        signature: BytesN::from_array(e, &key.sign(&digest.to_array()).to_bytes()),
    };
    let (amount_token, amount_native) = setup.router.remove_native_with_permit(
        &owner,
        &token.address,
        &liquidity,
        &0,
        &0,
        &to,
        &u64::MAX,
        &permit,
    );
    assert_eq!((amount_token, amount_native), (4 * E18 - 2000, E18 - 500));
    assert_eq!(setup.native.balance(&to), (E18 - 500) as i128);
    assert_eq!(
        pool.allowance(&owner, &setup.router.address),
        i128::MAX - liquidity as i128
    );
    setup.assert_router_empty();
}
