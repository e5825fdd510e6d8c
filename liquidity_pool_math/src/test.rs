#![cfg(test)]
extern crate std;

use crate::{
    get_amount_in, get_amount_out, get_amounts_in, get_amounts_out, quote, sort_tokens,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, Vec};

const E18: u128 = 1_000_000_000_000_000_000;

#[test]
fn test_quote() {
    let e = Env::default();
    assert_eq!(quote(&e, 1, 100, 200), 2);
    assert_eq!(quote(&e, 2, 200, 100), 1);
    assert_eq!(quote(&e, 3, 200, 100), 1);
}

#[test]
#[should_panic(expected = "Error(Contract, #2006)")]
fn test_quote_zero_amount() {
    let e = Env::default();
    quote(&e, 0, 100, 200);
}

#[test]
#[should_panic(expected = "Error(Contract, #2003)")]
fn test_quote_empty_reserve() {
    let e = Env::default();
    quote(&e, 1, 0, 200);
}

#[test]
fn test_get_amount_out() {
    let e = Env::default();
    assert_eq!(get_amount_out(&e, 2, 100, 100), 1);
    assert_eq!(get_amount_out(&e, E18, 5 * E18, 10 * E18), 1662497915624478906);
}

#[test]
#[should_panic(expected = "Error(Contract, #2001)")]
fn test_get_amount_out_zero_input() {
    let e = Env::default();
    get_amount_out(&e, 0, 100, 100);
}

#[test]
#[should_panic(expected = "Error(Contract, #2003)")]
fn test_get_amount_out_no_liquidity() {
    let e = Env::default();
    get_amount_out(&e, 2, 0, 100);
}

#[test]
fn test_get_amount_in() {
    let e = Env::default();
    assert_eq!(get_amount_in(&e, 1, 100, 100), 2);
    assert_eq!(get_amount_in(&e, E18, 5 * E18, 10 * E18), 557227237267357629);
}

#[test]
#[should_panic(expected = "Error(Contract, #2002)")]
fn test_get_amount_in_zero_output() {
    let e = Env::default();
    get_amount_in(&e, 0, 100, 100);
}

#[test]
#[should_panic(expected = "Error(Contract, #2003)")]
fn test_get_amount_in_drains_reserve() {
    let e = Env::default();
    get_amount_in(&e, 100, 100, 100);
}

#[test]
fn test_exact_out_input_covers_output() {
    let e = Env::default();
    let cases: [(u128, u128, u128); 4] = [
        (1, 1_000, 1_000),
        (E18, 5 * E18, 10 * E18),
        (36_476_941, 1_000_000_000, 3_000_000_000),
        (E18 / 30, 2000 * E18, 10 * E18),
    ];
    for (amount_out, reserve_in, reserve_out) in cases {
        let amount_in = get_amount_in(&e, amount_out, reserve_in, reserve_out);
        assert!(get_amount_out(&e, amount_in, reserve_in, reserve_out) >= amount_out);
        // one unit less never buys the same output
        assert!(get_amount_out(&e, amount_in - 1, reserve_in, reserve_out) < amount_out);
    }
}

#[test]
fn test_input_round_trip_rounds_down() {
    let e = Env::default();
    let amount_out = get_amount_out(&e, 5_000, 1_000_000, 1_000);
    assert_eq!(amount_out, 4);
    assert_eq!(get_amount_in(&e, amount_out, 1_000_000, 1_000), 4_029);
}

#[test]
fn test_amounts_chain() {
    let e = Env::default();
    let reserves: Vec<(u128, u128)> = vec![&e, (100u128, 100u128), (1_000, 1_000)];

    let amounts = get_amounts_out(&e, 2, &reserves);
    assert_eq!(amounts, vec![&e, 2u128, 1, 0]);

    let amounts = get_amounts_in(&e, 1, &reserves);
    assert_eq!(amounts, vec![&e, 3u128, 2, 1]);
}

#[test]
#[should_panic(expected = "Error(Contract, #2004)")]
fn test_amounts_chain_requires_hop() {
    let e = Env::default();
    get_amounts_out(&e, 2, &Vec::new(&e));
}

#[test]
fn test_sort_tokens() {
    let e = Env::default();
    let a = Address::generate(&e);
    let b = Address::generate(&e);
    let (t0, t1) = sort_tokens(&e, &a, &b);
    assert!(t0 < t1);
    assert_eq!(sort_tokens(&e, &b, &a), (t0, t1));
}

#[test]
#[should_panic(expected = "Error(Contract, #2005)")]
fn test_sort_identical_tokens() {
    let e = Env::default();
    let a = Address::generate(&e);
    sort_tokens(&e, &a, &a);
}
